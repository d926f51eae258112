//! Default data transfer service

use std::sync::Arc;

use super::decoder::ResponseDecoder;
use super::{Requestable, ResponseRequestable};
use crate::ports::{
    CancellationToken, DataTransferError, DataTransferErrorLogger, DataTransferErrorResolver,
    DataTransferService, NetworkError, NetworkService, ResolvedError,
};

/// Data transfer service on top of a [`NetworkService`].
///
/// Every failure goes through the error logger exactly once, after it has
/// been classified.
pub struct DefaultDataTransferService {
    network_service: Arc<dyn NetworkService>,
    error_resolver: Arc<dyn DataTransferErrorResolver>,
    error_logger: Arc<dyn DataTransferErrorLogger>,
}

impl DefaultDataTransferService {
    /// Creates a data transfer service.
    pub fn new(
        network_service: Arc<dyn NetworkService>,
        error_resolver: Arc<dyn DataTransferErrorResolver>,
        error_logger: Arc<dyn DataTransferErrorLogger>,
    ) -> Self {
        Self {
            network_service,
            error_resolver,
            error_logger,
        }
    }

    fn decode<T>(
        data: Option<Vec<u8>>,
        decoder: &dyn ResponseDecoder<T>,
    ) -> Result<T, DataTransferError> {
        let data = data.ok_or(DataTransferError::NoResponse)?;
        decoder
            .decode(&data)
            .map_err(|e| DataTransferError::Parsing(Arc::new(e)))
    }

    fn resolve(&self, error: NetworkError) -> DataTransferError {
        match self.error_resolver.resolve(error) {
            ResolvedError::Network(error) => DataTransferError::NetworkFailure(error),
            ResolvedError::Other(error) => DataTransferError::ResolvedNetworkFailure(error),
        }
    }

    fn log_failure<T>(&self, result: Result<T, DataTransferError>) -> Result<T, DataTransferError> {
        result.inspect_err(|error| self.error_logger.log(error))
    }
}

impl DataTransferService for DefaultDataTransferService {
    async fn request<E>(
        &self,
        endpoint: &E,
        cancel: &CancellationToken,
    ) -> Result<E::Response, DataTransferError>
    where
        E: ResponseRequestable,
        E::Response: Send,
    {
        let result = match self.network_service.request(endpoint, cancel).await {
            Ok(data) => Self::decode(data, endpoint.response_decoder()),
            Err(error) => Err(self.resolve(error)),
        };
        self.log_failure(result)
    }

    async fn request_no_content<E>(
        &self,
        endpoint: &E,
        cancel: &CancellationToken,
    ) -> Result<(), DataTransferError>
    where
        E: Requestable,
    {
        let result = self
            .network_service
            .request(endpoint, cancel)
            .await
            .map(drop)
            .map_err(|error| self.resolve(error));
        self.log_failure(result)
    }
}

/// Resolver that keeps every network error as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDataTransferErrorResolver;

impl DataTransferErrorResolver for DefaultDataTransferErrorResolver {
    fn resolve(&self, error: NetworkError) -> ResolvedError {
        ResolvedError::Network(error)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::network::{Endpoint, NetworkConfig, RawDataResponseDecoder};
    use async_trait::async_trait;
    use planets_domain::HttpMethod;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use std::sync::Mutex;
    use thiserror::Error;
    use url::Url;

    #[derive(Debug, Deserialize)]
    struct MockModel {
        name: String,
    }

    /// Network service returning a canned outcome, after resolving the
    /// endpoint the way the real one does.
    struct NetworkServiceMock {
        outcome: Result<Option<Vec<u8>>, NetworkError>,
    }

    impl NetworkServiceMock {
        fn data(data: &[u8]) -> Arc<Self> {
            Arc::new(Self {
                outcome: Ok(Some(data.to_vec())),
            })
        }

        fn no_data() -> Arc<Self> {
            Arc::new(Self { outcome: Ok(None) })
        }

        fn failing(error: NetworkError) -> Arc<Self> {
            Arc::new(Self {
                outcome: Err(error),
            })
        }
    }

    #[async_trait]
    impl NetworkService for NetworkServiceMock {
        async fn request(
            &self,
            endpoint: &dyn Requestable,
            _cancel: &CancellationToken,
        ) -> Result<Option<Vec<u8>>, NetworkError> {
            let config = NetworkConfig::new(Url::parse("https://mock.endpoint.com").unwrap());
            endpoint
                .url_request(&config)
                .map_err(|_| NetworkError::UrlGeneration)?;
            self.outcome.clone()
        }
    }

    #[derive(Default)]
    struct ErrorLoggerMock {
        logged: Mutex<Vec<String>>,
    }

    impl DataTransferErrorLogger for ErrorLoggerMock {
        fn log(&self, error: &DataTransferError) {
            self.logged.lock().unwrap().push(error.to_string());
        }
    }

    #[derive(Debug, Error)]
    #[error("session expired")]
    struct SessionExpired;

    struct SessionExpiredResolver;

    impl DataTransferErrorResolver for SessionExpiredResolver {
        fn resolve(&self, error: NetworkError) -> ResolvedError {
            match error {
                NetworkError::Unauthorized => ResolvedError::Other(Arc::new(SessionExpired)),
                other => ResolvedError::Network(other),
            }
        }
    }

    fn service(
        network: Arc<NetworkServiceMock>,
    ) -> (DefaultDataTransferService, Arc<ErrorLoggerMock>) {
        let logger = Arc::new(ErrorLoggerMock::default());
        let service = DefaultDataTransferService::new(
            network,
            Arc::new(DefaultDataTransferErrorResolver),
            logger.clone(),
        );
        (service, logger)
    }

    fn endpoint() -> Endpoint<MockModel> {
        Endpoint::new("http://mock.endpoint.com", HttpMethod::Get).full_path()
    }

    #[tokio::test]
    async fn valid_json_is_decoded() {
        let (sut, logger) = service(NetworkServiceMock::data(br#"{"name": "Hello"}"#));

        let result = sut
            .request(&endpoint(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(result.name, "Hello");
        assert!(logger.logged.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn mismatched_json_is_parsing_failure() {
        let (sut, logger) = service(NetworkServiceMock::data(br#"{"age": 20}"#));

        let result = sut.request(&endpoint(), &CancellationToken::new()).await;

        assert!(matches!(result, Err(DataTransferError::Parsing(_))));
        assert_eq!(logger.logged.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn server_error_is_rethrown_as_network_failure() {
        let (sut, logger) = service(NetworkServiceMock::failing(NetworkError::HttpStatus {
            status_code: 500,
            data: Some(br#"{"invalidStructure": "Nothing"}"#.to_vec()),
        }));

        let result = sut.request(&endpoint(), &CancellationToken::new()).await;

        assert!(matches!(
            result,
            Err(DataTransferError::NetworkFailure(NetworkError::HttpStatus {
                status_code: 500,
                ..
            }))
        ));
        assert_eq!(logger.logged.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_body_is_no_response() {
        let (sut, logger) = service(NetworkServiceMock::no_data());

        let result = sut.request(&endpoint(), &CancellationToken::new()).await;

        assert!(matches!(result, Err(DataTransferError::NoResponse)));
        assert_eq!(logger.logged.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn no_content_request_accepts_missing_body() {
        let (sut, logger) = service(NetworkServiceMock::no_data());

        let result = sut
            .request_no_content(&endpoint(), &CancellationToken::new())
            .await;

        assert!(result.is_ok());
        assert!(logger.logged.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn no_content_request_ignores_undecodable_body() {
        let (sut, _) = service(NetworkServiceMock::data(b"not json"));

        let result = sut
            .request_no_content(&endpoint(), &CancellationToken::new())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn no_content_request_propagates_network_failure() {
        let (sut, logger) = service(NetworkServiceMock::failing(NetworkError::NotConnected));

        let result = sut
            .request_no_content(&endpoint(), &CancellationToken::new())
            .await;

        assert!(matches!(
            result,
            Err(DataTransferError::NetworkFailure(NetworkError::NotConnected))
        ));
        assert_eq!(logger.logged.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn resolver_can_replace_network_error() {
        let logger = Arc::new(ErrorLoggerMock::default());
        let sut = DefaultDataTransferService::new(
            NetworkServiceMock::failing(NetworkError::Unauthorized),
            Arc::new(SessionExpiredResolver),
            logger.clone(),
        );

        let result = sut.request(&endpoint(), &CancellationToken::new()).await;

        match result {
            Err(DataTransferError::ResolvedNetworkFailure(error)) => {
                assert_eq!(error.to_string(), "session expired");
            }
            other => panic!("expected ResolvedNetworkFailure, got {other:?}"),
        }
        assert_eq!(
            logger.logged.lock().unwrap().as_slice(),
            ["session expired".to_string()]
        );
    }

    #[tokio::test]
    async fn resolver_keeping_network_error_yields_network_failure() {
        let sut = DefaultDataTransferService::new(
            NetworkServiceMock::failing(NetworkError::Cancelled),
            Arc::new(SessionExpiredResolver),
            Arc::new(ErrorLoggerMock::default()),
        );

        let result = sut.request(&endpoint(), &CancellationToken::new()).await;

        assert!(matches!(
            result,
            Err(DataTransferError::NetworkFailure(NetworkError::Cancelled))
        ));
    }

    #[tokio::test]
    async fn raw_decoder_returns_exact_bytes() {
        let (sut, _) = service(NetworkServiceMock::data(b"\x89PNG"));
        let endpoint = Endpoint::<Vec<u8>>::with_decoder(
            "http://mock.endpoint.com/image",
            HttpMethod::Get,
            RawDataResponseDecoder,
        )
        .full_path();

        let bytes = sut
            .request(&endpoint, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(bytes, b"\x89PNG".to_vec());
    }
}

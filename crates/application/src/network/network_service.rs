//! Default network service
//!
//! Resolves endpoints, hands them to the session manager and classifies the
//! outcome. Nothing above this layer sees a `TransportError`.

use std::sync::Arc;

use async_trait::async_trait;

use super::{NetworkConfig, Requestable};
use crate::ports::{
    CancellationToken, HttpRequest, NetworkError, NetworkErrorLogger, NetworkService,
    NetworkSessionManager, SessionResponse, TransportError,
};

/// Network service backed by a [`NetworkSessionManager`].
pub struct DefaultNetworkService {
    config: NetworkConfig,
    session_manager: Arc<dyn NetworkSessionManager>,
    logger: Arc<dyn NetworkErrorLogger>,
}

impl DefaultNetworkService {
    /// Creates a network service.
    pub fn new(
        config: NetworkConfig,
        session_manager: Arc<dyn NetworkSessionManager>,
        logger: Arc<dyn NetworkErrorLogger>,
    ) -> Self {
        Self {
            config,
            session_manager,
            logger,
        }
    }

    /// Returns the configuration requests are resolved against.
    #[must_use]
    pub const fn config(&self) -> &NetworkConfig {
        &self.config
    }

    async fn send(
        &self,
        request: HttpRequest,
        cancel: &CancellationToken,
    ) -> Result<Option<Vec<u8>>, NetworkError> {
        self.logger.log_request(&request);

        let outcome = if cancel.is_cancelled() {
            Err(TransportError::Cancelled)
        } else {
            // Race between the transport and cancellation
            tokio::select! {
                biased;
                () = cancel.cancelled() => Err(TransportError::Cancelled),
                result = self.session_manager.request(&request) => result,
            }
        };

        let result = match outcome {
            Ok(response) => {
                self.logger
                    .log_response(response.data.as_deref(), response.response.as_ref());
                Self::classify(response)
            }
            Err(error) => Err(Self::resolve(error)),
        };

        if let Err(error) = &result {
            self.logger.log_error(error);
        }
        result
    }

    fn classify(response: SessionResponse) -> Result<Option<Vec<u8>>, NetworkError> {
        let Some(head) = response.response else {
            return Err(NetworkError::NoResponse);
        };

        match head.status_code {
            200..=299 => Ok(response.data),
            401 => Err(NetworkError::Unauthorized),
            status_code => Err(NetworkError::HttpStatus {
                status_code,
                data: response.data,
            }),
        }
    }

    fn resolve(error: TransportError) -> NetworkError {
        match error {
            TransportError::NotConnected => NetworkError::NotConnected,
            TransportError::Cancelled => NetworkError::Cancelled,
            TransportError::Other(cause) => NetworkError::Generic(Arc::from(cause)),
        }
    }
}

#[async_trait]
impl NetworkService for DefaultNetworkService {
    async fn request(
        &self,
        endpoint: &dyn Requestable,
        cancel: &CancellationToken,
    ) -> Result<Option<Vec<u8>>, NetworkError> {
        let request = match endpoint.url_request(&self.config) {
            Ok(request) => request,
            Err(cause) => {
                self.logger.log_request_generation_error(&cause);
                let error = NetworkError::UrlGeneration;
                self.logger.log_error(&error);
                return Err(error);
            }
        };

        self.send(request, cancel).await
    }
}

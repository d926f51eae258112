//! Network session manager implementation using reqwest.
//!
//! This adapter implements the `NetworkSessionManager` port. It performs the
//! HTTP exchange only; status classification and logging happen in the
//! network service.

use std::collections::BTreeMap;

use async_trait::async_trait;
use planets_application::ports::{
    HttpRequest, HttpResponseHead, NetworkSessionManager, SessionResponse, TransportError,
};
use planets_domain::HttpMethod;
use reqwest::{Client, Method};

/// Transport for the network service, wrapping a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestSessionManager {
    client: Client,
}

impl ReqwestSessionManager {
    /// Creates a session manager with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - User-Agent: "Planets/0.1.0"
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("Planets/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Other(Box::new(e)))?;

        Ok(Self { client })
    }

    /// Creates a session manager with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    fn map_error(error: reqwest::Error) -> TransportError {
        if error.is_connect() {
            return TransportError::NotConnected;
        }
        TransportError::Other(Box::new(error))
    }
}

#[async_trait]
impl NetworkSessionManager for ReqwestSessionManager {
    async fn request(&self, request: &HttpRequest) -> Result<SessionResponse, TransportError> {
        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), request.url.as_str());

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(Self::map_error)?;

        let status_code = response.status().as_u16();
        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        let body = response.bytes().await.map_err(Self::map_error)?;
        let data = (!body.is_empty()).then(|| body.to_vec());

        Ok(SessionResponse {
            data,
            response: Some(HttpResponseHead {
                status_code,
                headers,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(
            ReqwestSessionManager::to_reqwest_method(HttpMethod::Get),
            Method::GET
        );
        assert_eq!(
            ReqwestSessionManager::to_reqwest_method(HttpMethod::Patch),
            Method::PATCH
        );
        assert_eq!(
            ReqwestSessionManager::to_reqwest_method(HttpMethod::Delete),
            Method::DELETE
        );
    }

    #[test]
    fn test_session_creation() {
        assert!(ReqwestSessionManager::new().is_ok());
    }
}

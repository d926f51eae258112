//! Network ports
//!
//! The network service turns a [`Requestable`] into raw response bytes. It
//! talks to the outside world through a [`NetworkSessionManager`] and reports
//! every step to a [`NetworkErrorLogger`].

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::sync::Arc;

use async_trait::async_trait;
use planets_domain::HttpMethod;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use super::CancellationToken;
use crate::network::{RequestGenerationError, Requestable};

/// Boxed error used for causes that cross layer boundaries.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Classified failure of a single network request.
#[derive(Debug, Clone, Error)]
pub enum NetworkError {
    /// The server answered with a non-success status other than 401.
    #[error("request failed with status code {status_code}")]
    HttpStatus {
        /// HTTP status code of the response
        status_code: u16,
        /// Response body, if the server sent one
        data: Option<Vec<u8>>,
    },

    /// The device has no network connectivity.
    #[error("not connected to the internet")]
    NotConnected,

    /// The request was cancelled before it completed.
    #[error("request cancelled")]
    Cancelled,

    /// Any other transport failure.
    #[error("network failure: {0}")]
    Generic(#[source] Arc<dyn StdError + Send + Sync + 'static>),

    /// The endpoint could not be turned into a request URL or body.
    #[error("failed to generate request URL")]
    UrlGeneration,

    /// The transport returned something that is not an HTTP response.
    #[error("no HTTP response received")]
    NoResponse,

    /// The server answered 401.
    #[error("unauthorized")]
    Unauthorized,
}

impl NetworkError {
    /// Returns true if this is an HTTP status failure with the given code.
    #[must_use]
    pub const fn has_status_code(&self, code: u16) -> bool {
        matches!(self, Self::HttpStatus { status_code, .. } if *status_code == code)
    }

    /// Returns true for an HTTP 404 failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.has_status_code(404)
    }
}

/// Failure reported by the transport session itself.
#[derive(Debug, Error)]
pub enum TransportError {
    /// No connectivity to the network.
    #[error("not connected to the internet")]
    NotConnected,

    /// The transport observed a cancellation.
    #[error("transport cancelled")]
    Cancelled,

    /// Anything else.
    #[error(transparent)]
    Other(BoxError),
}

/// Fully resolved outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Correlation id for logging
    pub id: Uuid,
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute target URL including the query string
    pub url: Url,
    /// Merged request headers
    pub headers: BTreeMap<String, String>,
    /// Encoded body, if any
    pub body: Option<Vec<u8>>,
}

/// Status line and headers of a received response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponseHead {
    /// HTTP status code
    pub status_code: u16,
    /// Response headers
    pub headers: BTreeMap<String, String>,
}

impl HttpResponseHead {
    /// Creates a response head with no headers.
    #[must_use]
    pub const fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: BTreeMap::new(),
        }
    }
}

/// What the transport hands back for one request.
///
/// `response` is `None` when the transport produced something that is not
/// an HTTP response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionResponse {
    /// Response body, `None` when the response carried no body
    pub data: Option<Vec<u8>>,
    /// Response head
    pub response: Option<HttpResponseHead>,
}

/// Port for the transport that actually performs HTTP exchanges.
#[async_trait]
pub trait NetworkSessionManager: Send + Sync {
    /// Sends the request and waits for a single response.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` when no response could be obtained.
    async fn request(&self, request: &HttpRequest) -> Result<SessionResponse, TransportError>;
}

/// Fire-and-forget observer of network activity.
///
/// Implementations must not block and must not panic.
pub trait NetworkErrorLogger: Send + Sync {
    /// Called before the request is handed to the transport.
    fn log_request(&self, request: &HttpRequest);

    /// Called for every response the transport returns.
    fn log_response(&self, data: Option<&[u8]>, response: Option<&HttpResponseHead>);

    /// Called when an endpoint cannot be turned into a request, before the
    /// resulting `UrlGeneration` failure is passed to [`Self::log_error`].
    fn log_request_generation_error(&self, error: &RequestGenerationError);

    /// Called for every failure before it is returned.
    fn log_error(&self, error: &NetworkError);
}

/// Port for executing a single endpoint request.
#[async_trait]
pub trait NetworkService: Send + Sync {
    /// Executes the endpoint and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns a classified `NetworkError` for transport faults, non-success
    /// statuses, cancellation and request generation failures.
    async fn request(
        &self,
        endpoint: &dyn Requestable,
        cancel: &CancellationToken,
    ) -> Result<Option<Vec<u8>>, NetworkError>;
}

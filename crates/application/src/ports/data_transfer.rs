//! Data transfer ports
//!
//! The data transfer service sits on top of the network service and turns raw
//! bytes into typed values. It is the only layer that produces
//! [`DataTransferError`]; transport errors never leak past it unwrapped.

use std::error::Error as StdError;
use std::future::Future;
use std::sync::Arc;

use thiserror::Error;

use super::{CancellationToken, NetworkError};
use crate::network::{DecodeError, Requestable, ResponseRequestable};

/// Failure surfaced by the data transfer layer.
#[derive(Debug, Clone, Error)]
pub enum DataTransferError {
    /// A typed response was expected but the server sent no body.
    #[error("no response data")]
    NoResponse,

    /// The body did not decode into the expected type.
    #[error("failed to parse response: {0}")]
    Parsing(#[source] Arc<DecodeError>),

    /// The network layer failed; the resolver kept it a network error.
    #[error(transparent)]
    NetworkFailure(NetworkError),

    /// The resolver mapped the network failure to an application error.
    #[error("{0}")]
    ResolvedNetworkFailure(#[source] Arc<dyn StdError + Send + Sync + 'static>),
}

impl DataTransferError {
    /// Returns the underlying network error, if this is a network failure.
    #[must_use]
    pub const fn network_error(&self) -> Option<&NetworkError> {
        match self {
            Self::NetworkFailure(error) => Some(error),
            _ => None,
        }
    }

    /// Returns true when the root cause is missing connectivity.
    ///
    /// Resolved failures are inspected too, in case the resolver wrapped
    /// the original `NetworkError` as its source.
    #[must_use]
    pub fn is_internet_connection_error(&self) -> bool {
        match self {
            Self::NetworkFailure(NetworkError::NotConnected) => true,
            Self::ResolvedNetworkFailure(error) => {
                let mut source: Option<&(dyn StdError + 'static)> = Some(&**error);
                while let Some(current) = source {
                    if matches!(
                        current.downcast_ref::<NetworkError>(),
                        Some(NetworkError::NotConnected)
                    ) {
                        return true;
                    }
                    source = current.source();
                }
                false
            }
            _ => false,
        }
    }
}

/// Outcome of resolving a network error.
#[derive(Debug, Clone)]
pub enum ResolvedError {
    /// Still a network error (possibly a different one).
    Network(NetworkError),
    /// An application-specific error replacing the network error.
    Other(Arc<dyn StdError + Send + Sync + 'static>),
}

/// Maps network errors to deployment-specific errors.
pub trait DataTransferErrorResolver: Send + Sync {
    /// Resolves a network error.
    fn resolve(&self, error: NetworkError) -> ResolvedError;
}

/// Fire-and-forget sink for data transfer failures.
pub trait DataTransferErrorLogger: Send + Sync {
    /// Records a failure. Called exactly once per failed request.
    fn log(&self, error: &DataTransferError);
}

/// Port for typed request execution.
///
/// Methods are generic over the endpoint type, so callers hold a concrete
/// implementation rather than a trait object.
pub trait DataTransferService: Send + Sync {
    /// Executes the endpoint and decodes the body into its response type.
    ///
    /// # Errors
    ///
    /// Returns `NoResponse` for a missing body, `Parsing` for a body that
    /// fails to decode, and a network failure otherwise.
    fn request<E>(
        &self,
        endpoint: &E,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<E::Response, DataTransferError>> + Send
    where
        E: ResponseRequestable,
        E::Response: Send;

    /// Executes the endpoint and discards any body without decoding it.
    ///
    /// # Errors
    ///
    /// Returns a network failure; a missing body is not an error.
    fn request_no_content<E>(
        &self,
        endpoint: &E,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<(), DataTransferError>> + Send
    where
        E: Requestable;
}

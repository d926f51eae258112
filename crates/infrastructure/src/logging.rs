//! Logger adapters emitting `tracing` events.

use planets_application::RequestGenerationError;
use planets_application::ports::{
    DataTransferError, DataTransferErrorLogger, HttpRequest, HttpResponseHead, NetworkError,
    NetworkErrorLogger,
};
use tracing::{debug, error, trace, warn};

/// Network logger writing requests, responses and failures as tracing events.
///
/// Bodies are only emitted at `TRACE` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNetworkLogger;

impl TracingNetworkLogger {
    /// Creates a new logger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl NetworkErrorLogger for TracingNetworkLogger {
    fn log_request(&self, request: &HttpRequest) {
        debug!(
            request_id = %request.id,
            method = %request.method,
            url = %request.url,
            "sending request"
        );
        if let Some(body) = &request.body {
            trace!(request_id = %request.id, body = %String::from_utf8_lossy(body), "request body");
        }
    }

    fn log_response(&self, data: Option<&[u8]>, response: Option<&HttpResponseHead>) {
        match response {
            Some(head) => debug!(status = head.status_code, "received response"),
            None => debug!("received non-HTTP response"),
        }
        if let Some(data) = data {
            trace!(body = %String::from_utf8_lossy(data), "response body");
        }
    }

    fn log_request_generation_error(&self, error: &RequestGenerationError) {
        debug!(error = %error, "request generation failed");
    }

    fn log_error(&self, error: &NetworkError) {
        match error {
            NetworkError::Cancelled => debug!("request cancelled"),
            other => warn!(error = %other, "network request failed"),
        }
    }
}

/// Data transfer logger writing one event per failed request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDataTransferErrorLogger;

impl TracingDataTransferErrorLogger {
    /// Creates a new logger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DataTransferErrorLogger for TracingDataTransferErrorLogger {
    fn log(&self, error: &DataTransferError) {
        if matches!(error.network_error(), Some(NetworkError::Cancelled)) {
            debug!("data transfer cancelled");
            return;
        }
        error!(error = %error, "data transfer failed");
    }
}

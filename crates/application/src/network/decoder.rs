//! Response decoders

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure to decode a response body.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body is not valid JSON for the target type.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decodes raw response bytes into `T`.
pub trait ResponseDecoder<T>: Send + Sync {
    /// Decodes the body.
    ///
    /// # Errors
    ///
    /// Returns a `DecodeError` if the bytes do not represent a `T`.
    fn decode(&self, data: &[u8]) -> Result<T, DecodeError>;
}

/// Decodes JSON bodies with serde.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonResponseDecoder;

impl<T: DeserializeOwned> ResponseDecoder<T> for JsonResponseDecoder {
    fn decode(&self, data: &[u8]) -> Result<T, DecodeError> {
        Ok(serde_json::from_slice(data)?)
    }
}

/// Passes the body through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawDataResponseDecoder;

impl ResponseDecoder<Vec<u8>> for RawDataResponseDecoder {
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, DecodeError> {
        Ok(data.to_vec())
    }
}

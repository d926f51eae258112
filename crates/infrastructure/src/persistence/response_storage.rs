//! Response storage port and cache entry types.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{PlanetsRequestDto, PlanetsResponseDto};
use crate::serialization::SerializationError;

/// Identity of a cached response, derived from the request DTO.
///
/// Two requests map to the same key exactly when their DTOs are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestKey(String);

impl RequestKey {
    /// Returns the key as a string, e.g. `planets?page=2`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a file name stem safe for any platform.
    #[must_use]
    pub fn file_stem(&self) -> String {
        self.0
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect()
    }
}

impl From<&PlanetsRequestDto> for RequestKey {
    fn from(request: &PlanetsRequestDto) -> Self {
        Self(format!("planets?page={}", request.page))
    }
}

/// A stored response with its key and storage time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedResponse {
    /// Request the response answers
    pub key: RequestKey,
    /// When the response was stored
    pub stored_at: DateTime<Utc>,
    /// The response itself
    pub response: PlanetsResponseDto,
}

/// Error type for response storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

/// Cache of planets responses keyed by request.
///
/// Saving the same request twice replaces the earlier entry.
#[async_trait]
pub trait PlanetsResponseStorage: Send + Sync {
    /// Stores the response for the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be written.
    async fn save(
        &self,
        response: &PlanetsResponseDto,
        request: &PlanetsRequestDto,
    ) -> Result<(), StorageError>;

    /// Returns the stored entry for the request, if there is one.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry exists but cannot be read.
    async fn get_entry(
        &self,
        request: &PlanetsRequestDto,
    ) -> Result<Option<CachedResponse>, StorageError>;

    /// Returns the stored response for the request, if there is one.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry exists but cannot be read.
    async fn get_response(
        &self,
        request: &PlanetsRequestDto,
    ) -> Result<Option<PlanetsResponseDto>, StorageError> {
        Ok(self.get_entry(request).await?.map(|entry| entry.response))
    }
}

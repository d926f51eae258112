//! File-backed response storage.
//!
//! Stores one JSON file per request in the cache directory:
//! - Linux: ~/.cache/planets/planets-page-1.json
//! - macOS: ~/Library/Caches/planets/planets-page-1.json
//! - Windows: %LOCALAPPDATA%/planets/planets-page-1.json

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use planets_application::ports::Clock;
use tokio::fs;
use tracing::warn;
use uuid::Uuid;

use super::{CachedResponse, PlanetsResponseStorage, RequestKey, StorageError};
use crate::api::{PlanetsRequestDto, PlanetsResponseDto};
use crate::serialization::{from_json_bytes, to_json_stable_bytes};

/// Response storage persisted as JSON files.
pub struct FilePlanetsResponseStorage {
    directory: PathBuf,
    clock: Arc<dyn Clock>,
}

impl FilePlanetsResponseStorage {
    /// Creates a storage writing into `directory`.
    ///
    /// The directory is created on first save.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            directory: directory.into(),
            clock,
        }
    }

    /// Returns the platform cache directory for planets responses.
    #[must_use]
    pub fn default_directory() -> Option<PathBuf> {
        dirs::cache_dir().map(|p| p.join("planets"))
    }

    /// Returns the directory entries are written to.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn entry_path(&self, key: &RequestKey) -> PathBuf {
        self.directory.join(format!("{}.json", key.file_stem()))
    }
}

#[async_trait]
impl PlanetsResponseStorage for FilePlanetsResponseStorage {
    async fn save(
        &self,
        response: &PlanetsResponseDto,
        request: &PlanetsRequestDto,
    ) -> Result<(), StorageError> {
        let key = RequestKey::from(request);
        let path = self.entry_path(&key);
        let entry = CachedResponse {
            key,
            stored_at: self.clock.now(),
            response: response.clone(),
        };
        let content = to_json_stable_bytes(&entry)?;

        fs::create_dir_all(&self.directory).await?;

        // Readers see either the old file or the new one, never a partial write.
        let temp_path = path.with_extension(format!("{}.tmp", Uuid::now_v7()));
        let written = match fs::write(&temp_path, content).await {
            Ok(()) => fs::rename(&temp_path, &path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        Ok(())
    }

    async fn get_entry(
        &self,
        request: &PlanetsRequestDto,
    ) -> Result<Option<CachedResponse>, StorageError> {
        let key = RequestKey::from(request);
        let path = self.entry_path(&key);

        let content = match fs::read(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let entry: CachedResponse = from_json_bytes(&content)?;
        if entry.key != key {
            warn!(
                path = %path.display(),
                expected = key.as_str(),
                found = entry.key.as_str(),
                "cache file holds another request, ignoring"
            );
            return Ok(None);
        }

        Ok(Some(entry))
    }
}

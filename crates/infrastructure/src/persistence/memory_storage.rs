//! In-memory response storage.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use planets_application::ports::Clock;

use super::{CachedResponse, PlanetsResponseStorage, RequestKey, StorageError};
use crate::api::{PlanetsRequestDto, PlanetsResponseDto};

/// Response storage held in a concurrent in-process map.
///
/// Entries never expire and are lost when the process exits. Clones share
/// the same entries.
#[derive(Clone)]
pub struct InMemoryPlanetsResponseStorage {
    entries: Arc<DashMap<RequestKey, CachedResponse>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryPlanetsResponseStorage {
    /// Creates an empty storage.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            clock,
        }
    }
}

#[async_trait]
impl PlanetsResponseStorage for InMemoryPlanetsResponseStorage {
    async fn save(
        &self,
        response: &PlanetsResponseDto,
        request: &PlanetsRequestDto,
    ) -> Result<(), StorageError> {
        let key = RequestKey::from(request);
        let entry = CachedResponse {
            key: key.clone(),
            stored_at: self.clock.now(),
            response: response.clone(),
        };
        self.entries.insert(key, entry);
        Ok(())
    }

    async fn get_entry(
        &self,
        request: &PlanetsRequestDto,
    ) -> Result<Option<CachedResponse>, StorageError> {
        Ok(self
            .entries
            .get(&RequestKey::from(request))
            .map(|entry| entry.value().clone()))
    }
}

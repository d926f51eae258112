//! Cache-first planets repository.

use std::sync::Arc;

use async_trait::async_trait;
use planets_application::ports::{
    CancellationToken, DataTransferError, DataTransferService, PlanetsRepository,
};
use planets_domain::{PlanetsPage, PlanetsQuery};
use tracing::{debug, warn};

use crate::api::{APIEndpoints, PlanetsRequestDto};
use crate::persistence::PlanetsResponseStorage;

/// Planets repository answering from the response cache when it can.
///
/// A cache read fault is treated as a miss and a cache write fault does not
/// fail the request; both are logged.
pub struct DefaultPlanetsRepository<D: DataTransferService> {
    data_transfer_service: Arc<D>,
    cache: Arc<dyn PlanetsResponseStorage>,
}

impl<D: DataTransferService> DefaultPlanetsRepository<D> {
    /// Creates a repository.
    #[must_use]
    pub fn new(data_transfer_service: Arc<D>, cache: Arc<dyn PlanetsResponseStorage>) -> Self {
        Self {
            data_transfer_service,
            cache,
        }
    }
}

#[async_trait]
impl<D: DataTransferService> PlanetsRepository for DefaultPlanetsRepository<D> {
    async fn fetch_planets(
        &self,
        query: &PlanetsQuery,
        cancel: &CancellationToken,
    ) -> Result<PlanetsPage, DataTransferError> {
        let request = PlanetsRequestDto::from(query);

        match self.cache.get_response(&request).await {
            Ok(Some(cached)) => {
                debug!(page = %request.page, "planets served from cache");
                return Ok(cached.into_domain());
            }
            Ok(None) => {}
            Err(e) => warn!(page = %request.page, error = %e, "reading planets cache failed"),
        }

        let endpoint = APIEndpoints::planets_list(&request);
        let response = self
            .data_transfer_service
            .request(&endpoint, cancel)
            .await?;

        if let Err(e) = self.cache.save(&response, &request).await {
            warn!(page = %request.page, error = %e, "writing planets cache failed");
        }

        Ok(response.into_domain())
    }
}

//! Planets repository port
//!
//! The repository works with domain types only; transfer objects stay in
//! the infrastructure layer.

use async_trait::async_trait;
use planets_domain::{PlanetsPage, PlanetsQuery};

use super::{CancellationToken, DataTransferError};

/// Repository trait for the paginated planets listing.
#[async_trait]
pub trait PlanetsRepository: Send + Sync {
    /// Fetches one page of planets, from cache when available.
    ///
    /// # Errors
    /// Returns the `DataTransferError` of the underlying request unchanged.
    async fn fetch_planets(
        &self,
        query: &PlanetsQuery,
        cancel: &CancellationToken,
    ) -> Result<PlanetsPage, DataTransferError>;
}

//! Fetch planets use case.

use std::sync::Arc;

use planets_domain::{PlanetsPage, PlanetsQuery};

use crate::ports::{CancellationToken, DataTransferError, PlanetsRepository};

/// Input for fetching a page of planets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchPlanetsInput {
    /// Page to fetch.
    pub query: PlanetsQuery,
}

impl FetchPlanetsInput {
    /// Creates an input for the given query.
    #[must_use]
    pub const fn new(query: PlanetsQuery) -> Self {
        Self { query }
    }
}

/// Use case for fetching one page of planets.
pub struct FetchPlanets<R: PlanetsRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: PlanetsRepository + ?Sized> FetchPlanets<R> {
    /// Creates a new `FetchPlanets` use case.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fetches the requested page through the repository.
    ///
    /// # Errors
    /// Returns whatever the repository fails with, unchanged.
    pub async fn execute(
        &self,
        input: FetchPlanetsInput,
        cancel: &CancellationToken,
    ) -> Result<PlanetsPage, DataTransferError> {
        self.repository.fetch_planets(&input.query, cancel).await
    }
}

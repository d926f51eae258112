//! Dependency container.
//!
//! Every collaborator is built once here and handed to its dependents through
//! their constructors.

use std::sync::Arc;

use planets_application::ports::{Clock, NetworkSessionManager, PlanetsRepository};
use planets_application::{
    DefaultDataTransferErrorResolver, DefaultDataTransferService, DefaultNetworkService,
    FetchPlanets, NetworkConfig,
};
use planets_infrastructure::{
    DefaultPlanetsRepository, FilePlanetsResponseStorage, InMemoryPlanetsResponseStorage,
    PlanetsResponseStorage, ReqwestSessionManager, SystemClock, TracingDataTransferErrorLogger,
    TracingNetworkLogger,
};
use tracing::debug;

use crate::configuration::{AppConfiguration, CacheBackend};
use crate::error::AppError;
use crate::planets_list::PlanetsListModel;

/// Holds the wired application graph.
pub struct AppContainer {
    configuration: AppConfiguration,
    planets_repository: Arc<dyn PlanetsRepository>,
}

impl AppContainer {
    /// Builds the container with the reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport or the response cache cannot be set up.
    pub fn new(configuration: AppConfiguration) -> Result<Self, AppError> {
        let session = ReqwestSessionManager::new()?;
        Self::with_session(configuration, Arc::new(session))
    }

    /// Builds the container on top of the given transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the response cache cannot be set up.
    pub fn with_session(
        configuration: AppConfiguration,
        session: Arc<dyn NetworkSessionManager>,
    ) -> Result<Self, AppError> {
        let network_config = configuration.headers.iter().fold(
            NetworkConfig::new(configuration.api_base_url.clone()),
            |config, (name, value)| config.with_header(name, value),
        );
        let network_service =
            DefaultNetworkService::new(network_config, session, Arc::new(TracingNetworkLogger));
        let data_transfer_service = DefaultDataTransferService::new(
            Arc::new(network_service),
            Arc::new(DefaultDataTransferErrorResolver),
            Arc::new(TracingDataTransferErrorLogger),
        );
        let cache = Self::response_storage(&configuration)?;
        let planets_repository =
            DefaultPlanetsRepository::new(Arc::new(data_transfer_service), cache);

        Ok(Self::from_repository(
            configuration,
            Arc::new(planets_repository),
        ))
    }

    /// Builds the container around an existing repository.
    #[must_use]
    pub fn from_repository(
        configuration: AppConfiguration,
        planets_repository: Arc<dyn PlanetsRepository>,
    ) -> Self {
        Self {
            configuration,
            planets_repository,
        }
    }

    /// Returns the configuration the container was built with.
    #[must_use]
    pub const fn configuration(&self) -> &AppConfiguration {
        &self.configuration
    }

    /// Creates the fetch planets use case.
    #[must_use]
    pub fn fetch_planets_use_case(&self) -> FetchPlanets<dyn PlanetsRepository> {
        FetchPlanets::new(Arc::clone(&self.planets_repository))
    }

    /// Creates the model behind the planets list screen.
    #[must_use]
    pub fn make_planets_list_model(&self) -> PlanetsListModel {
        PlanetsListModel::new(self.fetch_planets_use_case())
    }

    fn response_storage(
        configuration: &AppConfiguration,
    ) -> Result<Arc<dyn PlanetsResponseStorage>, AppError> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
        match configuration.cache {
            CacheBackend::Memory => Ok(Arc::new(InMemoryPlanetsResponseStorage::new(clock))),
            CacheBackend::File => {
                let directory = configuration
                    .cache_dir
                    .clone()
                    .or_else(FilePlanetsResponseStorage::default_directory)
                    .ok_or(AppError::NoCacheDir)?;
                debug!(directory = %directory.display(), "using file response cache");
                Ok(Arc::new(FilePlanetsResponseStorage::new(directory, clock)))
            }
        }
    }
}

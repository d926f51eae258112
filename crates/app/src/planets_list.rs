//! Presentation model of the planets list screen.
//!
//! Holds the loaded pages and exposes what the screen shows: the planets
//! sorted by name, a loading flag and an error message.

use std::sync::{Mutex, MutexGuard, PoisonError};

use planets_application::ports::{
    CancellationToken, DataTransferError, NetworkError, PlanetsRepository,
};
use planets_application::{FetchPlanets, FetchPlanetsInput};
use planets_domain::{Planet, PlanetsPage, PlanetsQuery};
use tracing::{debug, warn};

/// Title of the planets screen.
pub const SCREEN_TITLE: &str = "Planets";
/// Title of the error alert.
pub const ERROR_TITLE: &str = "Error";
/// Message shown when the device is offline.
pub const NO_INTERNET_CONNECTION: &str = "No internet connection";
/// Message shown for any other load failure.
pub const LOAD_FAILED: &str = "Failed loading planets from network";

/// One row of the planets list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetItem {
    /// Planet name
    pub name: String,
    /// Climate description
    pub climate: String,
    /// Terrain description
    pub terrain: String,
    /// Population count
    pub population: String,
}

impl From<&Planet> for PlanetItem {
    fn from(planet: &Planet) -> Self {
        Self {
            name: planet.name.clone(),
            climate: planet.climate.clone(),
            terrain: planet.terrain.clone(),
            population: planet.population.clone(),
        }
    }
}

#[derive(Default)]
struct ListState {
    pages: Vec<PlanetsPage>,
    loading: bool,
    error: Option<String>,
    load_task: Option<CancellationToken>,
}

impl ListState {
    /// A page replaces any earlier page with the same `next` link.
    fn append_page(&mut self, page: PlanetsPage) {
        self.pages.retain(|existing| existing.next != page.next);
        self.pages.push(page);
    }
}

/// Model behind the planets list screen.
///
/// Starting a load cancels the one still in flight. Results of a cancelled
/// load are dropped.
pub struct PlanetsListModel {
    fetch_planets: FetchPlanets<dyn PlanetsRepository>,
    state: Mutex<ListState>,
}

impl PlanetsListModel {
    /// Creates a model with nothing loaded.
    #[must_use]
    pub fn new(fetch_planets: FetchPlanets<dyn PlanetsRepository>) -> Self {
        Self {
            fetch_planets,
            state: Mutex::new(ListState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Screen title.
    #[must_use]
    pub const fn screen_title(&self) -> &'static str {
        SCREEN_TITLE
    }

    /// Error alert title.
    #[must_use]
    pub const fn error_title(&self) -> &'static str {
        ERROR_TITLE
    }

    /// Loads the first page.
    pub async fn on_view_did_load(&self) {
        self.load(PlanetsQuery::first_page()).await;
    }

    /// Loads the page after the last loaded one, if the server reported one.
    pub async fn load_next_page(&self) {
        let Some(next) = self.state().pages.last().and_then(PlanetsPage::next_page) else {
            debug!("no next page to load");
            return;
        };
        match PlanetsQuery::parse(&next) {
            Ok(query) => self.load(query).await,
            Err(error) => warn!(error = %error, "next page link is unusable"),
        }
    }

    /// Cancels the load in flight, if any.
    pub fn cancel(&self) {
        let mut state = self.state();
        if let Some(task) = state.load_task.take() {
            task.cancel();
        }
        state.loading = false;
    }

    /// Planets of every loaded page, sorted by name.
    #[must_use]
    pub fn planets(&self) -> Vec<PlanetItem> {
        let state = self.state();
        let mut planets: Vec<PlanetItem> = state
            .pages
            .iter()
            .flat_map(|page| page.results.iter())
            .map(PlanetItem::from)
            .collect();
        planets.sort_by(|a, b| a.name.cmp(&b.name));
        planets
    }

    /// Whether a load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    /// Message of the last failed load.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    /// Whether the last loaded page has a successor.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.state().pages.last().is_some_and(PlanetsPage::has_next)
    }

    async fn load(&self, query: PlanetsQuery) {
        let cancel = CancellationToken::new();
        {
            let mut state = self.state();
            if let Some(previous) = state.load_task.replace(cancel.clone()) {
                previous.cancel();
            }
            state.loading = true;
            state.error = None;
        }

        let result = self
            .fetch_planets
            .execute(FetchPlanetsInput::new(query), &cancel)
            .await;

        let mut state = self.state();
        if cancel.is_cancelled() {
            debug!("planets load superseded");
            return;
        }
        state.load_task = None;
        state.loading = false;
        match result {
            Ok(page) => state.append_page(page),
            Err(error) if is_cancellation(&error) => {}
            Err(error) => state.error = Some(error_message(&error).to_string()),
        }
    }
}

fn is_cancellation(error: &DataTransferError) -> bool {
    matches!(error.network_error(), Some(NetworkError::Cancelled))
}

fn error_message(error: &DataTransferError) -> &'static str {
    if error.is_internet_connection_error() {
        NO_INTERNET_CONNECTION
    } else {
        LOAD_FAILED
    }
}

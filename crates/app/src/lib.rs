//! Planets - Client for the paginated planets listing
//!
//! This crate wires the application and infrastructure layers together:
//! - Configuration loading
//! - The dependency container
//! - The presentation model behind the planets list screen

pub mod configuration;
pub mod container;
pub mod error;
pub mod planets_list;

pub use configuration::{AppConfiguration, CacheBackend};
pub use container::AppContainer;
pub use error::AppError;
pub use planets_list::{PlanetItem, PlanetsListModel};

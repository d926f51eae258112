//! Remote API data transfer objects and endpoints

mod dto;
mod endpoints;

pub use dto::{PlanetDto, PlanetsRequestDto, PlanetsResponseDto};
pub use endpoints::APIEndpoints;

//! Wire types of the planets API.
//!
//! Field names follow the API's snake_case JSON. The response DTOs are also
//! what the response cache stores.

use planets_domain::{Planet, PlanetsPage, PlanetsQuery};
use serde::{Deserialize, Serialize};

/// Query parameters of the planets listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanetsRequestDto {
    /// Page identifier
    pub page: String,
}

impl From<&PlanetsQuery> for PlanetsRequestDto {
    fn from(query: &PlanetsQuery) -> Self {
        Self {
            page: query.page.clone(),
        }
    }
}

/// One page of the planets listing as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetsResponseDto {
    /// Total number of planets
    pub count: u32,
    /// URL of the next page
    pub next: Option<String>,
    /// URL of the previous page
    pub previous: Option<String>,
    /// Planets on this page
    pub results: Vec<PlanetDto>,
}

impl PlanetsResponseDto {
    /// Converts into the domain page, keeping result order.
    #[must_use]
    pub fn into_domain(self) -> PlanetsPage {
        PlanetsPage {
            count: self.count,
            next: self.next,
            previous: self.previous,
            results: self.results.into_iter().map(PlanetDto::into_domain).collect(),
        }
    }
}

/// A planet as returned by the API.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetDto {
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: String,
    pub created: String,
    pub edited: String,
    pub url: String,
}

impl PlanetDto {
    /// Converts into the domain planet.
    #[must_use]
    pub fn into_domain(self) -> Planet {
        Planet {
            name: self.name,
            rotation_period: self.rotation_period,
            orbital_period: self.orbital_period,
            diameter: self.diameter,
            climate: self.climate,
            gravity: self.gravity,
            terrain: self.terrain,
            surface_water: self.surface_water,
            population: self.population,
            created: self.created,
            edited: self.edited,
            url: self.url,
        }
    }
}

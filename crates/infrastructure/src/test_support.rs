//! Fixtures shared by unit tests.

use chrono::{DateTime, TimeZone, Utc};
use planets_application::ports::Clock;

use crate::api::{PlanetDto, PlanetsRequestDto, PlanetsResponseDto};

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn new() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn request(page: &str) -> PlanetsRequestDto {
    PlanetsRequestDto {
        page: page.to_string(),
    }
}

pub fn planet(name: &str) -> PlanetDto {
    PlanetDto {
        name: name.to_string(),
        rotation_period: "23".to_string(),
        orbital_period: "304".to_string(),
        diameter: "10465".to_string(),
        climate: "arid".to_string(),
        gravity: "1 standard".to_string(),
        terrain: "desert".to_string(),
        surface_water: "1".to_string(),
        population: "200000".to_string(),
        created: "2014-12-09T13:50:49.641000Z".to_string(),
        edited: "2014-12-20T20:58:18.411000Z".to_string(),
        url: "https://swapi.dev/api/planets/1/".to_string(),
    }
}

pub fn page(names: &[&str]) -> PlanetsResponseDto {
    PlanetsResponseDto {
        count: u32::try_from(names.len()).unwrap(),
        next: None,
        previous: None,
        results: names.iter().map(|name| planet(name)).collect(),
    }
}

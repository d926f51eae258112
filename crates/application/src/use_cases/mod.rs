//! Application use cases

mod fetch_planets;

pub use fetch_planets::{FetchPlanets, FetchPlanetsInput};

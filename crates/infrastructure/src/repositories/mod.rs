//! Repository implementations of the application ports

mod planets_repository;

pub use planets_repository::DefaultPlanetsRepository;

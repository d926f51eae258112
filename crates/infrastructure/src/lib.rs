//! Planets Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer: the reqwest transport, tracing
//! loggers, the response cache and the cache-first repository.

pub mod adapters;
pub mod api;
pub mod logging;
pub mod persistence;
pub mod repositories;
pub mod serialization;

#[cfg(test)]
mod test_support;

pub use adapters::{ReqwestSessionManager, SystemClock};
pub use api::{APIEndpoints, PlanetDto, PlanetsRequestDto, PlanetsResponseDto};
pub use logging::{TracingDataTransferErrorLogger, TracingNetworkLogger};
pub use persistence::{
    CachedResponse, FilePlanetsResponseStorage, InMemoryPlanetsResponseStorage,
    PlanetsResponseStorage, RequestKey, StorageError,
};
pub use repositories::DefaultPlanetsRepository;
pub use serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

//! Planets Application - Network pipeline, ports and use cases
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for transport, logging, storage-backed repositories)
//! - The endpoint model and the network/data-transfer pipeline built on those ports
//! - Use case orchestration

pub mod network;
pub mod ports;
pub mod use_cases;

pub use network::{
    BodyEncoding, DefaultDataTransferErrorResolver, DefaultDataTransferService,
    DefaultNetworkService, Endpoint, JsonResponseDecoder, NetworkConfig, RawDataResponseDecoder,
    RequestGenerationError, RequestParameters, Requestable, ResponseRequestable,
};
pub use ports::{
    CancellationToken, DataTransferError, DataTransferService, NetworkError, NetworkService,
    PlanetsRepository,
};
pub use use_cases::{FetchPlanets, FetchPlanetsInput};

//! Network pipeline
//!
//! Endpoint descriptors are resolved against a [`NetworkConfig`] into an
//! `HttpRequest`, executed by [`DefaultNetworkService`] and decoded by
//! [`DefaultDataTransferService`].

mod config;
mod data_transfer_service;
mod decoder;
mod endpoint;
mod network_service;

pub use config::NetworkConfig;
pub use data_transfer_service::{DefaultDataTransferErrorResolver, DefaultDataTransferService};
pub use decoder::{DecodeError, JsonResponseDecoder, RawDataResponseDecoder, ResponseDecoder};
pub use endpoint::{
    BodyEncoding, Endpoint, RequestGenerationError, RequestParameters, Requestable,
    ResponseRequestable,
};
pub use network_service::DefaultNetworkService;

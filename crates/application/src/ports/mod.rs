//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod data_transfer;
mod network;
mod planets_repository;

pub use clock::Clock;
pub use data_transfer::{
    DataTransferError, DataTransferErrorLogger, DataTransferErrorResolver, DataTransferService,
    ResolvedError,
};
pub use network::{
    BoxError, HttpRequest, HttpResponseHead, NetworkError, NetworkErrorLogger, NetworkService,
    NetworkSessionManager, SessionResponse, TransportError,
};
pub use planets_repository::PlanetsRepository;
pub use tokio_util::sync::CancellationToken;

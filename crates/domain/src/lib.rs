//! Planets Domain - Core business types
//!
//! This crate defines the domain model for the Planets client.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod planet;
pub mod query;
pub mod request;

pub use error::{DomainError, DomainResult};
pub use planet::{Planet, PlanetsPage};
pub use query::PlanetsQuery;
pub use request::HttpMethod;

//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A page identifier is empty or malformed.
    #[error("invalid page: {0}")]
    InvalidPage(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

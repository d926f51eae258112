//! Application startup errors.

use planets_application::ports::TransportError;

/// Error type for building and starting the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The HTTP transport could not be created.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// File cache selected but no cache directory is available.
    #[error("Could not determine cache directory")]
    NoCacheDir,
}

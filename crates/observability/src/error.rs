//! Error types for observability crate

use thiserror::Error;

/// Errors that can occur during observability initialization
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// A global subscriber is already installed, or installing it failed
    #[error("Failed to initialize observability: {0}")]
    InitFailed(String),

    /// The log filter could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

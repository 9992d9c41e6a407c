//! Observability for the parts counter.
//!
//! This crate provides:
//! - `LogLevel` / `LogFormat` - Configurable verbosity and output shape
//! - `LoggingConfig` - The `[logging]` config section
//! - `init_logging` - Installs the global `tracing` subscriber

mod logging;

pub use logging::*;

use thiserror::Error;

/// Errors raised while setting up logging.
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// Unrecognized log level name.
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    /// Filter directives could not be parsed.
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber is already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

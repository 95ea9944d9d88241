//! Core error types for redshift-smooth-core.
//!
//! Errors surface to the top level unhandled; the CLI decides the
//! user-facing message and exit status. Range clamping is not an error
//! (it is warned about and recovered in [`crate::setter`]).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for redshift-smooth-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The external temperature setter could not be invoked
    #[error("Setter error: {message}")]
    Setter { message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file does not exist
    #[error("Config file not found at {}", path.display())]
    NotFound { path: PathBuf },

    /// A rule line failed to yield all required fields
    #[error("Malformed rule on line {line}: {message}")]
    Format { line: usize, message: String },

    /// A time-of-day string could not be converted to minutes
    #[error("Invalid time of day: '{value}'")]
    BadTime { value: String },

    /// A temperature token could not be converted to Kelvin
    #[error("Invalid temperature: '{value}'")]
    BadTemperature { value: String },

    /// Config parsed to zero usable rules
    #[error("No rules in the config file")]
    EmptySchedule,

    /// Failed to read the config file
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

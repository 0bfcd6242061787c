//! Error types for configuration loading and validation

use std::path::PathBuf;
use thiserror::Error;

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur during configuration loading and validation
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Unknown configuration format
    #[error("unknown configuration format for file: {path}\nSupported formats: .toml, .yml, .yaml, .json")]
    UnknownFormat { path: PathBuf },

    /// IO error
    #[error("failed to read configuration file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("failed to parse TOML configuration in {path}: {message}")]
    Toml { path: PathBuf, message: String },

    /// YAML parsing error
    #[error("failed to parse YAML configuration in {path}: {message}")]
    Yaml { path: PathBuf, message: String },

    /// JSON parsing error
    #[error("failed to parse JSON configuration in {path}: {message}")]
    Json { path: PathBuf, message: String },

    /// Value out of valid range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Value must not be negative
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: String, value: f64 },

    /// Invalid integer value
    #[error("{field} must be at least {min}, got {value}")]
    InvalidInteger {
        field: String,
        value: usize,
        min: usize,
    },
}

//! Error types for configuration operations.

use std::path::PathBuf;

/// Errors that can occur while loading, validating or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration file.
    #[error("failed to write config file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// Failed to serialize configuration to JSON.
    #[error("failed to serialize config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// The deep link scheme is not a valid URL scheme.
    #[error("invalid deep link scheme {scheme:?}: {reason}")]
    InvalidScheme {
        /// The rejected scheme.
        scheme: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The log filter directive is empty.
    #[error("log filter must not be empty")]
    EmptyLogFilter,

    /// An environment override holds an unusable value.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnv {
        /// The environment variable name.
        var: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Failed to determine the platform configuration directory.
    #[error("could not determine configuration directory")]
    NoConfigDirectory,
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

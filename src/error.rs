//! Dashboard error types
//!
//! Defines the errors raised while configuring the dashboard and while
//! opening or closing the log stream connection.

use thiserror::Error;

/// Errors in the build-time dashboard configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Embedded TOML could not be parsed
    #[error("Failed to parse dashboard config: {0}")]
    Parse(String),

    /// Stream endpoint was blank
    #[error("Stream endpoint is empty")]
    EmptyEndpoint,

    /// Stream endpoint is not a WebSocket URL
    #[error("Unsupported stream endpoint {0:?}: expected a ws:// or wss:// URL")]
    UnsupportedScheme(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Errors raised by a stream transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// The transport refused to create a connection
    #[error("Failed to open stream to {endpoint}: {reason}")]
    Open { endpoint: String, reason: String },

    /// Closing the connection reported a failure
    #[error("Failed to close stream: {reason}")]
    Close { reason: String },
}

/// Top-level errors that abort dashboard start-up
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Logging subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias for dashboard start-up
pub type DashboardResult<T> = Result<T, DashboardError>;

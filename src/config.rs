//! Configuration System
//!
//! The dashboard is configured at build time: `dashboard.toml` is embedded
//! into the bundle and `FSM_DASHBOARD_ENDPOINT` (read when compiling) overrides
//! the stream endpoint.

use serde::Deserialize;
use std::fmt;

use crate::error::ConfigError;

/// Embedded configuration file
const EMBEDDED_CONFIG: &str = include_str!("../dashboard.toml");

/// Build-time endpoint override
const ENDPOINT_OVERRIDE: Option<&str> = option_env!("FSM_DASHBOARD_ENDPOINT");

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "ws://localhost:5000/fsm/ws";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub stream: StreamConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

/// Log stream configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StreamConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Presentation settings
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "FSM Management Dashboard".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl DashboardConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load the configuration compiled into the bundle, with the build-time
    /// endpoint override applied.
    ///
    /// An invalid embedded config falls back to the defaults; the error is
    /// handed back so it can be logged once logging is up.
    pub fn load_embedded() -> (Self, Option<ConfigError>) {
        Self::resolve(EMBEDDED_CONFIG, ENDPOINT_OVERRIDE)
    }

    fn resolve(content: &str, endpoint_override: Option<&str>) -> (Self, Option<ConfigError>) {
        let loaded = Self::from_toml(content)
            .map(|config| config.with_endpoint_override(endpoint_override))
            .and_then(|config| config.endpoint().map(|_| config));

        match loaded {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Replace the stream endpoint when an override is present
    pub fn with_endpoint_override(mut self, endpoint: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            self.stream.endpoint = endpoint.to_string();
        }
        self
    }

    /// Validated stream endpoint
    pub fn endpoint(&self) -> Result<Endpoint, ConfigError> {
        Endpoint::parse(&self.stream.endpoint)
    }
}

/// Address of the real-time push channel
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    /// Accepts `ws://` and `wss://` URLs only
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }

        let lower = raw.to_ascii_lowercase();
        let host = lower
            .strip_prefix("wss://")
            .or_else(|| lower.strip_prefix("ws://"))
            .ok_or_else(|| ConfigError::UnsupportedScheme(raw.to_string()))?;
        if host.is_empty() {
            return Err(ConfigError::UnsupportedScheme(raw.to_string()));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for TLS (`wss://`) endpoints
    pub fn is_secure(&self) -> bool {
        self.0.to_ascii_lowercase().starts_with("wss://")
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self(DEFAULT_ENDPOINT.to_string())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

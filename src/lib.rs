//! # FSM Dashboard
//!
//! Browser dashboard for the file system manager. A client-side rendered
//! Leptos application that compiles to WebAssembly and shows file movement
//! log lines pushed over a WebSocket as they arrive.
//!
//! ## Modules
//!
//! - [`state`]: message log, stream lifecycle and the WebSocket transport
//! - [`components`]: app bar, drawer, log list and status badge
//! - [`pages`]: the live log view
//! - [`config`]: build-time configuration
//! - [`logging`]: `tracing` output to the browser console

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod state;

use leptos::*;

pub use config::{DashboardConfig, Endpoint};
pub use error::{ConfigError, ConnectionError, DashboardError, DashboardResult};
pub use state::{LinkStatus, LogStream, Message, MessageLog, StreamState};

/// Load configuration, install logging and mount the app on `<body>`
pub fn start() -> DashboardResult<()> {
    let (config, config_error) = DashboardConfig::load_embedded();
    logging::init(&config.logging)?;

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Invalid dashboard config, using defaults");
    }

    tracing::info!(
        endpoint = %config.stream.endpoint,
        "FSM Dashboard v{}",
        env!("CARGO_PKG_VERSION")
    );

    mount_to_body(move || view! { <app::App config=config /> });
    Ok(())
}

//! Browser Logging
//!
//! Routes `tracing` events to the browser console. The fmt layer renders each
//! event into a [`ConsoleWriter`], which hands the finished line to the console
//! method matching the event level when it is dropped.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wasm_bindgen::JsValue;

use crate::config::LoggingConfig;
use crate::error::{DashboardError, DashboardResult};

/// Install the global subscriber. Call once, before mounting the app.
pub fn init(config: &LoggingConfig) -> DashboardResult<()> {
    let filter =
        EnvFilter::try_new(&config.level).map_err(|e| DashboardError::Logging(e.to_string()))?;

    // No system clock on wasm32-unknown-unknown, and the console has its own timestamps
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_target(true)
                .with_writer(ConsoleMakeWriter),
        )
        .try_init()
        .map_err(|e| DashboardError::Logging(e.to_string()))?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Logging initialised");
    Ok(())
}

/// Creates one [`ConsoleWriter`] per event
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers a single formatted event
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    /// Drain the buffered text as one line, without the trailing newline
    fn take_line(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let bytes = std::mem::take(&mut self.buffer);
        let line = String::from_utf8_lossy(&bytes).trim_end().to_string();
        Some(line)
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.take_line() {
            emit(self.level, &JsValue::from_str(&line));
        }
    }
}

fn emit(level: Level, line: &JsValue) {
    if level == Level::ERROR {
        web_sys::console::error_1(line);
    } else if level == Level::WARN {
        web_sys::console::warn_1(line);
    } else if level == Level::INFO {
        web_sys::console::info_1(line);
    } else {
        web_sys::console::debug_1(line);
    }
}

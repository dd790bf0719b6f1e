//! Subscriber setup for the `tracing` events emitted by chronors.
//!
//! The core crate only emits events: `trace` on entry to structural,
//! statistical and series operations, `debug`/`warn` during engine
//! negotiation. This module installs a subscriber to print them.
//!
//! # Example
//!
//! ```no_run
//! use chronors::tracing_support::{init_tracing, TracingConfig, TracingFormat};
//!
//! init_tracing(TracingConfig {
//!     format: TracingFormat::Compact,
//!     filter: "chronors_core=trace,info".to_string(),
//!     ..TracingConfig::default()
//! })
//! .unwrap();
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directive (default `chronors=info,chronors_core=warn`)
//! - `CHRONORS_LOG_FORMAT`: `pretty`, `json` or `compact` (default `pretty`)

use anyhow::Result;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_FILTER: &str = "chronors=info,chronors_core=warn";

/// Tracing output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingFormat {
    /// Multi-line human-readable output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
    /// One line per event
    Compact,
}

impl TracingFormat {
    /// Unknown names fall back to `Pretty`.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => TracingFormat::Json,
            "compact" => TracingFormat::Compact,
            _ => TracingFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub format: TracingFormat,
    /// Filter directive (e.g., "chronors_core=trace")
    pub filter: String,
    pub with_ansi: bool,
    pub with_target: bool,
    pub with_file: bool,
    pub with_line_number: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        let format = std::env::var("CHRONORS_LOG_FORMAT")
            .map(|s| TracingFormat::parse(&s))
            .unwrap_or_default();
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());

        Self {
            format,
            filter,
            with_ansi: true,
            with_target: true,
            with_file: false,
            with_line_number: false,
        }
    }
}

/// Install a global subscriber. Call once, at start-up.
///
/// # Errors
///
/// Fails on an invalid filter directive or when a global subscriber is
/// already installed.
#[cfg(feature = "tracing")]
pub fn init_tracing(config: TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)?;

    match config.format {
        TracingFormat::Pretty => {
            let layer = fmt::layer()
                .pretty()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
        TracingFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_target(config.with_target)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
        TracingFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
    }

    Ok(())
}

/// No-op when the `tracing` feature is disabled
#[cfg(not(feature = "tracing"))]
pub fn init_tracing(_config: TracingConfig) -> Result<()> {
    Ok(())
}

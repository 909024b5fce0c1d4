//! Structured logging and security-focused trace utilities.
//!
//! This module configures the `tracing` ecosystem for the crate, supporting
//! multiple output formats and providing a helper to keep API keys out of
//! logged URLs.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    // Configure filter from environment or config
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

/// Sanitizes the API key from a request URL before it is logged.
///
/// Gemini endpoints carry the key as a `key=` query parameter; this scans
/// for that parameter and replaces its value with a `[REDACTED]`
/// placeholder, leaving any other query parameters intact.
pub fn redact_key(url: &str) -> String {
    let mut result = url.to_string();

    for marker in ["?key=", "&key="] {
        if let Some(pos) = result.find(marker) {
            let start = pos + marker.len();
            // Search for the end of the value (next parameter or fragment)
            let end = result[start..]
                .find(|c: char| c == '&' || c == '#')
                .map(|i| start + i)
                .unwrap_or(result.len());
            result.replace_range(start..end, "[REDACTED]");
        }
    }

    result
}

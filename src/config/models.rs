//! Configuration data structures for the gemlens adapter.
//!
//! This module defines the schema for the settings a host hands to the
//! adapter: the Gemini API key, the model to use, the endpoint base URL,
//! and logging preferences.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Model used when the host does not configure one.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Per-call settings supplied by the host plugin system.
///
/// Deserializes from the host's JSON config object; camelCase spellings
/// (`apiKey`, `apiBaseUrl`) and the bare `apikey` key older hosts send are
/// accepted as aliases.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct RecognizeConfig {
    /// Gemini API key. Required; the call fails before any network traffic
    /// when it is empty.
    #[serde(default, alias = "apiKey", alias = "apikey")]
    pub api_key: String,

    /// Gemini model identifier. `None` or empty selects the default.
    /// Default: `gemini-1.5-flash-latest`
    #[serde(default)]
    pub model: Option<String>,

    /// Base URL for the Generative Language API.
    /// Default: `https://generativelanguage.googleapis.com/v1beta`
    #[serde(default = "default_api_base_url", alias = "apiBaseUrl")]
    pub api_base_url: String,

    /// Request timeout in seconds, enforced by the bundled transport only.
    /// A host-injected transport keeps whatever timeout policy it has.
    /// Default: `60`
    #[serde(default = "default_timeout", alias = "timeoutSeconds")]
    pub timeout_seconds: u64,
}

impl RecognizeConfig {
    /// The configured model, or the default when none is set.
    pub fn model_or_default(&self) -> &str {
        match self.model.as_deref() {
            Some(model) if !model.is_empty() => model,
            _ => DEFAULT_MODEL,
        }
    }
}

// Custom Debug impl that never logs the API key
impl std::fmt::Debug for RecognizeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecognizeConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Default for RecognizeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: None,
            api_base_url: default_api_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`, `compact`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Helper functions for serde defaults and shared constants

fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

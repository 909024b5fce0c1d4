// Error types for the gemlens recognize adapter
// Author: kelexine (https://github.com/kelexine)

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecognizeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid image payload: {0}")]
    InvalidImage(String),

    #[error("Error calling Gemini API: {body}")]
    ApiCall { status: u16, body: String },

    #[error("Request was blocked for safety reasons: {0}")]
    ContentBlocked(String),

    #[error("Failed to parse Gemini's response. Response data: {0}")]
    ResponseParse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RecognizeError {
    /// HTTP status carried by the error, if it came from a completed
    /// (non-2xx) API response.
    pub fn status(&self) -> Option<u16> {
        match self {
            RecognizeError::ApiCall { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RecognizeError>;

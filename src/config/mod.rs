// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{RecognizeError, Result};
use serde_json::Value;

impl RecognizeConfig {
    /// Build a configuration from the host's JSON config object.
    ///
    /// Unknown fields are ignored so hosts can keep unrelated plugin
    /// settings in the same object.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| RecognizeError::Config(e.to_string()))
    }
}

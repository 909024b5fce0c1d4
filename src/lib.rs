// gemlens - Gemini-powered image text recognition and translation
// Author: kelexine (https://github.com/kelexine)

pub mod config;
pub mod error;
pub mod lang;
pub mod models;
pub mod recognize;
pub mod transport;
pub mod utils;
pub mod vision;

pub use config::RecognizeConfig;
pub use error::{RecognizeError, Result};
pub use recognize::{recognize, RecognizeOptions, Recognizer};

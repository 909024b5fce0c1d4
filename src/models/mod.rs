//! Data models for the Google Gemini generateContent API.
//!
//! This module contains the type definitions for the request/response bodies
//! exchanged with the upstream endpoint (`gemini`).

// Author: kelexine (https://github.com/kelexine)

pub mod gemini;

pub use gemini::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, InlineData, Part,
    PromptFeedback,
};

// Gemini generateContent wire types
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// Body of a `models/{model}:generateContent` POST.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// Content blocks sent to the model. This adapter always sends exactly
    /// one, holding a prompt part and an inline image part.
    pub contents: Vec<Content>,
}

/// One content block: an ordered list of parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single part of a content block. Requests carry either text or inline
/// data per part; responses are expected to carry text but may carry
/// neither, so both fields are optional on the way in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// A text-only part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// An inline media part (base64 payload plus mime type).
    pub fn image(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
            ..Self::default()
        }
    }

    /// The text content, if present and non-empty.
    pub fn as_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

/// Base64-encoded media embedded directly in the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,

    pub data: String,
}

/// Response body of `generateContent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Alternative completions; only the first is used.
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Present when the prompt itself was rejected before generation.
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// One model completion. `content` is omitted by the API when generation
/// was cut off, so it must stay optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,

    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Prompt-level safety feedback.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

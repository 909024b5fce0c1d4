//! Recognize-and-translate adapter over the Gemini `generateContent` API.
//!
//! One call takes a base64 PNG and a target-language code, issues a single
//! POST to the inference endpoint, and returns the translated plain text.
//! There is no retry, caching, or state shared between calls.
//!
//! # Submodules
//!
//! - `prompt`: Instruction prompt construction.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::RecognizeConfig;
use crate::error::{RecognizeError, Result};
use crate::lang::LanguageMap;
use crate::models::{Content, GenerateContentRequest, GenerateContentResponse, Part};
use crate::transport::{HttpJsonClient, JsonResponse, ReqwestJsonClient};
use crate::vision::{validate_image_payload, PNG_MIME_TYPE};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

pub mod prompt;

pub use prompt::build_prompt;

/// The adapter itself: configuration, language table, and transport, fixed
/// at construction. Calls are independent and safe to run concurrently.
#[derive(Clone)]
pub struct Recognizer {
    config: RecognizeConfig,
    languages: LanguageMap,
    transport: Arc<dyn HttpJsonClient>,
}

impl Recognizer {
    /// Create a recognizer over an injected transport, using the built-in
    /// language table.
    pub fn new(config: RecognizeConfig, transport: Arc<dyn HttpJsonClient>) -> Self {
        Self {
            config,
            languages: LanguageMap::builtin(),
            transport,
        }
    }

    /// Create a recognizer backed by the default reqwest transport, with
    /// the timeout taken from the configuration.
    pub fn with_default_transport(config: RecognizeConfig) -> Result<Self> {
        let transport = ReqwestJsonClient::new(config.timeout_seconds)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    /// Replace the language table, e.g. with host-supplied overrides.
    pub fn with_languages(mut self, languages: LanguageMap) -> Self {
        self.languages = languages;
        self
    }

    /// Run one recognize-and-translate round trip.
    ///
    /// Fails before any network traffic if the API key is missing or the
    /// image payload is not valid base64. Exactly one outbound request is
    /// made; the result is the trimmed translation text or a typed error.
    pub async fn recognize(&self, image_base64: &str, lang: &str) -> Result<String> {
        if self.config.api_key.is_empty() {
            return Err(RecognizeError::Config(
                "Gemini API Key not found. Please set it in the plugin configuration."
                    .to_string(),
            ));
        }

        let model = self.config.model_or_default();

        validate_image_payload(image_base64)?;

        let language_name = self.languages.resolve(lang);
        debug!("Resolved target language '{}' to '{}'", lang, language_name);

        let url = generate_url(&self.config.api_base_url, model, &self.config.api_key);
        let payload = build_payload(language_name, image_base64)?;

        debug!("Calling generateContent API for model: {}", model);
        let response = self.transport.post_json(&url, &payload).await?;

        interpret_response(response)
    }
}

/// Inputs for the free-function entry point, mirroring the host plugin
/// calling convention (config plus injected utilities).
#[derive(Clone)]
pub struct RecognizeOptions {
    pub config: RecognizeConfig,

    /// HTTP capability supplied by the host.
    pub transport: Arc<dyn HttpJsonClient>,

    /// Optional replacement for the built-in language table.
    pub languages: Option<LanguageMap>,
}

/// One-shot entry point: build a `Recognizer` from `options` and run a
/// single call.
pub async fn recognize(
    image_base64: &str,
    lang: &str,
    options: &RecognizeOptions,
) -> Result<String> {
    let mut recognizer = Recognizer::new(options.config.clone(), Arc::clone(&options.transport));
    if let Some(languages) = &options.languages {
        recognizer = recognizer.with_languages(languages.clone());
    }
    recognizer.recognize(image_base64, lang).await
}

/// Build the `models/{model}:generateContent` URL with the key as a query
/// parameter.
fn generate_url(base_url: &str, model: &str, api_key: &str) -> String {
    format!(
        "{}/models/{}:generateContent?key={}",
        base_url.trim_end_matches('/'),
        model,
        urlencoding::encode(api_key)
    )
}

/// Assemble the request body: one content block holding the prompt part and
/// the inline PNG part.
fn build_payload(language_name: &str, image_base64: &str) -> Result<Value> {
    let request = GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part::text(prompt::build_prompt(language_name)),
                Part::image(PNG_MIME_TYPE, image_base64),
            ],
        }],
    };

    Ok(serde_json::to_value(&request)?)
}

/// Unpack a transport-level response into the translation text or a typed
/// error.
fn interpret_response(response: JsonResponse) -> Result<String> {
    if !response.ok {
        let body = match &response.data {
            Some(data) => data.to_string(),
            None => format!("HTTP status {}", response.status),
        };
        error!("Gemini API call failed with status {}", response.status);
        return Err(RecognizeError::ApiCall {
            status: response.status,
            body,
        });
    }

    let data = match response.data {
        Some(data) => data,
        None => {
            return Err(RecognizeError::ResponseParse(
                "empty response body".to_string(),
            ));
        }
    };
    let raw = data.to_string();

    let parsed: GenerateContentResponse = match serde_json::from_value(data) {
        Ok(parsed) => parsed,
        Err(_) => return Err(RecognizeError::ResponseParse(raw)),
    };

    if let Some(candidate) = parsed.candidates.first() {
        let text = candidate
            .content
            .as_ref()
            .and_then(|content| content.parts.first())
            .and_then(|part| part.as_text());

        if let Some(text) = text {
            return Ok(text.trim().to_string());
        }

        if candidate.finish_reason.as_deref() == Some("SAFETY") {
            warn!("Gemini withheld the candidate with finishReason SAFETY");
            return Err(RecognizeError::ContentBlocked(
                "finishReason SAFETY".to_string(),
            ));
        }
    }

    if let Some(reason) = parsed
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        warn!("Gemini blocked the prompt: {}", reason);
        return Err(RecognizeError::ContentBlocked(format!(
            "blockReason {}",
            reason
        )));
    }

    Err(RecognizeError::ResponseParse(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn success(data: Value) -> JsonResponse {
        JsonResponse {
            ok: true,
            status: 200,
            data: Some(data),
        }
    }

    #[test]
    fn test_generate_url_shape() {
        let url = generate_url(
            "https://generativelanguage.googleapis.com/v1beta",
            "gemini-1.5-flash-latest",
            "secret",
        );
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent?key=secret"
        );
    }

    #[test]
    fn test_generate_url_trims_trailing_slash() {
        let url = generate_url("http://localhost:9000/v1beta/", "gemini-pro", "k");
        assert_eq!(
            url,
            "http://localhost:9000/v1beta/models/gemini-pro:generateContent?key=k"
        );
    }

    #[test]
    fn test_generate_url_encodes_api_key() {
        let url = generate_url("https://example.com/v1beta", "gemini-pro", "a+b/c=d");
        assert!(url.ends_with("key=a%2Bb%2Fc%3Dd"));
    }

    #[test]
    fn test_build_payload_shape() {
        let payload = build_payload("Japanese", "AAAA").unwrap();
        let parts = &payload["contents"][0]["parts"];

        let prompt = parts[0]["text"].as_str().unwrap();
        assert!(prompt.contains("Japanese"));

        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["inlineData"]["data"], "AAAA");
    }

    #[test]
    fn test_interpret_trims_text() {
        let response = success(json!({
            "candidates": [{"content": {"parts": [{"text": "  Hello  "}]}}]
        }));
        assert_eq!(interpret_response(response).unwrap(), "Hello");
    }

    #[test]
    fn test_interpret_safety_finish_reason() {
        let response = success(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }));
        let err = interpret_response(response).unwrap_err();
        assert!(matches!(err, RecognizeError::ContentBlocked(_)));
    }

    #[test]
    fn test_interpret_prompt_feedback_block() {
        let response = success(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }));
        let err = interpret_response(response).unwrap_err();
        assert!(matches!(err, RecognizeError::ContentBlocked(_)));
    }

    #[test]
    fn test_interpret_api_error_with_body() {
        let response = JsonResponse {
            ok: false,
            status: 400,
            data: Some(json!({"error": "bad request"})),
        };
        let err = interpret_response(response).unwrap_err();
        match err {
            RecognizeError::ApiCall { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("bad request"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_interpret_api_error_without_body() {
        let response = JsonResponse {
            ok: false,
            status: 503,
            data: None,
        };
        let err = interpret_response(response).unwrap_err();
        match err {
            RecognizeError::ApiCall { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "HTTP status 503");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_interpret_malformed_response() {
        let response = success(json!({"unexpected": true}));
        let err = interpret_response(response).unwrap_err();
        match err {
            RecognizeError::ResponseParse(raw) => assert!(raw.contains("unexpected")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_interpret_empty_text_is_parse_error() {
        let response = success(json!({
            "candidates": [{"content": {"parts": [{"text": ""}]}}]
        }));
        let err = interpret_response(response).unwrap_err();
        assert!(matches!(err, RecognizeError::ResponseParse(_)));
    }
}

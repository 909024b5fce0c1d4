// Error handling tests
// Author: kelexine (https://github.com/kelexine)

use gemlens::error::RecognizeError;

#[test]
fn test_error_display_messages() {
    let errors = vec![
        RecognizeError::Config("API key missing".to_string()),
        RecognizeError::InvalidImage("Bad payload".to_string()),
        RecognizeError::ApiCall {
            status: 400,
            body: "bad request".to_string(),
        },
        RecognizeError::ContentBlocked("finishReason SAFETY".to_string()),
        RecognizeError::ResponseParse("{}".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_config_error() {
    let error = RecognizeError::Config(
        "Gemini API Key not found. Please set it in the plugin configuration.".to_string(),
    );
    let display = format!("{}", error);
    assert!(display.contains("Gemini API Key not found"));
    assert!(display.contains("plugin configuration"));
}

#[test]
fn test_invalid_image_error() {
    let error = RecognizeError::InvalidImage("Invalid base64 image data".to_string());
    assert!(format!("{}", error).contains("Invalid base64 image data"));
}

#[test]
fn test_api_call_error_carries_body() {
    let error = RecognizeError::ApiCall {
        status: 429,
        body: r#"{"error":"quota exceeded"}"#.to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("Error calling Gemini API"));
    assert!(display.contains("quota exceeded"));
    assert_eq!(error.status(), Some(429));
}

#[test]
fn test_api_call_error_without_body() {
    let error = RecognizeError::ApiCall {
        status: 503,
        body: "HTTP status 503".to_string(),
    };
    assert!(format!("{}", error).contains("HTTP status 503"));
}

#[test]
fn test_content_blocked_error() {
    let error = RecognizeError::ContentBlocked("finishReason SAFETY".to_string());
    let display = format!("{}", error);
    assert!(display.contains("blocked for safety reasons"));
}

#[test]
fn test_response_parse_error_carries_raw_body() {
    let error = RecognizeError::ResponseParse(r#"{"unexpected":true}"#.to_string());
    let display = format!("{}", error);
    assert!(display.contains("Failed to parse Gemini's response"));
    assert!(display.contains("unexpected"));
}

#[test]
fn test_status_is_none_for_non_api_errors() {
    let error = RecognizeError::Config("missing key".to_string());
    assert_eq!(error.status(), None);
}

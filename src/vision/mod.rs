//! Image payload validation for the recognize call.
//!
//! The adapter only ever forwards base64-encoded PNG data, so validation is
//! limited to checking that the payload is present and decodes as base64.
//! Size limits are the upstream API's concern and are not enforced here.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::error::{RecognizeError, Result};
use base64::Engine;

/// Mime type sent with every inline image part.
pub const PNG_MIME_TYPE: &str = "image/png";

/// Validate a base64 image payload before it is put on the wire.
pub fn validate_image_payload(data: &str) -> Result<()> {
    if data.is_empty() {
        return Err(RecognizeError::InvalidImage(
            "Empty image payload".to_string(),
        ));
    }

    base64::engine::general_purpose::STANDARD
        .decode(data)
        .map_err(|e| RecognizeError::InvalidImage(format!("Invalid base64 image data: {}", e)))?;

    Ok(())
}

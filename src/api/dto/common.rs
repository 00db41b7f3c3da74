//! Common wire DTOs

use serde::Deserialize;

/// Error body returned by the backend on non-2xx responses.
///
/// Different endpoints use either `error` or `message`; both are accepted.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Best-effort human readable message from a raw error response body.
    pub fn message_from(body: &[u8]) -> Option<String> {
        if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
            if let Some(message) = parsed.error.or(parsed.message) {
                return Some(message);
            }
        }
        let text = String::from_utf8_lossy(body).trim().to_string();
        (!text.is_empty()).then_some(text)
    }
}

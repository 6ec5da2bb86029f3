//! Error body returned by the service on non-2xx responses.

use serde::Deserialize;

/// Structured error payload.
///
/// Both fields are optional; any other fields are ignored. `error` is a
/// machine-readable kind used for logging, `message` is shown to the user.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Parses a raw response body.
    ///
    /// Empty and non-JSON bodies yield an empty payload.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// The human-readable message, if present and non-blank.
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
    }
}

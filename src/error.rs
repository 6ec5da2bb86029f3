//! Error taxonomy for the link workflow.
//!
//! Every failure is one of three kinds and is reduced to a single display
//! string at the workflow boundary with [`ClientError::display_message`].

use thiserror::Error;

/// Generic message shown when the exchange with the service did not complete.
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "request failed, please try again later";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// A required field was empty after trimming. Never reaches the network.
    #[error("{message}")]
    Validation { message: String },

    /// The service answered with a non-2xx status.
    #[error("service responded with status {status}")]
    Service {
        status: u16,
        /// Human-readable message from the error body, when one was present.
        message: Option<String>,
    },

    /// Connection failure, timeout, or a response that could not be decoded.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn service(status: u16, message: Option<String>) -> Self {
        Self::Service { status, message }
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport(detail.into())
    }

    /// Reduces the error to the string shown to the end user.
    ///
    /// Service errors prefer the service-supplied message and fall back to
    /// `fallback` (e.g. `"create failed"`). Transport errors always use
    /// [`TRANSPORT_FALLBACK_MESSAGE`]; their detail is for logs only.
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Validation { message } => message.clone(),
            ClientError::Service {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ClientError::Service { .. } => fallback.to_string(),
            ClientError::Transport(_) => TRANSPORT_FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Transport(format!("request timed out: {e}"))
        } else if e.is_decode() {
            ClientError::Transport(format!("malformed response body: {e}"))
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

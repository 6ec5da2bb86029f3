//! Request and result entities for the create and lookup operations.

use crate::error::ClientError;
use chrono::{DateTime, Utc};
use validator::{Validate, ValidationErrors};

/// Message used when the URL field is empty after trimming.
pub const MISSING_URL_MESSAGE: &str = "missing URL";

/// Message used when the code field is empty after trimming.
pub const MISSING_CODE_MESSAGE: &str = "missing code";

/// Message used when the code is a `.` or `..` path segment.
pub const INVALID_CODE_MESSAGE: &str = "invalid code";

/// A validated request to create a short link.
///
/// URL and custom code are trimmed. An empty custom code is stored as `None`
/// so that the outgoing payload omits the field instead of sending an empty
/// string. Whether `expire_at` lies in the future is for the service to judge.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CreateRequest {
    #[validate(length(min = 1))]
    pub url: String,
    pub custom_code: Option<String>,
    pub expire_at: Option<DateTime<Utc>>,
}

impl CreateRequest {
    /// Builds a request from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] with [`MISSING_URL_MESSAGE`] if the
    /// URL is empty after trimming.
    pub fn new(raw_url: &str, raw_custom_code: &str) -> Result<Self, ClientError> {
        let custom_code = Some(raw_custom_code.trim())
            .filter(|code| !code.is_empty())
            .map(str::to_string);

        let request = Self {
            url: raw_url.trim().to_string(),
            custom_code,
            expire_at: None,
        };

        request
            .validate()
            .map_err(|e| to_validation_error(&e, MISSING_URL_MESSAGE))?;

        Ok(request)
    }

    /// Sets the requested expiry time.
    pub fn with_expire_at(mut self, expire_at: Option<DateTime<Utc>>) -> Self {
        self.expire_at = expire_at;
        self
    }
}

/// A validated request to look up an existing short code.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct LookupRequest {
    #[validate(length(min = 1))]
    pub code: String,
}

impl LookupRequest {
    /// Builds a request from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] with [`MISSING_CODE_MESSAGE`] if the
    /// code is empty after trimming, and with [`INVALID_CODE_MESSAGE`] if it
    /// is `.` or `..`, which cannot be sent as a path segment.
    pub fn new(raw_code: &str) -> Result<Self, ClientError> {
        let request = Self {
            code: raw_code.trim().to_string(),
        };

        request
            .validate()
            .map_err(|e| to_validation_error(&e, MISSING_CODE_MESSAGE))?;

        if request.code == "." || request.code == ".." {
            return Err(ClientError::validation(INVALID_CODE_MESSAGE));
        }

        Ok(request)
    }
}

fn to_validation_error(errors: &ValidationErrors, message: &str) -> ClientError {
    tracing::debug!(%errors, "request validation failed");
    ClientError::validation(message)
}

/// A short link created by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateResult {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
    pub expire_at: Option<DateTime<Utc>>,
}

/// Metadata of an existing short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expire_at: Option<DateTime<Utc>>,
    pub click_count: u64,
    pub last_accessed_at: Option<DateTime<Utc>>,
}

/// Whether a link has ever been accessed.
///
/// Derived from `last_accessed_at` only; `click_count` says nothing about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    NeverAccessed,
    LastAccessed(DateTime<Utc>),
}

impl LookupResult {
    pub fn access_status(&self) -> AccessStatus {
        match self.last_accessed_at {
            Some(at) => AccessStatus::LastAccessed(at),
            None => AccessStatus::NeverAccessed,
        }
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expire_at.is_some_and(|e| Utc::now() >= e)
    }
}

//! DTOs for the link shortening endpoint (`POST /api/v1/shorten`).

use crate::domain::entities::{CreateRequest, CreateResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body sent to the service.
///
/// `custom_code` and `expire_at` are left out of the JSON entirely when absent.
#[derive(Debug, Serialize)]
pub struct ShortenRequest<'a> {
    pub url: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_code: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<DateTime<Utc>>,
}

impl<'a> From<&'a CreateRequest> for ShortenRequest<'a> {
    fn from(request: &'a CreateRequest) -> Self {
        Self {
            url: &request.url,
            custom_code: request.custom_code.as_deref(),
            expire_at: request.expire_at,
        }
    }
}

/// Successful response from the service.
///
/// `expire_at` accepts both `null` and a missing field.
#[derive(Debug, Deserialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
    #[serde(default)]
    pub expire_at: Option<DateTime<Utc>>,
}

impl From<ShortenResponse> for CreateResult {
    fn from(response: ShortenResponse) -> Self {
        Self {
            code: response.code,
            short_url: response.short_url,
            long_url: response.long_url,
            expire_at: response.expire_at,
        }
    }
}

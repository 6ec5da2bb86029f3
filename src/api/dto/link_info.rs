//! DTOs for the link metadata endpoint (`GET /api/v1/links/{code}`).

use crate::domain::entities::LookupResult;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Link metadata returned by the service.
#[derive(Debug, Deserialize)]
pub struct LinkInfoResponse {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub expire_at: Option<DateTime<Utc>>,
    pub click_count: u64,
    #[serde(default)]
    pub last_accessed_at: Option<DateTime<Utc>>,
}

impl From<LinkInfoResponse> for LookupResult {
    fn from(response: LinkInfoResponse) -> Self {
        Self {
            code: response.code,
            long_url: response.long_url,
            created_at: response.created_at,
            expire_at: response.expire_at,
            click_count: response.click_count,
            last_accessed_at: response.last_accessed_at,
        }
    }
}

//! Plain-text rendering of interaction states.
//!
//! Renderers produce unstyled lines; callers decide on colors and layout.

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    AccessStatus, CreateResult, InteractionState, LookupResult,
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

fn format_expiry(expire_at: Option<&DateTime<Utc>>) -> String {
    expire_at.map_or_else(|| "never expires".to_string(), format_timestamp)
}

/// Renders the create slot.
///
/// `Idle` renders nothing.
pub fn render_create(state: &InteractionState<CreateResult>) -> Vec<String> {
    match state {
        InteractionState::Idle => Vec::new(),
        InteractionState::Pending => vec!["Creating short link...".to_string()],
        InteractionState::Failed(message) => vec![message.clone()],
        InteractionState::Succeeded(result) => vec![
            format!("Short URL:    {}", result.short_url),
            format!("Code:         {}", result.code),
            format!("Original URL: {}", result.long_url),
            format!("Expires:      {}", format_expiry(result.expire_at.as_ref())),
        ],
    }
}

/// Renders the lookup slot.
///
/// A link without `last_accessed_at` shows `never accessed` regardless of
/// its click count.
pub fn render_lookup(state: &InteractionState<LookupResult>) -> Vec<String> {
    match state {
        InteractionState::Idle => Vec::new(),
        InteractionState::Pending => vec!["Looking up short link...".to_string()],
        InteractionState::Failed(message) => vec![message.clone()],
        InteractionState::Succeeded(result) => {
            let last_access = match result.access_status() {
                AccessStatus::NeverAccessed => "never accessed".to_string(),
                AccessStatus::LastAccessed(at) => format_timestamp(&at),
            };

            let mut expires = format_expiry(result.expire_at.as_ref());
            if result.is_expired() {
                expires.push_str(" (expired)");
            }

            vec![
                format!("Code:          {}", result.code),
                format!("Original URL:  {}", result.long_url),
                format!("Created:       {}", format_timestamp(&result.created_at)),
                format!("Expires:       {expires}"),
                format!("Clicks:        {}", result.click_count),
                format!("Last accessed: {last_access}"),
            ]
        }
    }
}

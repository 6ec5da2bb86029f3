//! # URL Shortener Client
//!
//! Client-side workflow for a URL shortening service: create short links and
//! look up link metadata over the service's HTTP/JSON API.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Requests, results, interaction state and the service port
//! - **Application Layer** ([`application`]) - The create/lookup workflow controller
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` implementation of the port
//! - **API Contract** ([`api`]) - Wire DTOs of the remote service
//! - **Presentation** ([`presentation`]) - Plain-text rendering of interaction states
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORTENER_API_BASE_URL="http://localhost:8080"
//! cargo run -- create --url https://example.com
//! cargo run -- lookup abc123
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

pub use error::ClientError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::LinkWorkflow;
    pub use crate::domain::entities::{
        AccessStatus, CreateRequest, CreateResult, InteractionState, LookupRequest, LookupResult,
    };
    pub use crate::domain::ports::LinkApi;
    pub use crate::error::ClientError;
    pub use crate::infrastructure::http::HttpLinkApi;
}

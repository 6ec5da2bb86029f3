//! Domain layer: entities and ports.
//!
//! - [`entities`] - Requests, results and interaction state
//! - [`ports`] - Interface to the remote shortening service
//!
//! The domain layer has no dependency on the HTTP client or the presentation
//! layer.

pub mod entities;
pub mod ports;

//! Infrastructure layer for external integrations.
//!
//! Implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - `reqwest`-based client for the shortening service

pub mod http;

//! Wire contract of the remote shortening service.
//!
//! # Endpoints
//!
//! - `POST /api/v1/shorten` - create a short link
//! - `GET /api/v1/links/{code}` - link metadata
//! - `GET /healthz` - health check
//!
//! Paths are given as segments relative to the configured base URL so that a
//! base with a path prefix (e.g. `https://host/shortener/`) keeps its prefix.

pub mod dto;

pub const SHORTEN_PATH: &[&str] = &["api", "v1", "shorten"];
pub const LINKS_PATH: &[&str] = &["api", "v1", "links"];
pub const HEALTH_PATH: &[&str] = &["healthz"];

//! HTTP client for the shortening service.

pub mod link_api;

pub use link_api::HttpLinkApi;

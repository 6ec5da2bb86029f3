//! Trait definitions for external collaborators.
//!
//! Implementations live in `crate::infrastructure`; mocks are generated with
//! `mockall` for unit tests.

pub mod link_api;

pub use link_api::LinkApi;

#[cfg(test)]
pub use link_api::MockLinkApi;

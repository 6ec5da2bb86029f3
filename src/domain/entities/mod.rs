//! Core domain entities of the link workflow.
//!
//! Entities are transient: they live for one user interaction and are fully
//! replaced by the next submission.
//!
//! # Entity Types
//!
//! - [`CreateRequest`] / [`CreateResult`] - Short link creation
//! - [`LookupRequest`] / [`LookupResult`] - Short link metadata lookup
//! - [`InteractionState`] - Lifecycle of one operation slot

pub mod link;
pub mod state;

pub use link::{
    AccessStatus, CreateRequest, CreateResult, INVALID_CODE_MESSAGE, LookupRequest, LookupResult,
    MISSING_CODE_MESSAGE, MISSING_URL_MESSAGE,
};
pub use state::InteractionState;

//! Workflow services for the application layer.

pub mod link_workflow;

pub use link_workflow::{CREATE_FALLBACK_MESSAGE, LOOKUP_FALLBACK_MESSAGE, LinkWorkflow};

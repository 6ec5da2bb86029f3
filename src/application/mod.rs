//! Application layer: the interaction workflow.
//!
//! [`services::LinkWorkflow`] validates input, sequences the calls to the
//! shortening service through the [`crate::domain::ports::LinkApi`] port, and
//! keeps one [`crate::domain::entities::InteractionState`] per operation.

pub mod services;

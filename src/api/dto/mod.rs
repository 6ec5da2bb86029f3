//! Data Transfer Objects for the shortening service's JSON contract.
//!
//! DTOs mirror the wire format exactly and convert into domain entities with
//! `From` impls. Optional fields accept both `null` and absence.

pub mod error;
pub mod health;
pub mod link_info;
pub mod shorten;

pub use error::ErrorResponse;
pub use health::HealthResponse;
pub use link_info::LinkInfoResponse;
pub use shorten::{ShortenRequest, ShortenResponse};

//! Port to the remote shortening service.

use crate::domain::entities::{CreateRequest, CreateResult, LookupRequest, LookupResult};
use crate::error::ClientError;
use async_trait::async_trait;

/// Interface to the shortening service consumed by the workflow.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpLinkApi`] - HTTP/JSON implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkApi: Send + Sync {
    /// Creates a short link.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Service`] on a non-2xx response and
    /// [`ClientError::Transport`] when the exchange could not complete.
    async fn shorten(&self, request: &CreateRequest) -> Result<CreateResult, ClientError>;

    /// Fetches metadata of an existing short code.
    ///
    /// # Errors
    ///
    /// Same as [`LinkApi::shorten`].
    async fn lookup(&self, request: &LookupRequest) -> Result<LookupResult, ClientError>;

    /// Checks that the service is reachable and healthy.
    async fn health(&self) -> Result<(), ClientError>;
}

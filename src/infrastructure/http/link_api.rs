//! HTTP/JSON implementation of [`LinkApi`] backed by `reqwest`.

use crate::api::dto::{
    ErrorResponse, HealthResponse, LinkInfoResponse, ShortenRequest, ShortenResponse,
};
use crate::api::{HEALTH_PATH, LINKS_PATH, SHORTEN_PATH};
use crate::config::Config;
use crate::domain::entities::{CreateRequest, CreateResult, LookupRequest, LookupResult};
use crate::domain::ports::LinkApi;
use crate::error::ClientError;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the shortening service.
///
/// Every request is bounded by the configured timeout; an expired timeout is
/// reported as [`ClientError::Transport`]. Requests are never retried.
#[derive(Debug, Clone)]
pub struct HttpLinkApi {
    client: Client,
    base_url: Url,
}

impl HttpLinkApi {
    /// Creates a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the underlying HTTP client cannot
    /// be built (e.g. TLS backend initialization fails).
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Self::new(config.api_base_url.clone(), config.request_timeout())
    }

    /// Resolves an endpoint below the base URL.
    ///
    /// Each segment is percent-encoded, so a code containing `/` or `?` stays
    /// a single path segment. The segments `.` and `..` would be resolved away
    /// by URL normalization; [`LookupRequest`] rejects them as codes.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::transport(format!("invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a request and decodes a 2xx JSON body into `T`.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = match response.bytes().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(
                        status = status.as_u16(),
                        error = %e,
                        "failed to read error body"
                    );
                    Default::default()
                }
            };
            let parsed = ErrorResponse::from_body(&body);
            tracing::debug!(
                status = status.as_u16(),
                kind = ?parsed.error,
                message = ?parsed.message,
                "service rejected request"
            );
            let message = parsed.message().map(str::to_string);
            return Err(ClientError::service(status.as_u16(), message));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl LinkApi for HttpLinkApi {
    async fn shorten(&self, request: &CreateRequest) -> Result<CreateResult, ClientError> {
        let url = self.endpoint(SHORTEN_PATH)?;
        tracing::debug!(%url, custom_code = ?request.custom_code, "creating short link");

        let body = ShortenRequest::from(request);
        let response: ShortenResponse = self.execute(self.client.post(url).json(&body)).await?;

        Ok(response.into())
    }

    async fn lookup(&self, request: &LookupRequest) -> Result<LookupResult, ClientError> {
        let mut segments = LINKS_PATH.to_vec();
        segments.push(request.code.as_str());
        let url = self.endpoint(&segments)?;
        tracing::debug!(%url, "looking up short link");

        let response: LinkInfoResponse = self.execute(self.client.get(url)).await?;

        Ok(response.into())
    }

    async fn health(&self) -> Result<(), ClientError> {
        let url = self.endpoint(HEALTH_PATH)?;
        let response: HealthResponse = self.execute(self.client.get(url)).await?;

        if response.is_ok() {
            Ok(())
        } else {
            Err(ClientError::transport(format!(
                "service reported status '{}'",
                response.status
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpLinkApi {
        HttpLinkApi::new(Url::parse(base).unwrap(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_without_trailing_slash() {
        let url = api("http://localhost:8080").endpoint(SHORTEN_PATH).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v1/shorten");
    }

    #[test]
    fn test_endpoint_keeps_base_prefix() {
        let url = api("https://example.com/shortener/")
            .endpoint(HEALTH_PATH)
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/shortener/healthz");
    }

    #[test]
    fn test_endpoint_encodes_code_segment() {
        let url = api("http://localhost:8080")
            .endpoint(&["api", "v1", "links", "a/b?c"])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v1/links/a%2Fb%3Fc");
    }

    #[test]
    fn test_endpoint_keeps_dotted_codes() {
        let url = api("http://localhost:8080")
            .endpoint(&["api", "v1", "links", "..."])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v1/links/...");
    }
}

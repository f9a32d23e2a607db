//! HTTP transport for platform API calls.
//!
//! The platform contract is narrow: issue one request, demand one exact
//! status code, hand back the raw body. Parsing is owned by the call site,
//! which knows the expected shape. The [`Transport`] trait exists so the
//! rest of the SDK can be exercised against an in-memory implementation.

use crate::config::NetworkConfig;
use crate::error::{DriftwatchError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use tracing::{debug, warn};

/// A synchronous-from-the-caller's-perspective request/response channel to
/// the platform.
///
/// Implementations must surface a non-matching status code as an error
/// before any body is handed to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a request and return the raw response body.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `url` - Absolute request URL
    /// * `expected_status` - The only status code treated as success
    /// * `body` - Optional JSON request body
    async fn invoke(
        &self,
        method: Method,
        url: &str,
        expected_status: StatusCode,
        body: Option<String>,
    ) -> Result<String>;
}

/// Production [`Transport`] backed by reqwest.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the default timeout and user agent.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(NetworkConfig::REQUEST_TIMEOUT)
            .user_agent(NetworkConfig::USER_AGENT)
            .build()
            .map_err(|e| DriftwatchError::Transport {
                message: format!("failed to create HTTP client: {e}"),
                source: Some(e),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn invoke(
        &self,
        method: Method,
        url: &str,
        expected_status: StatusCode,
        body: Option<String>,
    ) -> Result<String> {
        debug!(%method, url, "issuing platform request");

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status != expected_status {
            warn!(url, %status, "platform request returned unexpected status");
            return Err(DriftwatchError::UnexpectedStatus {
                url: url.to_string(),
                expected: expected_status.as_u16(),
                actual: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

//! HTTP transport seam
//!
//! The client only needs "GET this URL, give me the body". Keeping that behind
//! [`Transport`] lets tests replay fixture bodies and leaves room for a retry
//! policy without touching extraction.

use wikirand_core::WikiError;

#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Fetch `url` and return the response body
    ///
    /// Network failures and non-success statuses are reported as
    /// [`WikiError::Upstream`].
    async fn get(&self, url: &str) -> Result<String, WikiError>;
}

/// [`Transport`] backed by a `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client identifying itself as `wikirand/<version>`
    pub fn new() -> Result<Self, WikiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("wikirand/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WikiError::Upstream(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client))
    }

    /// Wrap an already configured `reqwest::Client`
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<String, WikiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| WikiError::Upstream(format!("Failed to send request to {url}: {e}")))?;

        if !response.status().is_success() {
            return Err(WikiError::Upstream(format!(
                "Request to {url} failed: HTTP {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| WikiError::Upstream(format!("Failed to read response from {url}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_is_upstream() {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap();
        let transport = ReqwestTransport::with_client(client);

        let err = transport.get("http://127.0.0.1:1/").await.unwrap_err();
        assert!(err.is_upstream());
    }
}

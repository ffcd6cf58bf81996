use anyhow::{Context, Result};

use crate::config::Config;

/// Shareable HTTP client for the upstream headers-echo service.
#[derive(Clone)]
pub struct HttpbinClient {
    inner: reqwest::Client,
    url: String,
}

impl HttpbinClient {
    /// Create a new upstream client from configuration.
    ///
    /// The client carries no timeout: a request waits until the upstream
    /// responds or the connection fails.
    pub fn from_config(config: &Config) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .build()
            .context("Failed to build upstream HTTP client")?;

        Ok(HttpbinClient {
            inner,
            url: config.httpbin_headers_url.clone(),
        })
    }

    /// Fetch the upstream headers document as plain text.
    ///
    /// A non-2xx upstream status counts as a failure, like any connect,
    /// DNS, or body-read error.
    pub async fn fetch_headers(&self) -> Result<String> {
        let response = self.inner
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Failed to reach upstream at {}", self.url))?;

        let response = response
            .error_for_status()
            .context("Upstream responded with an error status")?;

        let body = response
            .text()
            .await
            .context("Failed to read upstream response body")?;

        tracing::debug!("Fetched {} bytes from upstream", body.len());
        Ok(body)
    }
}

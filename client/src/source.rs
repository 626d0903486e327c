use std::time::Duration;

use anyhow::{Context, Result};

/// Where raw API bodies come from
///
/// [`PokeApi`] is the real implementation; tests serve canned bodies.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    /// Fetch the body at `url`
    async fn get(&self, url: &str) -> Result<String>;
}

/// HTTP source backed by `reqwest`
pub struct PokeApi {
    http: reqwest::Client,
}

impl PokeApi {
    pub fn new(user_agent: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http })
    }
}

impl DataSource for PokeApi {
    async fn get(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()?;

        response
            .text()
            .await
            .with_context(|| format!("Failed to read body from {}", url))
    }
}

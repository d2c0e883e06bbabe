//! HTTP Fetcher
//!
//! reqwest-backed [`Fetcher`] for native hosts.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::Fetcher;
use crate::error::{DashboardError, DashboardResult};

/// Fetches dashboard endpoints from a running DeskFit server
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    /// Create a fetcher for `base_url` (e.g. "http://localhost:5000")
    pub fn new(base_url: impl Into<String>, request_timeout: Duration) -> DashboardResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| DashboardError::transport(&base_url, e))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get_json(&self, path: &str) -> DashboardResult<serde_json::Value> {
        let url = self.url(path);
        tracing::debug!(url = %url, "GET");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                DashboardError::transport(path, "request timed out")
            } else {
                DashboardError::transport(path, e)
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::transport(path, e))?;

        serde_json::from_str(&body).map_err(|e| {
            if status.is_success() {
                DashboardError::malformed(path, e)
            } else {
                DashboardError::malformed(path, format!("HTTP {}: {}", status.as_u16(), e))
            }
        })
    }
}

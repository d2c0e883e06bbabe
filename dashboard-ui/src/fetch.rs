//! Browser Fetcher
//!
//! `gloo-net` backed [`Fetcher`]. Paths are requested relative to the page
//! origin, the same way the page's own links are.

use async_trait::async_trait;
use deskfit_dashboard::{DashboardError, DashboardResult, Fetcher};
use gloo_net::http::Request;

/// Fetches dashboard endpoints from the page's origin
pub struct GlooFetcher;

#[async_trait(?Send)]
impl Fetcher for GlooFetcher {
    async fn get_json(&self, path: &str) -> DashboardResult<serde_json::Value> {
        let response = Request::get(path)
            .send()
            .await
            .map_err(|e| DashboardError::transport(path, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::transport(path, e))?;

        serde_json::from_str(&body).map_err(|e| DashboardError::malformed(path, e))
    }
}

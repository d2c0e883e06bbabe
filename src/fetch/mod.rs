//! Endpoint Fetching
//!
//! The bootstrapper reads its two JSON endpoints through the [`Fetcher`]
//! trait. The native host provides [`HttpFetcher`] (reqwest); the browser
//! host wraps `gloo-net`.

#[cfg(feature = "native")]
mod http;

#[cfg(feature = "native")]
pub use http::HttpFetcher;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DashboardResult;

/// Paths of the two dashboard endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Endpoints {
    #[serde(default = "default_summary_path")]
    pub summary: String,
    #[serde(default = "default_health_path")]
    pub health: String,
}

fn default_summary_path() -> String {
    "/get_summary_data".to_string()
}

fn default_health_path() -> String {
    "/get_health_status".to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            summary: default_summary_path(),
            health: default_health_path(),
        }
    }
}

/// GET a path and decode the body as JSON.
///
/// Implementations must not branch on the HTTP status: a body that parses is
/// returned, a body that doesn't is `MalformedPayload`, a request that never
/// completes is `Transport`.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Fetcher {
    async fn get_json(&self, path: &str) -> DashboardResult<serde_json::Value>;
}

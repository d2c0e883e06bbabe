//! Dashboard error types
//!
//! Defines all errors that can occur while bootstrapping the dashboard page.

use thiserror::Error;

/// Errors that can occur in the page bootstrapper
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// Network or transport failure while fetching an endpoint
    #[error("Transport error fetching {endpoint}: {reason}")]
    Transport { endpoint: String, reason: String },

    /// Response body was not the JSON shape the endpoint promises
    #[error("Malformed payload from {endpoint}: {reason}")]
    MalformedPayload { endpoint: String, reason: String },

    /// Summary payload parsed but violates the alignment/format rules
    #[error("Invalid summary data: {0}")]
    InvalidSummary(String),

    /// An element the page contract requires is absent
    #[error("Missing element: #{0}")]
    MissingElement(String),

    /// The chart library refused the configuration
    #[error("Render error: {0}")]
    Render(String),

    /// Any other DOM operation failure
    #[error("DOM error: {0}")]
    Dom(String),
}

impl DashboardError {
    /// Build a malformed-payload error from a serde failure
    pub fn malformed(endpoint: &str, err: impl std::fmt::Display) -> Self {
        DashboardError::MalformedPayload {
            endpoint: endpoint.to_string(),
            reason: err.to_string(),
        }
    }

    /// Build a transport error
    pub fn transport(endpoint: &str, err: impl std::fmt::Display) -> Self {
        DashboardError::Transport {
            endpoint: endpoint.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias for bootstrapper operations
pub type DashboardResult<T> = Result<T, DashboardError>;

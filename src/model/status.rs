//! Health status payload

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// Body of `GET /get_health_status`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    /// Validate a raw JSON body into a status
    pub fn from_json(endpoint: &str, value: serde_json::Value) -> DashboardResult<Self> {
        // Derived structs also accept sequences; only an object is a status
        if !value.is_object() {
            return Err(DashboardError::malformed(endpoint, "expected a JSON object"));
        }
        serde_json::from_value(value).map_err(|e| DashboardError::malformed(endpoint, e))
    }
}

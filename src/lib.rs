//! # DeskFit Dashboard
//!
//! Page bootstrapper for the DeskFit daily health dashboard. On page load it
//! fetches the daily summary, renders the calories/water bar chart, and
//! applies the user's display preferences to the page.
//!
//! ## Modules
//!
//! - [`model`]: Summary, preference and status payloads with boundary validation
//! - [`chart`]: Bar chart configuration builder and the renderer seam
//! - [`dom`]: Document seam and the in-memory [`VirtualDocument`]
//! - [`fetch`]: Endpoint fetching seam (reqwest-backed on native hosts)
//! - [`bootstrap`]: The [`PageBootstrapper`] tying it all together
//! - `config`: TOML + environment configuration (native hosts)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use deskfit_dashboard::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let elements = PageElements::default();
//!     let document = VirtualDocument::dashboard_page(&elements);
//!     let fetcher = HttpFetcher::new("http://localhost:5000", Duration::from_secs(10))?;
//!
//!     let bootstrapper = PageBootstrapper::new(&fetcher, &document, &document, elements);
//!     let report = bootstrapper
//!         .run(&UserPreferences::from_template("dark", "medium", "#007bff"))
//!         .await;
//!
//!     println!("chart: {:?}", report.chart);
//!     Ok(())
//! }
//! ```

pub mod bootstrap;
pub mod chart;
#[cfg(feature = "native")]
pub mod config;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod model;

// Re-export top-level types for convenience
pub use bootstrap::{ChartOutcome, LoadReport, PageBootstrapper, PreferenceOutcome};

pub use chart::{build_summary_chart, ChartConfig, ChartRenderer, Dataset};

pub use dom::{Document, DocumentSnapshot, PageElements, VirtualDocument, VirtualElement};

pub use error::{DashboardError, DashboardResult};

pub use fetch::{Endpoints, Fetcher};

#[cfg(feature = "native")]
pub use fetch::HttpFetcher;

pub use model::{HealthStatus, SuggestionsPalette, SummaryData, Theme, UserPreferences};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, EndpointsConfig, LoadedConfig, LoggingConfig};

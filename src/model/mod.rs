//! Dashboard data model
//!
//! Payload and preference types consumed by the page bootstrapper:
//! - `SummaryData`: per-day calorie/water series behind the summary chart
//! - `UserPreferences` and `Theme`: template-injected display preferences
//! - `HealthStatus`: the one-line status returned by the health endpoint

mod preferences;
mod status;
mod summary;

pub use preferences::{SuggestionsPalette, Theme, UserPreferences};
pub use status::HealthStatus;
pub use summary::{DailySummary, SummaryData, SUMMARY_DATE_FORMAT};

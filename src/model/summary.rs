//! Daily summary series
//!
//! The summary endpoint returns four parallel arrays. Index `i` in each
//! array describes the same calendar day, so the arrays are only usable
//! when they have equal length.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// Date format the server emits for `dates`
pub const SUMMARY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Body of `GET /get_summary_data`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryData {
    /// Calendar days, ascending
    pub dates: Vec<String>,
    /// kcal consumed per day
    pub calorie_intake: Vec<f64>,
    /// kcal burned per day
    pub calories_burned: Vec<f64>,
    /// Water drunk per day, in ml
    pub water_intake: Vec<f64>,
}

/// One aligned row of a `SummaryData`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailySummary<'a> {
    pub date: &'a str,
    pub calorie_intake: f64,
    pub calories_burned: f64,
    pub water_intake: f64,
}

impl SummaryData {
    /// Decode and validate a raw JSON body.
    ///
    /// Shape errors (missing field, wrong type) are reported as
    /// `MalformedPayload`; alignment and date errors as `InvalidSummary`.
    pub fn from_json(endpoint: &str, value: serde_json::Value) -> DashboardResult<Self> {
        // Derived structs also accept sequences; only an object is a summary
        if !value.is_object() {
            return Err(DashboardError::malformed(endpoint, "expected a JSON object"));
        }
        let data: SummaryData =
            serde_json::from_value(value).map_err(|e| DashboardError::malformed(endpoint, e))?;
        data.validate()?;
        Ok(data)
    }

    /// Check the alignment invariant and the per-value format rules
    pub fn validate(&self) -> DashboardResult<()> {
        let n = self.dates.len();
        let series = [
            ("calorie_intake", &self.calorie_intake),
            ("calories_burned", &self.calories_burned),
            ("water_intake", &self.water_intake),
        ];

        for (name, values) in series {
            if values.len() != n {
                return Err(DashboardError::InvalidSummary(format!(
                    "{} has {} entries but dates has {}",
                    name,
                    values.len(),
                    n
                )));
            }
            if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
                return Err(DashboardError::InvalidSummary(format!(
                    "{}[{}] is not a finite number",
                    name, idx
                )));
            }
        }

        for (idx, date) in self.dates.iter().enumerate() {
            if NaiveDate::parse_from_str(date, SUMMARY_DATE_FORMAT).is_err() {
                return Err(DashboardError::InvalidSummary(format!(
                    "dates[{}] = {:?} is not a YYYY-MM-DD date",
                    idx, date
                )));
            }
        }

        Ok(())
    }

    /// Number of days covered
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Aligned record for day `idx`
    pub fn day(&self, idx: usize) -> Option<DailySummary<'_>> {
        Some(DailySummary {
            date: self.dates.get(idx).map(String::as_str)?,
            calorie_intake: *self.calorie_intake.get(idx)?,
            calories_burned: *self.calories_burned.get(idx)?,
            water_intake: *self.water_intake.get(idx)?,
        })
    }

    /// Iterate over aligned daily records
    pub fn days(&self) -> impl Iterator<Item = DailySummary<'_>> + '_ {
        (0..self.len()).filter_map(move |idx| self.day(idx))
    }
}

//! Summary Chart
//!
//! Builds the daily summary bar chart as a Chart.js configuration object.
//! Drawing is left to the chart library behind [`ChartRenderer`]; this module
//! only decides what goes into the chart.

use serde::{Deserialize, Serialize};

use crate::error::DashboardResult;
use crate::model::SummaryData;

/// Dataset colors, in dataset order
pub const CALORIE_INTAKE_COLOR: &str = "#ff6384";
pub const CALORIES_BURNED_COLOR: &str = "#36a2eb";
pub const WATER_INTAKE_COLOR: &str = "#4bc0c0";

/// Dataset labels, in dataset order
pub const CALORIE_INTAKE_LABEL: &str = "Calorie Intake";
pub const CALORIES_BURNED_LABEL: &str = "Calories Burned";
pub const WATER_INTAKE_LABEL: &str = "Water Intake (ml)";

/// Top-level chart configuration (Chart.js `new Chart(ctx, config)` shape)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartData {
    /// X-axis categories
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One named series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartOptions {
    pub responsive: bool,
    pub scales: Scales,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub begin_at_zero: bool,
    pub title: AxisTitle,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

impl Axis {
    fn titled(text: &str) -> Self {
        Self {
            begin_at_zero: false,
            title: AxisTitle {
                display: true,
                text: text.to_string(),
            },
        }
    }
}

impl Dataset {
    fn new(label: &str, data: &[f64], color: &str) -> Self {
        Self {
            label: label.to_string(),
            data: data.to_vec(),
            background_color: color.to_string(),
        }
    }
}

impl ChartConfig {
    /// Number of x-axis categories
    pub fn category_count(&self) -> usize {
        self.data.labels.len()
    }

    /// Look up a dataset by label
    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.data.datasets.iter().find(|d| d.label == label)
    }

    /// Serialize to the JSON object handed to the chart library
    pub fn to_json(&self) -> serde_json::Value {
        // Every field is a plain string, number, bool or vec of those
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Build the daily summary bar chart from a validated summary
pub fn build_summary_chart(summary: &SummaryData) -> ChartConfig {
    let mut y = Axis::titled("Amount");
    y.begin_at_zero = true;

    ChartConfig {
        chart_type: ChartType::Bar,
        data: ChartData {
            labels: summary.dates.clone(),
            datasets: vec![
                Dataset::new(
                    CALORIE_INTAKE_LABEL,
                    &summary.calorie_intake,
                    CALORIE_INTAKE_COLOR,
                ),
                Dataset::new(
                    CALORIES_BURNED_LABEL,
                    &summary.calories_burned,
                    CALORIES_BURNED_COLOR,
                ),
                Dataset::new(WATER_INTAKE_LABEL, &summary.water_intake, WATER_INTAKE_COLOR),
            ],
        },
        options: ChartOptions {
            responsive: true,
            scales: Scales {
                x: Axis::titled("Date"),
                y,
            },
        },
    }
}

/// Draws a chart configuration into a canvas element.
///
/// Implemented by the browser host on top of Chart.js and by
/// [`crate::dom::VirtualDocument`] for headless loads.
pub trait ChartRenderer {
    /// Construct the chart inside the canvas with id `canvas_id`.
    ///
    /// Must fail with `MissingElement` when the canvas does not exist.
    fn render_chart(&self, canvas_id: &str, config: &ChartConfig) -> DashboardResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summary(n: usize) -> SummaryData {
        SummaryData {
            dates: (0..n).map(|i| format!("2024-01-{:02}", i + 1)).collect(),
            calorie_intake: (0..n).map(|i| 2000.0 + i as f64).collect(),
            calories_burned: (0..n).map(|i| 500.0 + i as f64).collect(),
            water_intake: (0..n).map(|i| 1500.0 + i as f64).collect(),
        }
    }

    #[test]
    fn test_three_datasets_of_length_n() {
        for n in [0, 1, 7, 31] {
            let chart = build_summary_chart(&summary(n));

            assert_eq!(chart.data.datasets.len(), 3);
            assert_eq!(chart.category_count(), n);
            for dataset in &chart.data.datasets {
                assert_eq!(dataset.data.len(), n);
            }
        }
    }

    #[test]
    fn test_dataset_order_and_colors() {
        let chart = build_summary_chart(&summary(3));
        let colors: Vec<&str> = chart
            .data
            .datasets
            .iter()
            .map(|d| d.background_color.as_str())
            .collect();
        assert_eq!(colors, vec!["#ff6384", "#36a2eb", "#4bc0c0"]);

        let labels: Vec<&str> = chart.data.datasets.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Calorie Intake", "Calories Burned", "Water Intake (ml)"]
        );

        let burned = chart.dataset("Calories Burned").unwrap();
        assert_eq!(burned.background_color, "#36a2eb");
        assert_eq!(burned.data, vec![500.0, 501.0, 502.0]);
        assert!(chart.dataset("Steps").is_none());
    }

    #[test]
    fn test_labels_follow_dates_in_order() {
        let data = summary(4);
        let chart = build_summary_chart(&data);
        assert_eq!(chart.data.labels, data.dates);
    }

    #[test]
    fn test_chart_js_shape() {
        let data = SummaryData {
            dates: vec!["2024-01-01".into(), "2024-01-02".into()],
            calorie_intake: vec![2000.0, 2100.0],
            calories_burned: vec![500.0, 600.0],
            water_intake: vec![2000.0, 2200.0],
        };
        let value = build_summary_chart(&data).to_json();

        assert_eq!(value["type"], json!("bar"));
        assert_eq!(value["data"]["labels"], json!(["2024-01-01", "2024-01-02"]));
        assert_eq!(value["data"]["datasets"][0]["data"], json!([2000.0, 2100.0]));
        assert_eq!(value["data"]["datasets"][1]["data"], json!([500.0, 600.0]));
        assert_eq!(value["data"]["datasets"][2]["data"], json!([2000.0, 2200.0]));
        assert_eq!(value["data"]["datasets"][0]["backgroundColor"], json!("#ff6384"));
        assert_eq!(value["options"]["responsive"], json!(true));
        assert_eq!(value["options"]["scales"]["x"]["title"]["text"], json!("Date"));
        assert_eq!(value["options"]["scales"]["y"]["title"]["text"], json!("Amount"));
        assert_eq!(value["options"]["scales"]["y"]["beginAtZero"], json!(true));
        assert!(value["options"]["scales"]["x"].get("beginAtZero").is_none());
    }
}

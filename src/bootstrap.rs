//! Page Bootstrapper
//!
//! Wires a dashboard page load to its behaviors:
//!
//! - **Summary chart**: fetch the daily summary, validate it, build the bar
//!   chart and hand it to the chart renderer.
//! - **Preferences**: apply the template-injected theme, font size and accent
//!   color to the document.
//! - **Health status**: fetch the status line and write it into the page.
//!   Not part of a page load; hosts call it on an explicit trigger.
//!
//! The first two run as independent futures joined on one logical thread.
//! A failure in one never affects the other, and neither failure reaches the
//! page: both are logged and reported in the [`LoadReport`].

use futures_util::future::join;
use serde::Serialize;
use tracing::Instrument;
use uuid::Uuid;

use crate::chart::{build_summary_chart, ChartRenderer};
use crate::dom::{Document, PageElements};
use crate::error::DashboardResult;
use crate::fetch::{Endpoints, Fetcher};
use crate::model::{HealthStatus, SummaryData, UserPreferences};

/// Result of the summary chart flow
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ChartOutcome {
    /// Chart constructed with this many x-axis categories
    Rendered { categories: usize },
    /// No chart was constructed
    Skipped { reason: String },
}

/// Result of the preference flow
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PreferenceOutcome {
    Applied,
    /// Attributes and accent color applied; suggestions box absent
    SuggestionsMissing,
    Failed { reason: String },
}

/// Everything one page load did
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub load_id: Uuid,
    pub chart: ChartOutcome,
    pub preferences: PreferenceOutcome,
}

/// Runs the dashboard page behaviors against a document
pub struct PageBootstrapper<'a, F, D, R>
where
    F: Fetcher + ?Sized,
    D: Document + ?Sized,
    R: ChartRenderer + ?Sized,
{
    fetcher: &'a F,
    document: &'a D,
    renderer: &'a R,
    elements: PageElements,
    endpoints: Endpoints,
}

impl<'a, F, D, R> PageBootstrapper<'a, F, D, R>
where
    F: Fetcher + ?Sized,
    D: Document + ?Sized,
    R: ChartRenderer + ?Sized,
{
    pub fn new(fetcher: &'a F, document: &'a D, renderer: &'a R, elements: PageElements) -> Self {
        Self {
            fetcher,
            document,
            renderer,
            elements,
            endpoints: Endpoints::default(),
        }
    }

    /// Builder method: override endpoint paths
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn elements(&self) -> &PageElements {
        &self.elements
    }

    /// Run a full page load: summary chart and preferences, independently
    pub async fn run(&self, preferences: &UserPreferences) -> LoadReport {
        let load_id = Uuid::new_v4();
        let span = tracing::info_span!("page_load", load_id = %load_id);

        async move {
            let chart_flow = self.render_summary_chart();
            let preference_flow = async { self.apply_preferences(preferences) };

            let (chart, preferences) = join(chart_flow, preference_flow).await;

            tracing::info!(chart = ?chart, preferences = ?preferences, "Page load finished");
            LoadReport {
                load_id,
                chart,
                preferences,
            }
        }
        .instrument(span)
        .await
    }

    /// Fetch the summary and construct the chart exactly once
    pub async fn render_summary_chart(&self) -> ChartOutcome {
        match self.try_render_summary_chart().await {
            Ok(categories) => {
                tracing::info!(categories, "Summary chart rendered");
                ChartOutcome::Rendered { categories }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Summary chart not rendered");
                ChartOutcome::Skipped {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn try_render_summary_chart(&self) -> DashboardResult<usize> {
        let path = &self.endpoints.summary;
        let body = self.fetcher.get_json(path).await?;
        let summary = SummaryData::from_json(path, body)?;

        let config = build_summary_chart(&summary);
        self.renderer
            .render_chart(&self.elements.chart_canvas, &config)?;

        Ok(summary.len())
    }

    /// Apply the three preference strings verbatim, then theme the
    /// suggestions box
    pub fn apply_preferences(&self, preferences: &UserPreferences) -> PreferenceOutcome {
        tracing::debug!(
            theme = %preferences.theme,
            font_size = %preferences.font_size,
            accent_color = %preferences.accent_color,
            "Applying user preferences"
        );

        match self.try_apply_preferences(preferences) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(error = %e, "User preferences not applied");
                PreferenceOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn try_apply_preferences(
        &self,
        preferences: &UserPreferences,
    ) -> DashboardResult<PreferenceOutcome> {
        self.document
            .set_body_attribute("data-theme", &preferences.theme)?;
        self.document
            .set_body_attribute("data-font-size", &preferences.font_size)?;
        self.document
            .set_root_style_property("--accent-color", &preferences.accent_color)?;

        let suggestions = &self.elements.suggestions;
        if !self.document.has_element(suggestions) {
            tracing::warn!(element = %suggestions, "Suggestions element missing, skipping theme colors");
            return Ok(PreferenceOutcome::SuggestionsMissing);
        }

        let palette = preferences.suggestions_palette();
        tracing::debug!(theme = %preferences.theme(), "Theming suggestions element");
        self.document
            .set_element_style(suggestions, "color", palette.color)?;
        self.document
            .set_element_style(suggestions, "background-color", palette.background_color)?;

        Ok(PreferenceOutcome::Applied)
    }

    /// Fetch the health status and write it into the status element.
    ///
    /// On any failure the error is logged and the document is left as it was.
    pub async fn refresh_health_status(&self) -> DashboardResult<HealthStatus> {
        let result = self.try_refresh_health_status().await;

        match &result {
            Ok(status) => tracing::info!(status = %status.status, "Health status updated"),
            Err(e) => tracing::error!(error = %e, "Error fetching health status"),
        }

        result
    }

    async fn try_refresh_health_status(&self) -> DashboardResult<HealthStatus> {
        let path = &self.endpoints.health;
        let body = self.fetcher.get_json(path).await?;
        let status = HealthStatus::from_json(path, body)?;

        self.document
            .set_element_text(&self.elements.status, &status.status)?;

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{CALORIES_BURNED_COLOR, CALORIE_INTAKE_COLOR, WATER_INTAKE_COLOR};
    use crate::dom::{VirtualDocument, VirtualElement};
    use crate::error::DashboardError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned responses keyed by path; unknown paths fail as transport errors
    #[derive(Default)]
    struct StubFetcher {
        responses: HashMap<String, Result<serde_json::Value, DashboardError>>,
        calls: AtomicUsize,
    }

    impl StubFetcher {
        fn respond(mut self, path: &str, body: serde_json::Value) -> Self {
            self.responses.insert(path.to_string(), Ok(body));
            self
        }

        fn fail(mut self, path: &str, err: DashboardError) -> Self {
            self.responses.insert(path.to_string(), Err(err));
            self
        }
    }

    #[async_trait]
    impl Fetcher for StubFetcher {
        async fn get_json(&self, path: &str) -> DashboardResult<serde_json::Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .get(path)
                .cloned()
                .unwrap_or_else(|| Err(DashboardError::transport(path, "connection refused")))
        }
    }

    fn two_day_summary() -> serde_json::Value {
        json!({
            "dates": ["2024-01-01", "2024-01-02"],
            "calorie_intake": [2000, 2100],
            "calories_burned": [500, 600],
            "water_intake": [2000, 2200]
        })
    }

    fn page() -> (VirtualDocument, PageElements) {
        let elements = PageElements::default();
        (VirtualDocument::dashboard_page(&elements), elements)
    }

    #[tokio::test]
    async fn test_end_to_end_chart() {
        let fetcher = StubFetcher::default().respond("/get_summary_data", two_day_summary());
        let (doc, elements) = page();
        let boot = PageBootstrapper::new(&fetcher, &doc, &doc, elements.clone());

        let report = boot.run(&UserPreferences::default()).await;
        assert_eq!(report.chart, ChartOutcome::Rendered { categories: 2 });

        let chart = doc.chart(&elements.chart_canvas).unwrap();
        assert_eq!(chart.category_count(), 2);
        assert_eq!(chart.data.labels, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(chart.data.datasets.len(), 3);

        let expected = [
            (CALORIE_INTAKE_COLOR, vec![2000.0, 2100.0]),
            (CALORIES_BURNED_COLOR, vec![500.0, 600.0]),
            (WATER_INTAKE_COLOR, vec![2000.0, 2200.0]),
        ];
        for (dataset, (color, values)) in chart.data.datasets.iter().zip(expected) {
            assert_eq!(dataset.background_color, color);
            assert_eq!(dataset.data, values);
        }

        // Summary fetched once; health status not part of a page load
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dark_theme_preferences() {
        let fetcher = StubFetcher::default();
        let (doc, elements) = page();
        let boot = PageBootstrapper::new(&fetcher, &doc, &doc, elements.clone());

        let prefs = UserPreferences::from_template("dark", "x-large", "rgb(1, 2, 3)");
        assert_eq!(boot.apply_preferences(&prefs), PreferenceOutcome::Applied);

        assert_eq!(doc.body_attribute("data-theme").as_deref(), Some("dark"));
        assert_eq!(doc.body_attribute("data-font-size").as_deref(), Some("x-large"));
        assert_eq!(
            doc.root_style_property("--accent-color").as_deref(),
            Some("rgb(1, 2, 3)")
        );
        assert_eq!(
            doc.element_style(&elements.suggestions, "color").as_deref(),
            Some("#fff")
        );
        assert_eq!(
            doc.element_style(&elements.suggestions, "background-color").as_deref(),
            Some("#333")
        );
    }

    #[tokio::test]
    async fn test_non_dark_theme_is_light() {
        for theme in ["light", "DARK", "", "high-contrast"] {
            let fetcher = StubFetcher::default();
            let (doc, elements) = page();
            let boot = PageBootstrapper::new(&fetcher, &doc, &doc, elements.clone());

            boot.apply_preferences(&UserPreferences::from_template(theme, "medium", "#007bff"));

            assert_eq!(doc.body_attribute("data-theme").as_deref(), Some(theme));
            assert_eq!(
                doc.element_style(&elements.suggestions, "color").as_deref(),
                Some("#333")
            );
            assert_eq!(
                doc.element_style(&elements.suggestions, "background-color").as_deref(),
                Some("#fff")
            );
        }
    }

    #[tokio::test]
    async fn test_transport_failure_skips_chart_keeps_preferences() {
        let fetcher = StubFetcher::default();
        let (doc, elements) = page();
        let boot = PageBootstrapper::new(&fetcher, &doc, &doc, elements.clone());

        let report = boot
            .run(&UserPreferences::from_template("dark", "small", "#000"))
            .await;

        assert!(matches!(report.chart, ChartOutcome::Skipped { .. }));
        assert!(doc.chart(&elements.chart_canvas).is_none());
        assert_eq!(report.preferences, PreferenceOutcome::Applied);
        assert_eq!(doc.body_attribute("data-theme").as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_malformed_summary_skips_chart() {
        let fetcher = StubFetcher::default()
            .respond("/get_summary_data", json!({"dates": ["2024-01-01"], "calorie_intake": []}));
        let (doc, elements) = page();
        let boot = PageBootstrapper::new(&fetcher, &doc, &doc, elements.clone());

        match boot.render_summary_chart().await {
            ChartOutcome::Skipped { reason } => assert!(reason.contains("/get_summary_data")),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(doc.chart(&elements.chart_canvas).is_none());
    }

    #[tokio::test]
    async fn test_misaligned_summary_skips_chart() {
        let fetcher = StubFetcher::default().respond(
            "/get_summary_data",
            json!({
                "dates": ["2024-01-01", "2024-01-02"],
                "calorie_intake": [2000, 2100],
                "calories_burned": [500],
                "water_intake": [2000, 2200]
            }),
        );
        let (doc, elements) = page();
        let boot = PageBootstrapper::new(&fetcher, &doc, &doc, elements.clone());

        assert!(matches!(
            boot.render_summary_chart().await,
            ChartOutcome::Skipped { .. }
        ));
        assert!(doc.chart(&elements.chart_canvas).is_none());
    }

    #[tokio::test]
    async fn test_array_summary_skips_chart() {
        let fetcher = StubFetcher::default().respond(
            "/get_summary_data",
            json!([["2024-01-01"], [2000], [500], [2000]]),
        );
        let (doc, elements) = page();
        let boot = PageBootstrapper::new(&fetcher, &doc, &doc, elements.clone());

        match boot.render_summary_chart().await {
            ChartOutcome::Skipped { reason } => assert!(reason.contains("expected a JSON object")),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(doc.chart(&elements.chart_canvas).is_none());
    }

    #[tokio::test]
    async fn test_missing_suggestions_is_guarded() {
        let fetcher = StubFetcher::default().respond("/get_summary_data", two_day_summary());
        let elements = PageElements::default();
        let doc = VirtualDocument::dashboard_page(&elements).without_element(&elements.suggestions);
        let boot = PageBootstrapper::new(&fetcher, &doc, &doc, elements.clone());

        let report = boot
            .run(&UserPreferences::from_template("dark", "large", "#abcdef"))
            .await;

        assert_eq!(report.preferences, PreferenceOutcome::SuggestionsMissing);
        assert_eq!(report.chart, ChartOutcome::Rendered { categories: 2 });
        assert_eq!(doc.body_attribute("data-font-size").as_deref(), Some("large"));
        assert_eq!(
            doc.root_style_property("--accent-color").as_deref(),
            Some("#abcdef")
        );
    }

    #[tokio::test]
    async fn test_missing_canvas_skips_chart() {
        let fetcher = StubFetcher::default().respond("/get_summary_data", two_day_summary());
        let elements = PageElements::default();
        let doc = VirtualDocument::dashboard_page(&elements).without_element(&elements.chart_canvas);
        let boot = PageBootstrapper::new(&fetcher, &doc, &doc, elements.clone());

        let report = boot.run(&UserPreferences::default()).await;
        match report.chart {
            ChartOutcome::Skipped { reason } => assert!(reason.contains("dailySummaryChart")),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(report.preferences, PreferenceOutcome::Applied);
    }

    #[tokio::test]
    async fn test_health_status_success() {
        let fetcher = StubFetcher::default().respond("/get_health_status", json!({"status": "OK"}));
        let (doc, elements) = page();
        let boot = PageBootstrapper::new(&fetcher, &doc, &doc, elements.clone());

        let status = boot.refresh_health_status().await.unwrap();
        assert_eq!(status.status, "OK");
        assert_eq!(doc.element_text(&elements.status).as_deref(), Some("OK"));
    }

    #[tokio::test]
    async fn test_health_status_failure_leaves_dom() {
        let fetcher = StubFetcher::default().fail(
            "/get_health_status",
            DashboardError::transport("/get_health_status", "connection reset"),
        );
        let elements = PageElements::default();
        let doc = VirtualDocument::dashboard_page(&elements)
            .with_element(&elements.status, VirtualElement::new("p").text("Checking..."));
        let boot = PageBootstrapper::new(&fetcher, &doc, &doc, elements.clone());

        let err = boot.refresh_health_status().await.unwrap_err();
        assert!(matches!(err, DashboardError::Transport { .. }));
        assert_eq!(
            doc.element_text(&elements.status).as_deref(),
            Some("Checking...")
        );
    }

    #[tokio::test]
    async fn test_health_status_wrong_shape_leaves_dom() {
        let fetcher = StubFetcher::default().respond("/get_health_status", json!(["OK"]));
        let (doc, elements) = page();
        let boot = PageBootstrapper::new(&fetcher, &doc, &doc, elements.clone());

        assert!(boot.refresh_health_status().await.is_err());
        assert_eq!(doc.element_text(&elements.status).as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_custom_endpoints() {
        let fetcher = StubFetcher::default().respond("/api/summary", two_day_summary());
        let (doc, elements) = page();
        let boot = PageBootstrapper::new(&fetcher, &doc, &doc, elements).with_endpoints(Endpoints {
            summary: "/api/summary".to_string(),
            health: "/api/health".to_string(),
        });

        // Endpoint overrides leave the element ids alone
        assert_eq!(boot.elements(), &PageElements::default());
        assert_eq!(
            boot.render_summary_chart().await,
            ChartOutcome::Rendered { categories: 2 }
        );
    }

    #[tokio::test]
    async fn test_report_serializes() {
        let fetcher = StubFetcher::default();
        let (doc, elements) = page();
        let boot = PageBootstrapper::new(&fetcher, &doc, &doc, elements);

        let report = boot.run(&UserPreferences::default()).await;
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["chart"]["outcome"], "skipped");
        assert_eq!(value["preferences"]["outcome"], "applied");
    }
}

//! Chart.js Renderer
//!
//! Hands the summary chart configuration to the page's global `Chart`
//! constructor. Chart.js itself is loaded by the page template.

use deskfit_dashboard::{ChartConfig, ChartRenderer, DashboardError, DashboardResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::web_dom::{js_error, WebPage};

#[wasm_bindgen]
extern "C" {
    /// Chart.js chart instance
    #[wasm_bindgen(js_name = Chart)]
    type ChartHandle;

    #[wasm_bindgen(constructor, catch, js_class = "Chart")]
    fn new(context: &CanvasRenderingContext2d, config: &JsValue) -> Result<ChartHandle, JsValue>;
}

/// [`ChartRenderer`] backed by Chart.js
pub struct ChartJsRenderer {
    page: WebPage,
}

impl ChartJsRenderer {
    pub fn new(page: WebPage) -> Self {
        Self { page }
    }

    fn context_2d(&self, canvas_id: &str) -> DashboardResult<CanvasRenderingContext2d> {
        let canvas = self
            .page
            .html_element(canvas_id)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| DashboardError::Render(format!("#{} is not a <canvas>", canvas_id)))?;

        canvas
            .get_context("2d")
            .map_err(|e| js_error("getContext", e))?
            .ok_or_else(|| DashboardError::Render("no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| DashboardError::Render("2d context cast failed".to_string()))
    }
}

impl ChartRenderer for ChartJsRenderer {
    fn render_chart(&self, canvas_id: &str, config: &ChartConfig) -> DashboardResult<()> {
        let context = self.context_2d(canvas_id)?;

        let json = config.to_json().to_string();
        let js_config = js_sys::JSON::parse(&json)
            .map_err(|e| DashboardError::Render(format!("config: {:?}", e)))?;

        // The chart lives on the canvas; the handle is not needed afterwards
        let _chart = ChartHandle::new(&context, &js_config)
            .map_err(|e| DashboardError::Render(format!("{:?}", e)))?;

        Ok(())
    }
}

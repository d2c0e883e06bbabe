//! DeskFit Dashboard (browser)
//!
//! WASM host for the dashboard page bootstrapper. The page template loads
//! this module after Chart.js and hands it the user's preferences:
//!
//! ```html
//! <script type="module">
//!   import init, { bootstrap } from "/static/pkg/dashboard_ui.js";
//!   await init();
//!   bootstrap("{{ user.theme }}", "{{ user.font_size }}", "{{ user.accent_color }}");
//! </script>
//! ```
//!
//! `get_health_status()` is exported for page scripts that want to show the
//! health status line; the page load itself never calls it.

use deskfit_dashboard::{
    ChartOutcome, PageBootstrapper, PageElements, PreferenceOutcome, UserPreferences,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod chart_js;
mod fetch;
mod web_dom;

pub use chart_js::ChartJsRenderer;
pub use fetch::GlooFetcher;
pub use web_dom::WebPage;

#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
}

/// Run the page load once the DOM is ready
#[wasm_bindgen]
pub fn bootstrap(theme: String, font_size: String, accent_color: String) -> Result<(), JsValue> {
    let preferences = UserPreferences::from_template(theme, font_size, accent_color);
    let page = WebPage::current()?;

    if page.is_loading() {
        let on_ready = Closure::once_into_js(move || {
            wasm_bindgen_futures::spawn_local(load(preferences));
        });
        page.document()
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        wasm_bindgen_futures::spawn_local(load(preferences));
    }

    Ok(())
}

/// Fetch the health status into `#statusResponse`
#[wasm_bindgen]
pub fn get_health_status() {
    wasm_bindgen_futures::spawn_local(async {
        let page = match WebPage::current() {
            Ok(page) => page,
            Err(e) => {
                web_sys::console::error_1(&e);
                return;
            }
        };
        let renderer = ChartJsRenderer::new(page.clone());
        let bootstrapper =
            PageBootstrapper::new(&GlooFetcher, &page, &renderer, PageElements::default());

        if let Err(e) = bootstrapper.refresh_health_status().await {
            web_sys::console::error_1(&format!("Error fetching health status: {}", e).into());
        }
    });
}

async fn load(preferences: UserPreferences) {
    web_sys::console::log_2(&"Theme:".into(), &preferences.theme.as_str().into());
    web_sys::console::log_2(&"Font Size:".into(), &preferences.font_size.as_str().into());
    web_sys::console::log_2(&"Accent Color:".into(), &preferences.accent_color.as_str().into());

    let page = match WebPage::current() {
        Ok(page) => page,
        Err(e) => {
            web_sys::console::error_1(&e);
            return;
        }
    };
    let renderer = ChartJsRenderer::new(page.clone());
    let bootstrapper = PageBootstrapper::new(&GlooFetcher, &page, &renderer, PageElements::default());

    let report = bootstrapper.run(&preferences).await;

    if let ChartOutcome::Skipped { reason } = &report.chart {
        web_sys::console::warn_1(&format!("Summary chart not rendered: {}", reason).into());
    }
    match &report.preferences {
        PreferenceOutcome::Applied => {}
        PreferenceOutcome::SuggestionsMissing => {
            web_sys::console::warn_1(&"Suggestions element missing; theme colors skipped".into());
        }
        PreferenceOutcome::Failed { reason } => {
            web_sys::console::warn_1(&format!("Preferences not applied: {}", reason).into());
        }
    }
}

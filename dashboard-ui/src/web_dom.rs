//! Browser Document
//!
//! [`Document`] implementation over `web-sys`.

use deskfit_dashboard::{DashboardError, DashboardResult, Document};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// The current page's DOM
#[derive(Clone)]
pub struct WebPage {
    document: web_sys::Document,
}

impl WebPage {
    /// Page of the current window
    pub fn current() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        Ok(Self { document })
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }

    /// Still parsing; `DOMContentLoaded` has not fired yet
    pub fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }

    /// Look up an element by id as an `HtmlElement`
    pub(crate) fn html_element(&self, id: &str) -> DashboardResult<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| DashboardError::MissingElement(id.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DashboardError::Dom(format!("#{} is not an HTML element", id)))
    }
}

/// Convert a thrown JS value into a DOM error
pub(crate) fn js_error(context: &str, err: JsValue) -> DashboardError {
    let detail = err
        .as_string()
        .unwrap_or_else(|| format!("{:?}", err));
    DashboardError::Dom(format!("{}: {}", context, detail))
}

impl Document for WebPage {
    fn set_body_attribute(&self, name: &str, value: &str) -> DashboardResult<()> {
        let body = self
            .document
            .body()
            .ok_or_else(|| DashboardError::MissingElement("body".to_string()))?;
        body.set_attribute(name, value)
            .map_err(|e| js_error("setAttribute", e))
    }

    fn set_root_style_property(&self, name: &str, value: &str) -> DashboardResult<()> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| DashboardError::MissingElement("html".to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DashboardError::Dom("root is not an HTML element".to_string()))?;
        root.style()
            .set_property(name, value)
            .map_err(|e| js_error("style.setProperty", e))
    }

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_element_style(&self, id: &str, property: &str, value: &str) -> DashboardResult<()> {
        self.html_element(id)?
            .style()
            .set_property(property, value)
            .map_err(|e| js_error("style.setProperty", e))
    }

    fn set_element_text(&self, id: &str, text: &str) -> DashboardResult<()> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| DashboardError::MissingElement(id.to_string()))?
            .set_text_content(Some(text));
        Ok(())
    }
}

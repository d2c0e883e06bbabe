//! Document Abstraction
//!
//! The bootstrapper only touches the page through the [`Document`] trait.
//! The browser host implements it on top of `web-sys`; native hosts and
//! tests use the in-memory [`VirtualDocument`].
//!
//! All methods take `&self`: like the browser DOM, a document is a shared,
//! single-threaded object mutated through interior mutability.

mod virtual_doc;

pub use virtual_doc::{DocumentSnapshot, VirtualDocument, VirtualElement};

use serde::{Deserialize, Serialize};

use crate::error::DashboardResult;

/// Ids of the elements the dashboard page must provide
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageElements {
    /// `<canvas>` hosting the summary chart
    #[serde(default = "default_chart_canvas")]
    pub chart_canvas: String,
    /// Element receiving the health status text
    #[serde(default = "default_status")]
    pub status: String,
    /// Food suggestions box, themed inline
    #[serde(default = "default_suggestions")]
    pub suggestions: String,
}

fn default_chart_canvas() -> String {
    "dailySummaryChart".to_string()
}

fn default_status() -> String {
    "statusResponse".to_string()
}

fn default_suggestions() -> String {
    "suggestions".to_string()
}

impl Default for PageElements {
    fn default() -> Self {
        Self {
            chart_canvas: default_chart_canvas(),
            status: default_status(),
            suggestions: default_suggestions(),
        }
    }
}

/// Page operations the bootstrapper performs
pub trait Document {
    /// Set an attribute on `<body>`
    fn set_body_attribute(&self, name: &str, value: &str) -> DashboardResult<()>;

    /// Set a CSS custom property on the root element's inline style
    fn set_root_style_property(&self, name: &str, value: &str) -> DashboardResult<()>;

    /// Whether an element with this id exists
    fn has_element(&self, id: &str) -> bool;

    /// Set an inline style property on an element.
    ///
    /// Fails with `MissingElement` when the element is absent.
    fn set_element_style(&self, id: &str, property: &str, value: &str) -> DashboardResult<()>;

    /// Replace the text content of an element.
    ///
    /// Fails with `MissingElement` when the element is absent.
    fn set_element_text(&self, id: &str, text: &str) -> DashboardResult<()>;
}

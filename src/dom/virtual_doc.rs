//! In-memory document
//!
//! A minimal DOM stand-in: body attributes, root inline style, and a flat
//! id → element map. Charts rendered into a canvas are stored on the
//! element so headless loads can inspect what would have been drawn.

use serde::Serialize;
use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{Document, PageElements};
use crate::chart::{ChartConfig, ChartRenderer};
use crate::error::{DashboardError, DashboardResult};

/// A single element in a [`VirtualDocument`]
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct VirtualElement {
    /// Lowercase tag name
    pub tag: String,
    /// Text content
    pub text: String,
    /// Inline style properties
    pub style: BTreeMap<String, String>,
    /// Chart constructed in this element (canvas only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartConfig>,
}

impl VirtualElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// Builder method: set initial text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }
}

/// Point-in-time copy of a document's state
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DocumentSnapshot {
    pub body_attributes: BTreeMap<String, String>,
    pub root_style: BTreeMap<String, String>,
    pub elements: BTreeMap<String, VirtualElement>,
}

/// In-memory [`Document`] and [`ChartRenderer`]
#[derive(Debug, Default)]
pub struct VirtualDocument {
    state: RefCell<DocumentSnapshot>,
}

impl VirtualDocument {
    /// Empty document: no elements at all
    pub fn new() -> Self {
        Self::default()
    }

    /// Document with every element the dashboard page provides
    pub fn dashboard_page(elements: &PageElements) -> Self {
        Self::new()
            .with_element(&elements.chart_canvas, VirtualElement::new("canvas"))
            .with_element(&elements.status, VirtualElement::new("p"))
            .with_element(&elements.suggestions, VirtualElement::new("div"))
    }

    /// Builder method: add an element
    pub fn with_element(self, id: &str, element: VirtualElement) -> Self {
        self.state.borrow_mut().elements.insert(id.to_string(), element);
        self
    }

    /// Builder method: remove an element
    pub fn without_element(self, id: &str) -> Self {
        self.state.borrow_mut().elements.remove(id);
        self
    }

    pub fn body_attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().body_attributes.get(name).cloned()
    }

    pub fn root_style_property(&self, name: &str) -> Option<String> {
        self.state.borrow().root_style.get(name).cloned()
    }

    pub fn element(&self, id: &str) -> Option<VirtualElement> {
        self.state.borrow().elements.get(id).cloned()
    }

    pub fn element_text(&self, id: &str) -> Option<String> {
        self.state.borrow().elements.get(id).map(|e| e.text.clone())
    }

    pub fn element_style(&self, id: &str, property: &str) -> Option<String> {
        self.state
            .borrow()
            .elements
            .get(id)
            .and_then(|e| e.style(property).map(str::to_string))
    }

    /// Chart constructed in a canvas, if any
    pub fn chart(&self, canvas_id: &str) -> Option<ChartConfig> {
        self.state
            .borrow()
            .elements
            .get(canvas_id)
            .and_then(|e| e.chart.clone())
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        self.state.borrow().clone()
    }

    fn with_element_mut<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut VirtualElement) -> DashboardResult<T>,
    ) -> DashboardResult<T> {
        let mut state = self.state.borrow_mut();
        let element = state
            .elements
            .get_mut(id)
            .ok_or_else(|| DashboardError::MissingElement(id.to_string()))?;
        f(element)
    }
}

impl Document for VirtualDocument {
    fn set_body_attribute(&self, name: &str, value: &str) -> DashboardResult<()> {
        self.state
            .borrow_mut()
            .body_attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_root_style_property(&self, name: &str, value: &str) -> DashboardResult<()> {
        self.state
            .borrow_mut()
            .root_style
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn has_element(&self, id: &str) -> bool {
        self.state.borrow().elements.contains_key(id)
    }

    fn set_element_style(&self, id: &str, property: &str, value: &str) -> DashboardResult<()> {
        self.with_element_mut(id, |element| {
            element.style.insert(property.to_string(), value.to_string());
            Ok(())
        })
    }

    fn set_element_text(&self, id: &str, text: &str) -> DashboardResult<()> {
        self.with_element_mut(id, |element| {
            element.text = text.to_string();
            Ok(())
        })
    }
}

impl ChartRenderer for VirtualDocument {
    fn render_chart(&self, canvas_id: &str, config: &ChartConfig) -> DashboardResult<()> {
        self.with_element_mut(canvas_id, |element| {
            if element.tag != "canvas" {
                return Err(DashboardError::Render(format!(
                    "#{} is a <{}>, not a <canvas>",
                    canvas_id, element.tag
                )));
            }
            // Chart.js refuses a second chart on a canvas that already hosts one
            if element.chart.is_some() {
                return Err(DashboardError::Render(format!(
                    "canvas #{} is already in use",
                    canvas_id
                )));
            }
            element.chart = Some(config.clone());
            Ok(())
        })
    }
}

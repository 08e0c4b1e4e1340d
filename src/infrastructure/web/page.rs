// SPDX-License-Identifier: MPL-2.0
//! Browser document adapter implementing the [`Page`] port over `web-sys`.

use crate::application::port::{Page, ScrollBehavior};
use crate::domain::ui::ScrollMetrics;
use crate::error::{Error, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, ScrollToOptions, Window};

/// Id of the optional `<script type="application/toml">` holding the config.
pub const CONFIG_ELEMENT_ID: &str = "page-lens-config";

#[derive(Debug, Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    /// Binds to the global window and document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] outside a browser window context.
    pub fn new() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| Error::MissingElement("window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| Error::MissingElement("document".to_string()))?;
        Ok(Self { window, document })
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// TOML text of the embedded config element, if present.
    #[must_use]
    pub fn config_text(&self) -> Option<String> {
        self.document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
    }
}

/// Converts a thrown JS value into a crate error.
pub(crate) fn dom_error(value: JsValue) -> Error {
    Error::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn log_failure(operation: &str, result: std::result::Result<(), JsValue>) {
    if let Err(value) = result {
        tracing::warn!(operation, err = %dom_error(value), "DOM call failed");
    }
}

fn elements(list: std::result::Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl Page for WebPage {
    type Element = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        elements(self.document.query_selector_all(selector))
    }

    fn query_in(&self, root: &Element, selector: &str) -> Option<Element> {
        root.query_selector(selector).ok().flatten()
    }

    fn query_all_in(&self, root: &Element, selector: &str) -> Vec<Element> {
        elements(root.query_selector_all(selector))
    }

    fn closest(&self, element: &Element, selector: &str) -> Option<Element> {
        element.closest(selector).ok().flatten()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&self, element: &Element, class: &str) {
        log_failure("classList.add", element.class_list().add_1(class));
    }

    fn remove_class(&self, element: &Element, class: &str) {
        log_failure("classList.remove", element.class_list().remove_1(class));
    }

    fn toggle_class(&self, element: &Element, class: &str) -> bool {
        match element.class_list().toggle(class) {
            Ok(present) => present,
            Err(value) => {
                log_failure("classList.toggle", Err(value));
                false
            }
        }
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        log_failure("setAttribute", element.set_attribute(name, value));
    }

    fn computed_style(&self, element: &Element, property: &str) -> Option<String> {
        self.window
            .get_computed_style(element)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value(property).ok())
            .filter(|value| !value.is_empty())
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) {
        if let Some(element) = element.dyn_ref::<HtmlElement>() {
            let result = element.style().set_property(property, value);
            log_failure("style.setProperty", result);
        }
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        let Some(root) = self.document.document_element() else {
            return ScrollMetrics::default();
        };
        // Quirks mode scrolls the body instead of the root element.
        let body_top = self.document.body().map_or(0, |body| body.scroll_top());
        let scroll_top = if body_top != 0 {
            body_top
        } else {
            root.scroll_top()
        };
        ScrollMetrics {
            scroll_top: f64::from(scroll_top),
            scroll_height: f64::from(root.scroll_height()),
            client_height: f64::from(root.client_height()),
        }
    }

    fn scroll_by(&self, element: &Element, left: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        element.scroll_by_with_scroll_to_options(&options);
    }

    fn create_element(&self, tag: &str, classes: &[&str]) -> Result<Element> {
        let element = self.document.create_element(tag).map_err(dom_error)?;
        element.set_class_name(&classes.join(" "));
        Ok(element)
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<()> {
        parent.append_child(child).map(|_| ()).map_err(dom_error)
    }
}

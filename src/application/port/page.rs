// SPDX-License-Identifier: MPL-2.0
//! Page (DOM) port definition.
//!
//! This module defines the [`Page`] trait the components use to read and
//! mutate the host document. The browser adapter lives in
//! `infrastructure::web`, the in-memory adapter in `infrastructure::memory`.
//!
//! # Design Notes
//!
//! - Methods take `&self`: the DOM is a shared, interior-mutable tree.
//! - Lookups return `Option`/empty `Vec`; a missing optional element is never
//!   an error. Only element creation can fail.
//! - Selectors are limited to comma lists, descendant combinators and
//!   compounds of a tag name plus class names (`div.gallery-item`).

use crate::domain::ui::ScrollMetrics;
use crate::error::Result;
use std::fmt::Debug;

/// Scroll animation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Port over the host document.
pub trait Page {
    /// Opaque element handle. Equality is element identity.
    type Element: Clone + PartialEq + Debug;

    /// First element in document order matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// All elements in document order matching `selector`.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// First descendant of `root` matching `selector`.
    fn query_in(&self, root: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// All descendants of `root` matching `selector`, in document order.
    fn query_all_in(&self, root: &Self::Element, selector: &str) -> Vec<Self::Element>;

    /// Nearest inclusive ancestor of `element` matching `selector`.
    fn closest(&self, element: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// The document body.
    fn body(&self) -> Option<Self::Element>;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    fn add_class(&self, element: &Self::Element, class: &str);

    fn remove_class(&self, element: &Self::Element, class: &str);

    /// Toggles `class`, returning whether it is now present.
    fn toggle_class(&self, element: &Self::Element, class: &str) -> bool;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    /// Resolved value of a CSS property (e.g. `background-image`).
    fn computed_style(&self, element: &Self::Element, property: &str) -> Option<String>;

    /// Sets an inline style property.
    fn set_style(&self, element: &Self::Element, property: &str, value: &str);

    fn set_text(&self, element: &Self::Element, text: &str);

    /// Current document scroll geometry.
    fn scroll_metrics(&self) -> ScrollMetrics;

    /// Scrolls `element` horizontally by `left` pixels.
    fn scroll_by(&self, element: &Self::Element, left: f64, behavior: ScrollBehavior);

    /// Creates a detached element with the given tag and classes.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses to create the element.
    fn create_element(&self, tag: &str, classes: &[&str]) -> Result<Self::Element>;

    /// Appends `child` as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the insertion.
    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<()>;
}

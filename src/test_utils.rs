// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and page fixtures.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot,
//! and builds the markup fragments the component tests share.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::application::port::Page;
use crate::infrastructure::memory::{MemoryPage, NodeId};

/// Default epsilon for f64 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F64_EPSILON: f64 = 1e-10;

/// One entry of a gallery fixture.
#[derive(Debug, Clone, Copy)]
pub enum Item<'a> {
    /// Image with a background URL and optional caption.
    Image(&'a str, Option<&'a str>),
    /// Image item whose `.gallery-image` child has no background image.
    Blank,
    /// Video item.
    Video,
}

/// Appends a gallery container (`gallery-grid` or `gallery-slider`) with
/// `items` to `parent`. Returns the container and the item elements.
pub fn add_gallery(
    page: &MemoryPage,
    parent: NodeId,
    container_class: &str,
    items: &[Item<'_>],
) -> (NodeId, Vec<NodeId>) {
    let grid = page.append(parent, "div", &[container_class]);
    let elements = items
        .iter()
        .map(|item| {
            let classes: &[&str] = match item {
                Item::Video => &["gallery-item", "video-item"],
                _ => &["gallery-item"],
            };
            let element = page.append(grid, "div", classes);
            let image = page.append(element, "div", &["gallery-image"]);
            match item {
                Item::Image(src, caption) => {
                    page.set_computed_style(image, "background-image", &format!("url(\"{src}\")"));
                    if let Some(caption) = caption {
                        page.set_attribute(&element, "data-caption", caption);
                    }
                }
                Item::Blank => page.set_computed_style(image, "background-image", "none"),
                Item::Video => {}
            }
            element
        })
        .collect();
    (grid, elements)
}

/// Appends `count` testimonials with matching dots and both arrows.
/// Returns (items, dots, prev, next).
pub fn add_carousel(
    page: &MemoryPage,
    count: usize,
    dot_count: usize,
) -> (Vec<NodeId>, Vec<NodeId>, NodeId, NodeId) {
    let section = page.append(page.body_id(), "section", &["testimonials"]);
    let items = (0..count)
        .map(|i| {
            let classes: &[&str] = if i == 0 {
                &["testimonial-item", "active"]
            } else {
                &["testimonial-item"]
            };
            page.append(section, "div", classes)
        })
        .collect();
    let dots = (0..dot_count)
        .map(|_| page.append(section, "span", &["dot"]))
        .collect();
    let prev = page.append(section, "button", &["prev-arrow"]);
    let next = page.append(section, "button", &["next-arrow"]);
    (items, dots, prev, next)
}

/// Index of the single element of `elements` carrying `active`.
pub fn active_index(page: &MemoryPage, elements: &[NodeId]) -> Option<usize> {
    let active: Vec<_> = elements
        .iter()
        .enumerate()
        .filter(|(_, el)| page.classes(**el).iter().any(|c| c == "active"))
        .map(|(i, _)| i)
        .collect();
    match active.as_slice() {
        [single] => Some(*single),
        _ => None,
    }
}

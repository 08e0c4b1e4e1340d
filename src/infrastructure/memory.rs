// SPDX-License-Identifier: MPL-2.0
//! In-memory document implementing the [`Page`] port.
//!
//! `MemoryPage` is a small element tree with classes, attributes, inline and
//! computed styles, text and horizontal scroll offsets. It backs the unit and
//! integration tests and the benches, and lets a page be scripted without a
//! browser.
//!
//! # Example
//!
//! ```
//! use page_lens::application::port::Page;
//! use page_lens::infrastructure::memory::MemoryPage;
//!
//! let page = MemoryPage::new();
//! let grid = page.append(page.body_id(), "div", &["gallery-grid"]);
//! let item = page.append(grid, "div", &["gallery-item"]);
//!
//! assert_eq!(page.closest(&item, ".gallery-grid, .gallery-slider"), Some(grid));
//! assert_eq!(page.query_all(".gallery-item"), vec![item]);
//! ```

use crate::application::port::{Page, ScrollBehavior};
use crate::domain::ui::ScrollMetrics;
use crate::error::Result;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// Handle of a node in a [`MemoryPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    inline_styles: BTreeMap<String, String>,
    computed_styles: BTreeMap<String, String>,
    text: String,
    scroll_left: f64,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A recorded `scroll_by` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCall {
    pub element: NodeId,
    pub left: f64,
    pub behavior: ScrollBehavior,
}

/// In-memory document. Node 0 is `html`, node 1 is `body`.
#[derive(Debug)]
pub struct MemoryPage {
    nodes: RefCell<Vec<Node>>,
    metrics: Cell<ScrollMetrics>,
    scroll_calls: RefCell<Vec<ScrollCall>>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    /// Creates a document containing only `html` and `body`.
    #[must_use]
    pub fn new() -> Self {
        let html = Node {
            tag: "html".to_string(),
            children: vec![NodeId(1)],
            ..Node::default()
        };
        let body = Node {
            tag: "body".to_string(),
            parent: Some(NodeId(0)),
            ..Node::default()
        };
        Self {
            nodes: RefCell::new(vec![html, body]),
            metrics: Cell::new(ScrollMetrics::default()),
            scroll_calls: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn body_id(&self) -> NodeId {
        NodeId(1)
    }

    /// Creates an element and appends it to `parent`.
    pub fn append(&self, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        let id = self.new_node(tag, classes);
        self.link(parent, id);
        id
    }

    /// Sets a value returned by [`Page::computed_style`], as a stylesheet would.
    pub fn set_computed_style(&self, element: NodeId, property: &str, value: &str) {
        self.with_node_mut(element, |node| {
            node.computed_styles
                .insert(property.to_string(), value.to_string());
        });
    }

    pub fn set_scroll_metrics(&self, metrics: ScrollMetrics) {
        self.metrics.set(metrics);
    }

    /// Inline style value, if set.
    #[must_use]
    pub fn style(&self, element: NodeId, property: &str) -> Option<String> {
        self.with_node(element, |node| node.inline_styles.get(property).cloned())
            .flatten()
    }

    #[must_use]
    pub fn text(&self, element: NodeId) -> String {
        self.with_node(element, |node| node.text.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn classes(&self, element: NodeId) -> Vec<String> {
        self.with_node(element, |node| node.classes.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn children(&self, element: NodeId) -> Vec<NodeId> {
        self.with_node(element, |node| node.children.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn tag(&self, element: NodeId) -> Option<String> {
        self.with_node(element, |node| node.tag.clone())
    }

    /// Accumulated horizontal scroll of `element`.
    #[must_use]
    pub fn scroll_left(&self, element: NodeId) -> f64 {
        self.with_node(element, |node| node.scroll_left)
            .unwrap_or_default()
    }

    /// All `scroll_by` calls in order.
    #[must_use]
    pub fn scroll_calls(&self) -> Vec<ScrollCall> {
        self.scroll_calls.borrow().clone()
    }

    fn new_node(&self, tag: &str, classes: &[&str]) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            classes: classes.iter().map(|c| (*c).to_string()).collect(),
            ..Node::default()
        });
        NodeId(nodes.len() - 1)
    }

    fn link(&self, parent: NodeId, child: NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(old_parent) = nodes[child.0].parent {
            nodes[old_parent.0].children.retain(|c| *c != child);
        }
        nodes[child.0].parent = Some(parent);
        nodes[parent.0].children.push(child);
    }

    fn with_node<R>(&self, id: NodeId, f: impl FnOnce(&Node) -> R) -> Option<R> {
        self.nodes.borrow().get(id.0).map(f)
    }

    fn with_node_mut(&self, id: NodeId, f: impl FnOnce(&mut Node)) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(id.0) {
            f(node);
        }
    }

    /// Descendants of `root` in document order, excluding `root`.
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = nodes[root.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    fn matches(&self, id: NodeId, selector: &SelectorList) -> bool {
        let nodes = self.nodes.borrow();
        selector.matches(&nodes, id)
    }
}

impl Page for MemoryPage {
    type Element = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.query_all_in(&NodeId(0), selector)
    }

    fn query_in(&self, root: &NodeId, selector: &str) -> Option<NodeId> {
        self.query_all_in(root, selector).into_iter().next()
    }

    fn query_all_in(&self, root: &NodeId, selector: &str) -> Vec<NodeId> {
        let selector = SelectorList::parse(selector);
        self.descendants(*root)
            .into_iter()
            .filter(|id| self.matches(*id, &selector))
            .collect()
    }

    fn closest(&self, element: &NodeId, selector: &str) -> Option<NodeId> {
        let selector = SelectorList::parse(selector);
        let mut current = Some(*element);
        while let Some(id) = current {
            if self.matches(id, &selector) {
                return Some(id);
            }
            current = self.with_node(id, |node| node.parent).flatten();
        }
        None
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.body_id())
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.with_node(*element, |node| node.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    fn add_class(&self, element: &NodeId, class: &str) {
        self.with_node_mut(*element, |node| {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        });
    }

    fn remove_class(&self, element: &NodeId, class: &str) {
        self.with_node_mut(*element, |node| node.classes.retain(|c| c != class));
    }

    fn toggle_class(&self, element: &NodeId, class: &str) -> bool {
        if self.has_class(element, class) {
            self.remove_class(element, class);
            false
        } else {
            self.add_class(element, class);
            self.has_class(element, class)
        }
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.with_node(*element, |node| node.attributes.get(name).cloned())
            .flatten()
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) {
        self.with_node_mut(*element, |node| {
            node.attributes.insert(name.to_string(), value.to_string());
        });
    }

    fn computed_style(&self, element: &NodeId, property: &str) -> Option<String> {
        self.with_node(*element, |node| {
            node.inline_styles
                .get(property)
                .or_else(|| node.computed_styles.get(property))
                .cloned()
        })
        .flatten()
    }

    fn set_style(&self, element: &NodeId, property: &str, value: &str) {
        self.with_node_mut(*element, |node| {
            node.inline_styles
                .insert(property.to_string(), value.to_string());
        });
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        self.with_node_mut(*element, |node| node.text = text.to_string());
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.metrics.get()
    }

    fn scroll_by(&self, element: &NodeId, left: f64, behavior: ScrollBehavior) {
        self.with_node_mut(*element, |node| node.scroll_left += left);
        self.scroll_calls.borrow_mut().push(ScrollCall {
            element: *element,
            left,
            behavior,
        });
    }

    fn create_element(&self, tag: &str, classes: &[&str]) -> Result<NodeId> {
        Ok(self.new_node(tag, classes))
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<()> {
        self.link(*parent, *child);
        Ok(())
    }
}

// =============================================================================
// Selector matching
// =============================================================================

/// `tag.class.class`
#[derive(Debug, Clone, Default)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(text: &str) -> Self {
        let mut parts = text.split('.');
        let tag = parts
            .next()
            .filter(|t| !t.is_empty() && *t != "*")
            .map(str::to_ascii_lowercase);
        let classes = parts
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        Self { tag, classes }
    }

    fn matches(&self, node: &Node) -> bool {
        self.tag.as_ref().map_or(true, |tag| *tag == node.tag)
            && self
                .classes
                .iter()
                .all(|class| node.classes.iter().any(|c| c == class))
    }
}

/// Compounds joined by descendant combinators.
#[derive(Debug, Clone)]
struct Complex(Vec<Compound>);

impl Complex {
    fn matches(&self, nodes: &[Node], id: NodeId) -> bool {
        let Some((last, ancestors)) = self.0.split_last() else {
            return false;
        };
        if !last.matches(&nodes[id.0]) {
            return false;
        }
        let mut current = nodes[id.0].parent;
        for compound in ancestors.iter().rev() {
            loop {
                let Some(candidate) = current else {
                    return false;
                };
                current = nodes[candidate.0].parent;
                if compound.matches(&nodes[candidate.0]) {
                    break;
                }
            }
        }
        true
    }
}

#[derive(Debug, Clone)]
struct SelectorList(Vec<Complex>);

impl SelectorList {
    fn parse(text: &str) -> Self {
        Self(
            text.split(',')
                .map(|complex| {
                    Complex(complex.split_whitespace().map(Compound::parse).collect())
                })
                .filter(|complex| !complex.0.is_empty())
                .collect(),
        )
    }

    fn matches(&self, nodes: &[Node], id: NodeId) -> bool {
        self.0.iter().any(|complex| complex.matches(nodes, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_all_returns_document_order() {
        let page = MemoryPage::new();
        let a = page.append(page.body_id(), "div", &["item"]);
        let nested = page.append(a, "div", &["item"]);
        let b = page.append(page.body_id(), "div", &["item"]);
        assert_eq!(page.query_all(".item"), vec![a, nested, b]);
    }

    #[test]
    fn tag_and_class_compound_selector() {
        let page = MemoryPage::new();
        let img = page.append(page.body_id(), "img", &["lightbox-content"]);
        page.append(page.body_id(), "div", &["lightbox-content"]);
        assert_eq!(page.query_all("img.lightbox-content"), vec![img]);
        assert_eq!(page.query("header"), None);
    }

    #[test]
    fn descendant_selector_requires_ancestor() {
        let page = MemoryPage::new();
        let links = page.append(page.body_id(), "ul", &["mobile-nav-links"]);
        let li = page.append(links, "li", &[]);
        let inside = page.append(li, "a", &[]);
        page.append(page.body_id(), "a", &[]);
        assert_eq!(page.query_all(".mobile-nav-links a"), vec![inside]);
    }

    #[test]
    fn query_in_excludes_root_and_outside_nodes() {
        let page = MemoryPage::new();
        let grid = page.append(page.body_id(), "div", &["gallery-item"]);
        let inner = page.append(grid, "div", &["gallery-item"]);
        page.append(page.body_id(), "div", &["gallery-item"]);
        assert_eq!(page.query_all_in(&grid, ".gallery-item"), vec![inner]);
    }

    #[test]
    fn closest_is_inclusive_and_honors_selector_lists() {
        let page = MemoryPage::new();
        let slider = page.append(page.body_id(), "div", &["gallery-slider"]);
        let item = page.append(slider, "div", &["gallery-item"]);
        assert_eq!(page.closest(&item, ".gallery-grid, .gallery-slider"), Some(slider));
        assert_eq!(page.closest(&item, ".gallery-item"), Some(item));
        assert_eq!(page.closest(&item, ".gallery-grid"), None);
    }

    #[test]
    fn class_operations() {
        let page = MemoryPage::new();
        let el = page.append(page.body_id(), "div", &[]);
        assert!(page.toggle_class(&el, "active"));
        assert!(page.has_class(&el, "active"));
        assert!(!page.toggle_class(&el, "active"));
        page.add_class(&el, "x");
        page.add_class(&el, "x");
        assert_eq!(page.classes(el), vec!["x".to_string()]);
    }

    #[test]
    fn inline_style_overrides_computed_style() {
        let page = MemoryPage::new();
        let el = page.append(page.body_id(), "div", &[]);
        page.set_computed_style(el, "opacity", "0.5");
        assert_eq!(page.computed_style(&el, "opacity").as_deref(), Some("0.5"));
        page.set_style(&el, "opacity", "1");
        assert_eq!(page.computed_style(&el, "opacity").as_deref(), Some("1"));
    }

    #[test]
    fn scroll_by_accumulates_and_records() {
        let page = MemoryPage::new();
        let track = page.append(page.body_id(), "div", &[]);
        page.scroll_by(&track, 320.0, ScrollBehavior::Smooth);
        page.scroll_by(&track, -100.0, ScrollBehavior::Smooth);
        assert!((page.scroll_left(track) - 220.0).abs() < f64::EPSILON);
        assert_eq!(page.scroll_calls().len(), 2);
    }

    #[test]
    fn append_child_moves_existing_node() {
        let page = MemoryPage::new();
        let a = page.append(page.body_id(), "div", &[]);
        let b = page.append(page.body_id(), "div", &[]);
        let child = page.append(a, "span", &[]);
        page.append_child(&b, &child).expect("append");
        assert!(page.children(a).is_empty());
        assert_eq!(page.children(b), vec![child]);
    }
}

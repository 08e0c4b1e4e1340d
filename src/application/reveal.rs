// SPDX-License-Identifier: MPL-2.0
//! Visibility-triggered fade-in of page sections.
//!
//! Sections are watched for the lifetime of the page. A section becomes
//! visible the first time it intersects and never reverts.

use crate::application::event::Binding;
use crate::application::port::Page;
use crate::application::selectors as sel;
use crate::domain::ui::RevealThreshold;

/// Options for the host's visibility watcher.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: RevealThreshold,
    /// CSS margin shorthand applied to the viewport.
    pub root_margin: String,
}

#[derive(Debug)]
pub struct RevealSections<E> {
    sections: Vec<E>,
    options: RevealOptions,
}

impl<E: Clone + PartialEq> RevealSections<E> {
    pub fn mount<P>(page: &P, options: RevealOptions) -> (Self, Vec<Binding<E>>)
    where
        P: Page<Element = E>,
    {
        let sections = page.query_all(sel::FADE_IN_SECTION);
        let bindings = sections
            .iter()
            .map(|section| Binding::Reveal {
                element: section.clone(),
            })
            .collect();
        (Self { sections, options }, bindings)
    }

    #[must_use]
    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Intersection change reported by the watcher.
    pub fn on_intersection<P>(&self, page: &P, element: &E, is_intersecting: bool)
    where
        P: Page<Element = E>,
    {
        if is_intersecting && self.sections.contains(element) {
            page.add_class(element, sel::VISIBLE_CLASS);
        }
    }
}

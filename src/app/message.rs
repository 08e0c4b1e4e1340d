// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the site.

use crate::application::event::{Key, Route};
use crate::application::port::Task;

/// Top-level messages consumed by `Site::update`. Hosts translate every DOM
/// event and fired timer into one of these, keeping a single update
/// entrypoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Message<E> {
    /// The window scrolled.
    Scrolled,
    /// A bound element was clicked.
    Clicked {
        route: Route,
        /// Element the listener is attached to.
        element: E,
        /// Element the click originated from.
        target: E,
    },
    /// A key was pressed anywhere in the document.
    KeyPressed(Key),
    /// A watched section's visibility changed.
    Intersected { element: E, is_intersecting: bool },
    /// A scheduled task came due.
    Timer(Task),
}

impl<E: Clone> Message<E> {
    /// Click whose target is the bound element itself.
    #[must_use]
    pub fn click(route: Route, element: E) -> Self {
        Message::Clicked {
            route,
            target: element.clone(),
            element,
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Mobile navigation menu.

use crate::application::event::{Binding, Route};
use crate::application::lightbox::set_page_scroll_locked;
use crate::application::port::Page;
use crate::application::selectors as sel;

/// Hamburger toggle for the mobile navigation overlay.
#[derive(Debug)]
pub struct MobileMenu<E> {
    hamburger: E,
    overlay: Option<E>,
}

impl<E: Clone> MobileMenu<E> {
    /// Returns `None` when the page has no hamburger button.
    pub fn mount<P>(page: &P) -> Option<(Self, Vec<Binding<E>>)>
    where
        P: Page<Element = E>,
    {
        let hamburger = page.query(sel::HAMBURGER)?;
        let overlay = page.query(sel::MOBILE_OVERLAY);

        let mut bindings = vec![Binding::click(hamburger.clone(), Route::MenuToggle)];
        bindings.extend(
            page.query_all(sel::MOBILE_LINKS)
                .into_iter()
                .map(|link| Binding::click(link, Route::MenuLink)),
        );

        Some((Self { hamburger, overlay }, bindings))
    }

    #[must_use]
    pub fn is_open<P>(&self, page: &P) -> bool
    where
        P: Page<Element = E>,
    {
        self.overlay
            .as_ref()
            .is_some_and(|overlay| page.has_class(overlay, sel::ACTIVE_CLASS))
    }

    pub fn toggle<P>(&self, page: &P)
    where
        P: Page<Element = E>,
    {
        page.toggle_class(&self.hamburger, sel::ACTIVE_CLASS);
        let open = self
            .overlay
            .as_ref()
            .is_some_and(|overlay| page.toggle_class(overlay, sel::ACTIVE_CLASS));
        set_page_scroll_locked(page, open);
        tracing::debug!(open, "mobile menu toggled");
    }

    pub fn close<P>(&self, page: &P)
    where
        P: Page<Element = E>,
    {
        page.remove_class(&self.hamburger, sel::ACTIVE_CLASS);
        if let Some(overlay) = &self.overlay {
            page.remove_class(overlay, sel::ACTIVE_CLASS);
        }
        set_page_scroll_locked(page, false);
    }

    pub fn handle_click<P>(&self, page: &P, route: Route)
    where
        P: Page<Element = E>,
    {
        match route {
            Route::MenuToggle => self.toggle(page),
            Route::MenuLink => self.close(page),
            _ => {}
        }
    }
}

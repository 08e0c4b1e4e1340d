// SPDX-License-Identifier: MPL-2.0
//! Scroll-reactive chrome: sticky header state and the reading progress bar.
//!
//! Both are pure functions of the current scroll metrics, recomputed on
//! every scroll event.

use crate::application::port::Page;
use crate::application::selectors as sel;
use crate::domain::ui::ScrollProgress;

#[derive(Debug)]
pub struct ScrollChrome<E> {
    header: Option<E>,
    progress: Option<E>,
    threshold_px: f64,
}

impl<E> ScrollChrome<E> {
    /// Finds the header and progress bar. Either may be absent.
    pub fn mount<P>(page: &P, threshold_px: f64) -> Self
    where
        P: Page<Element = E>,
    {
        Self {
            header: page.query(sel::HEADER),
            progress: page.query(sel::SCROLL_PROGRESS),
            threshold_px,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.progress.is_none()
    }

    pub fn on_scroll<P>(&self, page: &P) -> ScrollProgress
    where
        P: Page<Element = E>,
    {
        let metrics = page.scroll_metrics();

        if let Some(header) = &self.header {
            if metrics.scroll_top > self.threshold_px {
                page.add_class(header, sel::SCROLLED_CLASS);
            } else {
                page.remove_class(header, sel::SCROLLED_CLASS);
            }
        }

        let progress = ScrollProgress::from_metrics(metrics);
        if let Some(bar) = &self.progress {
            page.set_style(bar, "width", &progress.as_css_width());
        }
        progress
    }
}

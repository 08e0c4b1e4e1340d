// SPDX-License-Identifier: MPL-2.0
//! Horizontal gallery sliders.
//!
//! Each `.gallery-slider-wrapper` with a track and both controls scrolls its
//! track by a fixed step. Widgets are independent; clamping is left to the
//! browser's native scroll bounds.

use crate::application::event::{Binding, Route};
use crate::application::port::{Page, ScrollBehavior};
use crate::application::selectors as sel;
use crate::domain::ui::ScrollStep;

#[derive(Debug, Clone, PartialEq)]
struct SliderControls<E> {
    track: E,
}

#[derive(Debug)]
pub struct GallerySliders<E> {
    sliders: Vec<SliderControls<E>>,
    step: ScrollStep,
}

impl<E: Clone> GallerySliders<E> {
    pub fn mount<P>(page: &P, step: ScrollStep) -> (Self, Vec<Binding<E>>)
    where
        P: Page<Element = E>,
    {
        let mut sliders = Vec::new();
        let mut bindings = Vec::new();

        for wrapper in page.query_all(sel::SLIDER_WRAPPER) {
            let (Some(track), Some(prev), Some(next)) = (
                page.query_in(&wrapper, sel::SLIDER_TRACK),
                page.query_in(&wrapper, sel::SLIDER_PREV),
                page.query_in(&wrapper, sel::SLIDER_NEXT),
            ) else {
                tracing::debug!("incomplete gallery slider skipped");
                continue;
            };
            let index = sliders.len();
            bindings.push(Binding::click(prev, Route::SliderPrev(index)));
            bindings.push(Binding::click(next, Route::SliderNext(index)));
            sliders.push(SliderControls { track });
        }

        (Self { sliders, step }, bindings)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    pub fn handle_click<P>(&self, page: &P, route: Route)
    where
        P: Page<Element = E>,
    {
        let (index, direction) = match route {
            Route::SliderPrev(index) => (index, -1.0),
            Route::SliderNext(index) => (index, 1.0),
            _ => return,
        };
        if let Some(slider) = self.sliders.get(index) {
            let left = direction * self.step.px();
            page.scroll_by(&slider.track, left, ScrollBehavior::Smooth);
        }
    }
}

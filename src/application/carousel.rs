// SPDX-License-Identifier: MPL-2.0
//! Testimonial carousel.
//!
//! One testimonial is active at a time. The carousel auto-advances on a
//! repeating [`Task::AdvanceCarousel`]; any manual navigation (dot or arrow)
//! shows the chosen slide immediately and restarts the interval from zero.

use crate::application::event::{Binding, Route};
use crate::application::port::{Page, Scheduler, Task, TaskId};
use crate::application::selectors as sel;
use crate::domain::carousel::CarouselState;
use crate::domain::ui::CarouselInterval;

#[derive(Debug)]
pub struct TestimonialCarousel<E> {
    items: Vec<E>,
    dots: Vec<E>,
    state: CarouselState,
    interval: CarouselInterval,
    timer: Option<TaskId>,
}

impl<E: Clone + PartialEq> TestimonialCarousel<E> {
    /// Discovers testimonials, dots and arrows. Returns `None` when the page
    /// has no testimonials.
    pub fn mount<P>(page: &P, interval: CarouselInterval) -> Option<(Self, Vec<Binding<E>>)>
    where
        P: Page<Element = E>,
    {
        let items = page.query_all(sel::TESTIMONIAL);
        let state = CarouselState::new(items.len())?;
        let dots = page.query_all(sel::DOT);

        let mut bindings: Vec<_> = dots
            .iter()
            .enumerate()
            .map(|(index, dot)| Binding::click(dot.clone(), Route::CarouselDot(index)))
            .collect();
        if let Some(prev) = page.query(sel::CAROUSEL_PREV) {
            bindings.push(Binding::click(prev, Route::CarouselPrev));
        }
        if let Some(next) = page.query(sel::CAROUSEL_NEXT) {
            bindings.push(Binding::click(next, Route::CarouselNext));
        }

        Some((
            Self {
                items,
                dots,
                state,
                interval,
                timer: None,
            },
            bindings,
        ))
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.state.current()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Starts (or restarts) the auto-advance interval.
    pub fn start<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(timer) = self.timer.take() {
            scheduler.cancel(timer);
        }
        let interval = self.interval.as_duration();
        self.timer = Some(scheduler.schedule_repeating(interval, Task::AdvanceCarousel));
    }

    /// Stops the auto-advance interval.
    pub fn stop<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(timer) = self.timer.take() {
            scheduler.cancel(timer);
        }
    }

    /// Auto-advance tick.
    pub fn advance<P>(&mut self, page: &P)
    where
        P: Page<Element = E>,
    {
        let index = self.state.advance();
        self.show(page, index);
    }

    /// Dot selection: shows `index` and restarts the interval.
    pub fn select<P, S>(&mut self, page: &P, scheduler: &mut S, index: usize)
    where
        P: Page<Element = E>,
        S: Scheduler,
    {
        if let Some(index) = self.state.select(index) {
            self.show(page, index);
            self.start(scheduler);
        }
    }

    /// Next arrow.
    pub fn next<P, S>(&mut self, page: &P, scheduler: &mut S)
    where
        P: Page<Element = E>,
        S: Scheduler,
    {
        self.advance(page);
        self.start(scheduler);
    }

    /// Previous arrow.
    pub fn prev<P, S>(&mut self, page: &P, scheduler: &mut S)
    where
        P: Page<Element = E>,
        S: Scheduler,
    {
        let index = self.state.retreat();
        self.show(page, index);
        self.start(scheduler);
    }

    pub fn handle_click<P, S>(&mut self, page: &P, scheduler: &mut S, route: Route)
    where
        P: Page<Element = E>,
        S: Scheduler,
    {
        match route {
            Route::CarouselDot(index) => self.select(page, scheduler, index),
            Route::CarouselPrev => self.prev(page, scheduler),
            Route::CarouselNext => self.next(page, scheduler),
            _ => {}
        }
    }

    fn show<P>(&self, page: &P, index: usize)
    where
        P: Page<Element = E>,
    {
        for element in self.items.iter().chain(&self.dots) {
            page.remove_class(element, sel::ACTIVE_CLASS);
        }
        if let Some(item) = self.items.get(index) {
            page.add_class(item, sel::ACTIVE_CLASS);
        }
        if let Some(dot) = self.dots.get(index) {
            page.add_class(dot, sel::ACTIVE_CLASS);
        }
        tracing::debug!(index, "testimonial shown");
    }
}

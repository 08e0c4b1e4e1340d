// SPDX-License-Identifier: MPL-2.0
//! Scheduler port definition.
//!
//! Deferred work is modeled as [`Task`] values handed to a [`Scheduler`].
//! When a task is due the host feeds it back to the site as
//! `Message::Timer(task)`, so every state change still flows through the
//! single update entry point.

use crate::domain::gallery::LightboxFrame;
use std::time::Duration;

/// Handle of a scheduled task, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Work the site asks to run later.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// Auto-advance the testimonial carousel.
    AdvanceCarousel,
    /// Swap the faded-out lightbox image to this frame and fade it back in.
    RevealLightboxFrame(LightboxFrame),
}

/// Port over the host timer facilities.
pub trait Scheduler {
    /// Runs `task` once after `delay`.
    fn schedule_once(&mut self, delay: Duration, task: Task) -> TaskId;

    /// Runs `task` every `interval`, first after one full interval.
    fn schedule_repeating(&mut self, interval: Duration, task: Task) -> TaskId;

    /// Cancels a pending task. Unknown or already fired ids are ignored.
    fn cancel(&mut self, id: TaskId);
}

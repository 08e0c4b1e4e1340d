// SPDX-License-Identifier: MPL-2.0
//! Virtual-clock scheduler.
//!
//! [`ManualScheduler`] implements the [`Scheduler`] port without real time:
//! tests advance the clock explicitly and receive the tasks that came due,
//! in due order (ties broken by scheduling order).

use crate::application::port::{Scheduler, Task, TaskId};
use std::time::Duration;

#[derive(Debug, Clone)]
struct Entry {
    id: TaskId,
    due: Duration,
    interval: Option<Duration>,
    task: Task,
}

/// Deterministic scheduler driven by [`advance`](Self::advance).
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of scheduled (not yet fired or cancelled) tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Time until the earliest pending task, if any.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.entries
            .iter()
            .map(|entry| entry.due.saturating_sub(self.now))
            .min()
    }

    /// Fires the earliest task due no later than `now + limit`.
    ///
    /// The clock moves to that task's due time. Returns `None` (clock
    /// untouched) when nothing is due within `limit`.
    pub fn pop_due(&mut self, limit: Duration) -> Option<Task> {
        let deadline = self.now + limit;
        let position = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= deadline)
            .min_by_key(|(_, entry)| (entry.due, entry.id))
            .map(|(position, _)| position)?;

        let due = self.entries[position].due;
        self.now = due;
        let task = self.entries[position].task.clone();
        match self.entries[position].interval {
            Some(interval) => self.entries[position].due = due + interval,
            None => {
                self.entries.remove(position);
            }
        }
        Some(task)
    }

    /// Advances the clock by `duration`, returning every task that fired.
    ///
    /// Tasks scheduled by the caller while handling the returned tasks are
    /// not included; use [`pop_due`](Self::pop_due) to interleave.
    pub fn advance(&mut self, duration: Duration) -> Vec<Task> {
        let deadline = self.now + duration;
        let mut fired = Vec::new();
        while let Some(task) = self.pop_due(deadline - self.now) {
            fired.push(task);
        }
        self.now = deadline;
        fired
    }

    fn push(&mut self, delay: Duration, interval: Option<Duration>, task: Task) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due: self.now + delay,
            interval,
            task,
        });
        id
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&mut self, delay: Duration, task: Task) -> TaskId {
        self.push(delay, None, task)
    }

    fn schedule_repeating(&mut self, interval: Duration, task: Task) -> TaskId {
        // A zero period would fire forever within a single advance.
        let interval = interval.max(Duration::from_millis(1));
        self.push(interval, Some(interval), task)
    }

    fn cancel(&mut self, id: TaskId) {
        self.entries.retain(|entry| entry.id != id);
    }
}

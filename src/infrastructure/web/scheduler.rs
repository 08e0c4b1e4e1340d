// SPDX-License-Identifier: MPL-2.0
//! Browser timers implementing the [`Scheduler`] port.
//!
//! One-shot tasks use `setTimeout`, repeating tasks `setInterval`. Fired
//! tasks are handed to the dispatcher supplied at construction, which feeds
//! them back into the site.

use crate::application::port::{Scheduler, Task, TaskId};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Receives fired tasks.
pub type Dispatcher = Rc<dyn Fn(TaskId, Task)>;

enum Handle {
    Timeout(i32),
    Interval {
        handle: i32,
        // Dropping the closure invalidates the JS callback.
        _callback: Closure<dyn FnMut()>,
    },
}

pub struct WebScheduler {
    window: Window,
    dispatch: Dispatcher,
    next_id: u64,
    handles: HashMap<TaskId, Handle>,
}

impl std::fmt::Debug for WebScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebScheduler")
            .field("next_id", &self.next_id)
            .field("pending", &self.handles.len())
            .finish_non_exhaustive()
    }
}

impl WebScheduler {
    #[must_use]
    pub fn new(window: Window, dispatch: Dispatcher) -> Self {
        Self {
            window,
            dispatch,
            next_id: 0,
            handles: HashMap::new(),
        }
    }

    /// Drops bookkeeping for a one-shot task that has fired.
    pub fn forget(&mut self, id: TaskId) {
        if matches!(self.handles.get(&id), Some(Handle::Timeout(_))) {
            self.handles.remove(&id);
        }
    }

    fn allocate(&mut self) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

fn millis(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}

impl Scheduler for WebScheduler {
    fn schedule_once(&mut self, delay: Duration, task: Task) -> TaskId {
        let id = self.allocate();
        let dispatch = Rc::clone(&self.dispatch);
        let callback = Closure::once_into_js(move || dispatch(id, task));
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                millis(delay),
            ) {
            Ok(handle) => {
                self.handles.insert(id, Handle::Timeout(handle));
            }
            Err(value) => {
                tracing::warn!(err = %super::page::dom_error(value), "setTimeout failed");
            }
        }
        id
    }

    fn schedule_repeating(&mut self, interval: Duration, task: Task) -> TaskId {
        let id = self.allocate();
        let dispatch = Rc::clone(&self.dispatch);
        let callback = Closure::<dyn FnMut()>::new(move || dispatch(id, task.clone()));
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis(interval),
            ) {
            Ok(handle) => {
                self.handles.insert(
                    id,
                    Handle::Interval {
                        handle,
                        _callback: callback,
                    },
                );
            }
            Err(value) => {
                tracing::warn!(err = %super::page::dom_error(value), "setInterval failed");
            }
        }
        id
    }

    fn cancel(&mut self, id: TaskId) {
        match self.handles.remove(&id) {
            Some(Handle::Timeout(handle)) => self.window.clear_timeout_with_handle(handle),
            Some(Handle::Interval { handle, .. }) => self.window.clear_interval_with_handle(handle),
            None => {}
        }
    }
}

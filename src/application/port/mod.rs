// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! The components only see these traits, so their behavior can be exercised
//! against an in-memory document and a virtual clock.
//!
//! # Available Ports
//!
//! - [`page`]: Document queries, class/style mutation and element creation
//! - [`scheduler`]: One-shot and repeating cancellable tasks
//!
//! # Design Notes
//!
//! - No `async fn`: deferred work is a [`Task`] value returned to the site
//!   through `Message::Timer`
//! - Nothing here is `Send`; the page runs on a single-threaded event loop

pub mod page;
pub mod scheduler;

// Re-export main types for convenience
pub use page::{Page, ScrollBehavior};
pub use scheduler::{Scheduler, Task, TaskId};

// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`memory`]: In-memory document (implements [`Page`])
//! - [`clock`]: Virtual-clock scheduler (implements [`Scheduler`])
//! - `web`: Browser document, timers, observer and logging over `web-sys`
//!   (feature `web`)
//!
//! [`Page`]: crate::application::port::Page
//! [`Scheduler`]: crate::application::port::Scheduler

pub mod clock;
pub mod memory;
#[cfg(feature = "web")]
pub mod web;

// Re-export main types for convenience
pub use clock::ManualScheduler;
pub use memory::MemoryPage;

// SPDX-License-Identifier: MPL-2.0
//! `page_lens` adds interactive behavior to a static marketing page: a
//! gallery lightbox with keyboard navigation, horizontal gallery sliders, an
//! auto-advancing testimonial carousel, a mobile menu, scroll-aware header
//! chrome and fade-in sections.
//!
//! The behavior is written against the [`application::port::Page`] and
//! [`application::port::Scheduler`] ports. The `web` feature provides the
//! browser implementation; [`infrastructure::memory::MemoryPage`] and
//! [`infrastructure::clock::ManualScheduler`] drive it in tests.

#![doc(html_root_url = "https://docs.rs/page_lens/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
mod test_utils;

pub use app::{Message, Site};
pub use error::{Error, Result};

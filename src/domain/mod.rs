// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core page logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and navigation
//! rules. It has no dependencies on external crates (except `std`) so the
//! index arithmetic can be tested without a browser.
//!
//! # Modules
//!
//! - [`carousel`]: Carousel index state ([`CarouselState`](carousel::CarouselState))
//! - [`gallery`]: Gallery items and lightbox navigation
//!   ([`GalleryItem`](gallery::GalleryItem), [`LightboxSession`](gallery::LightboxSession))
//! - [`ui`]: UI value objects ([`CarouselInterval`](ui::newtypes::CarouselInterval),
//!   [`ScrollProgress`](ui::newtypes::ScrollProgress))

pub mod carousel;
pub mod gallery;
pub mod ui;

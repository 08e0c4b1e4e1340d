// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Header**: Sticky header scroll threshold
//! - **Carousel**: Testimonial auto-advance interval
//! - **Lightbox**: Fade swap delay
//! - **Slider**: Gallery slider scroll step
//! - **Reveal**: Fade-in visibility watcher options

// ==========================================================================
// Header Defaults
// ==========================================================================

/// Vertical scroll offset (px) after which the header is marked `scrolled`.
pub const DEFAULT_HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default testimonial auto-advance interval (in milliseconds).
pub const DEFAULT_CAROUSEL_INTERVAL_MS: u32 = 5_000;

/// Minimum carousel interval (in milliseconds).
pub const MIN_CAROUSEL_INTERVAL_MS: u32 = 1_000;

/// Maximum carousel interval (in milliseconds).
pub const MAX_CAROUSEL_INTERVAL_MS: u32 = 60_000;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Delay between fading the lightbox image out and swapping its source.
pub const DEFAULT_FADE_DELAY_MS: u32 = 200;

/// Minimum fade delay (in milliseconds). Zero swaps on the next tick.
pub const MIN_FADE_DELAY_MS: u32 = 0;

/// Maximum fade delay (in milliseconds).
pub const MAX_FADE_DELAY_MS: u32 = 2_000;

// ==========================================================================
// Slider Defaults
// ==========================================================================

/// Horizontal scroll per slider click: card width (300) plus the grid gap.
pub const DEFAULT_SLIDER_SCROLL_STEP_PX: u32 = 320;

/// Minimum slider scroll step (px).
pub const MIN_SLIDER_SCROLL_STEP_PX: u32 = 1;

/// Maximum slider scroll step (px).
pub const MAX_SLIDER_SCROLL_STEP_PX: u32 = 4_000;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Fraction of a section that must intersect before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom root margin (px) of the visibility watcher. Negative shrinks the
/// viewport so sections reveal slightly after entering it.
pub const DEFAULT_REVEAL_BOTTOM_MARGIN_PX: i32 = -50;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Default maximum log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for page tunables and derived
//! values, ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_CAROUSEL_INTERVAL_MS, DEFAULT_FADE_DELAY_MS, DEFAULT_REVEAL_THRESHOLD,
    DEFAULT_SLIDER_SCROLL_STEP_PX, MAX_CAROUSEL_INTERVAL_MS, MAX_FADE_DELAY_MS,
    MAX_SLIDER_SCROLL_STEP_PX, MIN_CAROUSEL_INTERVAL_MS, MIN_FADE_DELAY_MS,
    MIN_SLIDER_SCROLL_STEP_PX,
};
use std::time::Duration;

// =============================================================================
// CarouselInterval
// =============================================================================

/// Testimonial auto-advance interval, clamped to 1–60 seconds.
///
/// # Example
///
/// ```
/// use page_lens::domain::ui::newtypes::CarouselInterval;
///
/// assert_eq!(CarouselInterval::new(5_000).as_millis(), 5_000);
/// assert_eq!(CarouselInterval::new(10).as_millis(), 1_000); // Clamped to min
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselInterval(u32);

impl CarouselInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(MIN_CAROUSEL_INTERVAL_MS, MAX_CAROUSEL_INTERVAL_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for CarouselInterval {
    fn default() -> Self {
        Self(DEFAULT_CAROUSEL_INTERVAL_MS)
    }
}

// =============================================================================
// FadeDelay
// =============================================================================

/// Delay between the lightbox fade-out and the source swap, clamped to 0–2 s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeDelay(u32);

impl FadeDelay {
    /// Creates a new fade delay, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(MIN_FADE_DELAY_MS, MAX_FADE_DELAY_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for FadeDelay {
    fn default() -> Self {
        Self(DEFAULT_FADE_DELAY_MS)
    }
}

// =============================================================================
// ScrollStep
// =============================================================================

/// Horizontal distance a gallery slider moves per control click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollStep(u32);

impl ScrollStep {
    /// Creates a new scroll step, clamping to the valid range.
    #[must_use]
    pub fn new(px: u32) -> Self {
        Self(px.clamp(MIN_SLIDER_SCROLL_STEP_PX, MAX_SLIDER_SCROLL_STEP_PX))
    }

    #[must_use]
    pub fn px(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for ScrollStep {
    fn default() -> Self {
        Self(DEFAULT_SLIDER_SCROLL_STEP_PX)
    }
}

// =============================================================================
// RevealThreshold
// =============================================================================

/// Intersection ratio needed to reveal a section, clamped to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealThreshold(f64);

impl RevealThreshold {
    /// Creates a new threshold. NaN falls back to the default.
    #[must_use]
    pub fn new(ratio: f64) -> Self {
        if ratio.is_nan() {
            return Self::default();
        }
        Self(ratio.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for RevealThreshold {
    fn default() -> Self {
        Self(DEFAULT_REVEAL_THRESHOLD)
    }
}

// =============================================================================
// ScrollMetrics / ScrollProgress
// =============================================================================

/// Document scroll geometry read on each scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset.
    pub scroll_top: f64,
    /// Total scrollable height of the document.
    pub scroll_height: f64,
    /// Visible viewport height.
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Maximum reachable `scroll_top`.
    #[must_use]
    pub fn scrollable_height(&self) -> f64 {
        self.scroll_height - self.client_height
    }
}

/// Read progress through the page, guaranteed to be within `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    /// Computes `scroll_top / (scroll_height - client_height) * 100`.
    ///
    /// A page that cannot scroll reports 0%.
    #[must_use]
    pub fn from_metrics(metrics: ScrollMetrics) -> Self {
        let scrollable = metrics.scrollable_height();
        if scrollable <= 0.0 || !scrollable.is_finite() {
            return Self(0.0);
        }
        let percent = metrics.scroll_top / scrollable * 100.0;
        if percent.is_nan() {
            return Self(0.0);
        }
        Self(percent.clamp(0.0, 100.0))
    }

    #[must_use]
    pub fn percent(self) -> f64 {
        self.0
    }

    /// CSS width value, e.g. `42.5%`.
    #[must_use]
    pub fn as_css_width(self) -> String {
        format!("{}%", self.0)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! This module handles the page enhancement configuration, loaded from TOML.
//!
//! # Configuration Sections
//!
//! - `[header]` - Sticky header threshold
//! - `[carousel]` - Testimonial auto-advance interval
//! - `[lightbox]` - Lightbox fade delay
//! - `[slider]` - Gallery slider scroll step
//! - `[reveal]` - Fade-in visibility watcher options
//! - `[logging]` - Maximum log level
//!
//! Every field is optional; missing fields fall back to [`defaults`].
//! In the browser the TOML text is read from the page itself, so
//! [`from_toml_str`] is the main entry point. The path based helpers exist
//! for tooling and tests.
//!
//! # Examples
//!
//! ```
//! use page_lens::config;
//!
//! let config = config::from_toml_str("[carousel]\ninterval_ms = 8000\n").unwrap();
//! assert_eq!(config.carousel.interval().as_millis(), 8000);
//! assert_eq!(config.lightbox.fade_delay().as_millis(), 200);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::ui::newtypes::{CarouselInterval, FadeDelay, RevealThreshold, ScrollStep};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// =============================================================================
// Section Structs
// =============================================================================

/// Sticky header settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeaderConfig {
    /// Scroll offset in pixels past which the header is marked `scrolled`.
    #[serde(default = "default_scroll_threshold_px")]
    pub scroll_threshold_px: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: DEFAULT_HEADER_SCROLL_THRESHOLD_PX,
        }
    }
}

/// Testimonial carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CarouselConfig {
    /// Auto-advance interval in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u32>,
}

impl CarouselConfig {
    #[must_use]
    pub fn interval(&self) -> CarouselInterval {
        self.interval_ms
            .map(CarouselInterval::new)
            .unwrap_or_default()
    }
}

/// Lightbox settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LightboxConfig {
    /// Delay in milliseconds between fade-out and source swap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_delay_ms: Option<u32>,
}

impl LightboxConfig {
    #[must_use]
    pub fn fade_delay(&self) -> FadeDelay {
        self.fade_delay_ms.map(FadeDelay::new).unwrap_or_default()
    }
}

/// Gallery slider settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SliderConfig {
    /// Horizontal scroll distance per control click, in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_step_px: Option<u32>,
}

impl SliderConfig {
    #[must_use]
    pub fn scroll_step(&self) -> ScrollStep {
        self.scroll_step_px.map(ScrollStep::new).unwrap_or_default()
    }
}

/// Fade-in section settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevealConfig {
    /// Intersection ratio required to reveal a section (0.0 to 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,

    /// Bottom root margin in pixels.
    #[serde(default = "default_bottom_margin_px")]
    pub bottom_margin_px: i32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: None,
            bottom_margin_px: DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
        }
    }
}

impl RevealConfig {
    #[must_use]
    pub fn threshold(&self) -> RevealThreshold {
        self.threshold.map(RevealThreshold::new).unwrap_or_default()
    }

    /// Root margin in CSS shorthand, e.g. `0px 0px -50px 0px`.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.bottom_margin_px)
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Maximum level: `error`, `warn`, `info`, `debug` or `trace`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub lightbox: LightboxConfig,
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_scroll_threshold_px() -> f64 {
    DEFAULT_HEADER_SCROLL_THRESHOLD_PX
}

fn default_bottom_margin_px() -> i32 {
    DEFAULT_REVEAL_BOTTOM_MARGIN_PX
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

// =============================================================================
// Load Functions
// =============================================================================

/// Parses configuration from TOML text.
///
/// # Errors
///
/// Returns [`Error::Config`] if the text is not valid TOML for [`Config`].
pub fn from_toml_str(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Parses configuration, falling back to defaults on invalid input.
///
/// Returns a tuple of (config, optional_warning), the warning carrying the
/// parse error when the defaults were used.
#[must_use]
pub fn load_or_default(content: Option<&str>) -> (Config, Option<String>) {
    match content.map(from_toml_str) {
        None => (Config::default(), None),
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (Config::default(), Some(err.to_string())),
    }
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    from_toml_str(&content)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

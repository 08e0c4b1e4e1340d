// SPDX-License-Identifier: MPL-2.0
//! Class names and selectors forming the markup contract with the page.

// =============================================================================
// Scroll chrome
// =============================================================================

pub const HEADER: &str = "header";
pub const SCROLL_PROGRESS: &str = ".scroll-progress";
pub const SCROLLED_CLASS: &str = "scrolled";

// =============================================================================
// Mobile menu
// =============================================================================

pub const HAMBURGER: &str = ".hamburger-menu";
pub const MOBILE_OVERLAY: &str = ".mobile-nav-overlay";
pub const MOBILE_LINKS: &str = ".mobile-nav-links a";

// =============================================================================
// Reveal
// =============================================================================

pub const FADE_IN_SECTION: &str = ".fade-in-section";
pub const VISIBLE_CLASS: &str = "is-visible";

// =============================================================================
// Carousel
// =============================================================================

pub const TESTIMONIAL: &str = ".testimonial-item";
pub const DOT: &str = ".dot";
pub const CAROUSEL_PREV: &str = ".prev-arrow";
pub const CAROUSEL_NEXT: &str = ".next-arrow";

// =============================================================================
// Gallery
// =============================================================================

pub const GALLERY_ITEM: &str = ".gallery-item";
pub const VIDEO_ITEM_CLASS: &str = "video-item";
pub const GALLERY_IMAGE: &str = ".gallery-image";
pub const GALLERY_CONTAINER: &str = ".gallery-grid, .gallery-slider";
pub const CAPTION_ATTRIBUTE: &str = "data-caption";

pub const SLIDER_WRAPPER: &str = ".gallery-slider-wrapper";
pub const SLIDER_TRACK: &str = ".gallery-slider";
pub const SLIDER_PREV: &str = ".slider-prev";
pub const SLIDER_NEXT: &str = ".slider-next";

// =============================================================================
// Lightbox (injected)
// =============================================================================

pub const LIGHTBOX_CLASS: &str = "lightbox";
pub const LIGHTBOX_CLOSE_CLASS: &str = "lightbox-close";
pub const LIGHTBOX_NAV_CLASS: &str = "lightbox-nav";
pub const LIGHTBOX_PREV_CLASS: &str = "lightbox-prev";
pub const LIGHTBOX_NEXT_CLASS: &str = "lightbox-next";
pub const LIGHTBOX_WRAPPER_CLASS: &str = "lightbox-content-wrapper";
pub const LIGHTBOX_IMAGE_CLASS: &str = "lightbox-content";
pub const LIGHTBOX_CAPTION_CLASS: &str = "lightbox-caption";
pub const LIGHTBOX_COUNTER_CLASS: &str = "lightbox-counter";

// =============================================================================
// Shared
// =============================================================================

pub const ACTIVE_CLASS: &str = "active";

// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: media items and lightbox navigation state.

pub mod session;
pub mod types;

pub use session::{LightboxFrame, LightboxSession};
pub use types::{parse_css_url, GalleryItem, MediaKind};

// SPDX-License-Identifier: MPL-2.0
//! Gallery item types for the domain layer.
//!
//! Items are materialized from existing page markup. The element handle type
//! is generic so the domain never depends on a concrete DOM binding.

/// Kind of media a gallery entry shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Static image, navigable in the lightbox.
    Image,
    /// Embedded video, never part of the lightbox navigable set.
    Video,
}

/// One media entry within a gallery grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem<E> {
    element: E,
    kind: MediaKind,
    source: Option<String>,
    caption: Option<String>,
}

impl<E> GalleryItem<E> {
    #[must_use]
    pub fn new(
        element: E,
        kind: MediaKind,
        source: Option<String>,
        caption: Option<String>,
    ) -> Self {
        Self {
            element,
            kind,
            source,
            caption,
        }
    }

    /// Handle of the element this item was read from.
    #[must_use]
    pub fn element(&self) -> &E {
        &self.element
    }

    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    #[must_use]
    pub fn is_image(&self) -> bool {
        self.kind == MediaKind::Image
    }

    /// Image URL, if the item has a resolvable background image.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Caption text, empty when the item has none.
    #[must_use]
    pub fn caption(&self) -> &str {
        self.caption.as_deref().unwrap_or_default()
    }
}

/// Extracts the URL from a computed `background-image` value.
///
/// Accepts `url("a.jpg")`, `url('a.jpg')` and `url(a.jpg)`. Returns `None`
/// for `none`, gradients and empty URLs.
///
/// # Example
///
/// ```
/// use page_lens::domain::gallery::parse_css_url;
///
/// assert_eq!(parse_css_url(r#"url("img/a.jpg")"#).as_deref(), Some("img/a.jpg"));
/// assert_eq!(parse_css_url("none"), None);
/// ```
#[must_use]
pub fn parse_css_url(background_image: &str) -> Option<String> {
    let inner = background_image
        .trim()
        .strip_prefix("url(")?
        .strip_suffix(')')?;
    let inner = inner.trim();
    let url = ['"', '\'']
        .iter()
        .find_map(|quote| inner.strip_prefix(*quote)?.strip_suffix(*quote))
        .unwrap_or(inner)
        .trim();
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}

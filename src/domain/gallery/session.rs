// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigation state.
//!
//! A session is the pure part of the lightbox: the snapshot of one grid's
//! image items and the index being shown. It knows nothing about rendering,
//! so wraparound and filtering rules can be tested in isolation.

use super::types::GalleryItem;

/// Everything the lightbox shows for one item, captured when it is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxFrame {
    /// Position in the session (0-indexed).
    pub index: usize,
    /// Image URL.
    pub source: String,
    /// Caption text, possibly empty.
    pub caption: String,
    /// Counter text, e.g. `"2 / 5"`.
    pub counter: String,
}

/// Transient lightbox state.
///
/// Invariant: `current_index < items.len()` whenever the session is active.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxSession<E> {
    items: Vec<GalleryItem<E>>,
    current_index: usize,
    active: bool,
}

impl<E> Default for LightboxSession<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_index: 0,
            active: false,
        }
    }
}

impl<E: PartialEq> LightboxSession<E> {
    /// Creates an inactive, empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session over `grid_items` positioned on `clicked`.
    ///
    /// Video items are dropped from the snapshot. Returns the clicked item's
    /// position in the filtered list, or `None` (leaving the session
    /// untouched) if the clicked element is not a navigable image.
    pub fn open(&mut self, grid_items: Vec<GalleryItem<E>>, clicked: &E) -> Option<usize> {
        let items: Vec<_> = grid_items
            .into_iter()
            .filter(GalleryItem::is_image)
            .collect();
        let index = items.iter().position(|item| item.element() == clicked)?;

        self.items = items;
        self.current_index = index;
        self.active = true;
        Some(index)
    }

    /// Moves to `index` if it is in bounds.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        if index >= self.items.len() {
            return None;
        }
        self.current_index = index;
        Some(index)
    }

    /// Advances with wraparound. Returns the new index, `None` if empty.
    pub fn next(&mut self) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        self.current_index = (self.current_index + 1) % len;
        Some(self.current_index)
    }

    /// Retreats with wraparound. Returns the new index, `None` if empty.
    pub fn prev(&mut self) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        self.current_index = (self.current_index + len - 1) % len;
        Some(self.current_index)
    }

    /// Resets to an inactive, empty session.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Index being shown, `None` while inactive.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.active.then_some(self.current_index)
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&GalleryItem<E>> {
        self.items.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Frame to display for `index`, `None` if out of bounds or the item has
    /// no image source.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<LightboxFrame> {
        let item = self.items.get(index)?;
        Some(LightboxFrame {
            index,
            source: item.source()?.to_string(),
            caption: item.caption().to_string(),
            counter: self.counter_label(index),
        })
    }

    /// Counter text for `index`, 1-indexed: `"3 / 7"`.
    #[must_use]
    pub fn counter_label(&self, index: usize) -> String {
        format!("{} / {}", index + 1, self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::MediaKind;

    fn image(id: u32) -> GalleryItem<u32> {
        GalleryItem::new(id, MediaKind::Image, Some(format!("{id}.jpg")), None)
    }

    fn video(id: u32) -> GalleryItem<u32> {
        GalleryItem::new(id, MediaKind::Video, None, None)
    }

    fn grid(len: u32) -> Vec<GalleryItem<u32>> {
        (0..len).map(image).collect()
    }

    #[test]
    fn new_session_is_inactive() {
        let session = LightboxSession::<u32>::new();
        assert!(!session.is_active());
        assert_eq!(session.current_index(), None);
        assert!(session.is_empty());
    }

    #[test]
    fn open_positions_on_clicked_item() {
        let mut session = LightboxSession::new();
        assert_eq!(session.open(grid(4), &2), Some(2));
        assert!(session.is_active());
        assert_eq!(session.current_index(), Some(2));
    }

    #[test]
    fn open_skips_videos_when_computing_position() {
        let mut session = LightboxSession::new();
        let items = vec![image(0), video(1), image(2), video(3), image(4)];
        assert_eq!(session.open(items, &4), Some(2));
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn open_on_video_is_noop() {
        let mut session = LightboxSession::new();
        let items = vec![image(0), video(1)];
        assert_eq!(session.open(items, &1), None);
        assert!(!session.is_active());
        assert!(session.is_empty());
    }

    #[test]
    fn open_on_foreign_element_is_noop() {
        let mut session = LightboxSession::new();
        assert_eq!(session.open(grid(3), &42), None);
        assert!(!session.is_active());
    }

    #[test]
    fn next_cycles_back_to_start_for_every_item() {
        for len in 1..=6 {
            for start in 0..len {
                let mut session = LightboxSession::new();
                session.open(grid(len), &start);
                for _ in 0..len {
                    session.next();
                }
                assert_eq!(session.current_index(), Some(start as usize));
            }
        }
    }

    #[test]
    fn prev_cycles_back_to_start_for_every_item() {
        for len in 1..=6 {
            for start in 0..len {
                let mut session = LightboxSession::new();
                session.open(grid(len), &start);
                for _ in 0..len {
                    session.prev();
                }
                assert_eq!(session.current_index(), Some(start as usize));
            }
        }
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let mut session = LightboxSession::new();
        session.open(grid(5), &0);
        assert_eq!(session.prev(), Some(4));
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut session = LightboxSession::new();
        session.open(grid(5), &4);
        assert_eq!(session.next(), Some(0));
    }

    #[test]
    fn single_item_stays_in_place() {
        let mut session = LightboxSession::new();
        session.open(grid(1), &0);
        assert_eq!(session.next(), Some(0));
        assert_eq!(session.prev(), Some(0));
    }

    #[test]
    fn navigation_on_empty_session_is_noop() {
        let mut session = LightboxSession::<u32>::new();
        assert_eq!(session.next(), None);
        assert_eq!(session.prev(), None);
        assert_eq!(session.go_to(0), None);
    }

    #[test]
    fn go_to_rejects_out_of_bounds() {
        let mut session = LightboxSession::new();
        session.open(grid(3), &1);
        assert_eq!(session.go_to(3), None);
        assert_eq!(session.current_index(), Some(1));
        assert_eq!(session.go_to(0), Some(0));
    }

    #[test]
    fn close_resets_session() {
        let mut session = LightboxSession::new();
        session.open(grid(3), &1);
        session.close();
        assert!(!session.is_active());
        assert!(session.is_empty());
        assert_eq!(session.next(), None);
    }

    #[test]
    fn frame_captures_source_caption_and_counter() {
        let mut session = LightboxSession::new();
        let items = vec![
            image(0),
            GalleryItem::new(
                1,
                MediaKind::Image,
                Some("b.jpg".into()),
                Some("Dunes".into()),
            ),
        ];
        session.open(items, &1);
        let frame = session.frame(1).expect("frame for image with source");
        assert_eq!(frame.source, "b.jpg");
        assert_eq!(frame.caption, "Dunes");
        assert_eq!(frame.counter, "2 / 2");
    }

    #[test]
    fn frame_is_none_without_source() {
        let mut session = LightboxSession::new();
        session.open(vec![GalleryItem::new(0, MediaKind::Image, None, None)], &0);
        assert_eq!(session.frame(0), None);
        assert_eq!(session.frame(5), None);
    }

    #[test]
    fn counter_label_is_one_indexed() {
        let mut session = LightboxSession::new();
        session.open(grid(7), &0);
        assert_eq!(session.counter_label(0), "1 / 7");
        assert_eq!(session.counter_label(6), "7 / 7");
    }
}

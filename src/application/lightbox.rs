// SPDX-License-Identifier: MPL-2.0
//! Gallery lightbox.
//!
//! [`GalleryNavigator`] injects one shared lightbox overlay into the page and
//! drives it from gallery item clicks, its own controls and the keyboard.
//! Navigation state lives in a [`LightboxSession`]; this module only turns
//! session changes into DOM writes and deferred fade swaps.
//!
//! # Rendering
//!
//! Showing an item is a two step fade: the image is set to `opacity: 0`
//! immediately and a [`Task::RevealLightboxFrame`] is scheduled after the fade
//! delay. When it fires the source, caption and counter are swapped and the
//! image fades back in. Only the latest fade is pending: rendering again or
//! closing cancels the previous one, so a closed lightbox never shows an
//! image and a reopened one never shows a frame from the closed session.

use crate::application::event::{Binding, Key, Propagation, Route};
use crate::application::port::{Page, Scheduler, Task, TaskId};
use crate::application::selectors as sel;
use crate::domain::gallery::{
    parse_css_url, GalleryItem, LightboxFrame, LightboxSession, MediaKind,
};
use crate::domain::ui::FadeDelay;
use crate::error::Result;

/// Handles to the injected lightbox subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxElements<E> {
    pub root: E,
    pub close: E,
    pub prev: E,
    pub next: E,
    pub image: E,
    pub caption: E,
    pub counter: E,
}

/// Lightbox component: open/close/navigate over one gallery grid at a time.
#[derive(Debug)]
pub struct GalleryNavigator<E> {
    elements: LightboxElements<E>,
    session: LightboxSession<E>,
    fade_delay: FadeDelay,
    pending_reveal: Option<TaskId>,
}

impl<E: Clone + PartialEq + std::fmt::Debug> GalleryNavigator<E> {
    /// Injects the lightbox into the body and binds every image gallery item.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is missing or the subtree cannot be
    /// created; the caller runs the page without a lightbox.
    pub fn install<P>(page: &P, fade_delay: FadeDelay) -> Result<(Self, Vec<Binding<E>>)>
    where
        P: Page<Element = E>,
    {
        let elements = build_lightbox(page)?;

        let mut bindings = vec![
            Binding::click(elements.close.clone(), Route::LightboxClose),
            Binding::click(elements.prev.clone(), Route::LightboxPrev),
            Binding::click(elements.next.clone(), Route::LightboxNext),
            Binding::click(elements.image.clone(), Route::LightboxImage),
            Binding::click(elements.root.clone(), Route::LightboxBackdrop),
        ];
        bindings.extend(
            page.query_all(sel::GALLERY_ITEM)
                .into_iter()
                .filter(|item| !page.has_class(item, sel::VIDEO_ITEM_CLASS))
                .map(|item| Binding::click(item, Route::GalleryItem)),
        );

        Ok((
            Self {
                elements,
                session: LightboxSession::new(),
                fade_delay,
                pending_reveal: None,
            },
            bindings,
        ))
    }

    #[must_use]
    pub fn elements(&self) -> &LightboxElements<E> {
        &self.elements
    }

    #[must_use]
    pub fn session(&self) -> &LightboxSession<E> {
        &self.session
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.session.current_index()
    }

    /// Opens the lightbox on `item`, scoped to its enclosing grid.
    ///
    /// Returns `false` (no-op) when the item has no grid or is not a
    /// navigable image.
    pub fn open<P, S>(&mut self, page: &P, scheduler: &mut S, item: &E) -> bool
    where
        P: Page<Element = E>,
        S: Scheduler,
    {
        let Some(grid) = page.closest(item, sel::GALLERY_CONTAINER) else {
            tracing::debug!("gallery item outside any grid, ignoring click");
            return false;
        };

        let items = page
            .query_all_in(&grid, sel::GALLERY_ITEM)
            .into_iter()
            .map(|element| read_item(page, element))
            .collect();

        let Some(index) = self.session.open(items, item) else {
            tracing::debug!("clicked item is not a navigable image");
            return false;
        };

        tracing::debug!(index, total = self.session.len(), "lightbox opened");
        self.render(page, scheduler, index);
        page.add_class(&self.elements.root, sel::ACTIVE_CLASS);
        set_page_scroll_locked(page, true);
        true
    }

    /// Shows item `index`, fading the image out and scheduling the swap.
    pub fn render<P, S>(&mut self, page: &P, scheduler: &mut S, index: usize)
    where
        P: Page<Element = E>,
        S: Scheduler,
    {
        if self.session.go_to(index).is_none() {
            return;
        }
        let Some(frame) = self.session.frame(index) else {
            tracing::debug!(index, "gallery item has no image source");
            return;
        };

        page.set_style(&self.elements.image, "display", "block");
        page.set_style(&self.elements.image, "opacity", "0");
        self.cancel_pending_reveal(scheduler);
        self.pending_reveal = Some(scheduler.schedule_once(
            self.fade_delay.as_duration(),
            Task::RevealLightboxFrame(frame),
        ));
    }

    fn cancel_pending_reveal<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(id) = self.pending_reveal.take() {
            scheduler.cancel(id);
        }
    }

    /// Completes a fade started by [`render`](Self::render).
    pub fn reveal<P>(&mut self, page: &P, frame: &LightboxFrame)
    where
        P: Page<Element = E>,
    {
        self.pending_reveal = None;
        if !self.session.is_active() {
            tracing::debug!(index = frame.index, "lightbox closed, dropping frame");
            return;
        }
        page.set_attribute(&self.elements.image, "src", &frame.source);
        page.set_text(&self.elements.caption, &frame.caption);
        page.set_text(&self.elements.counter, &frame.counter);
        page.set_style(&self.elements.image, "opacity", "1");
    }

    pub fn next<P, S>(&mut self, page: &P, scheduler: &mut S)
    where
        P: Page<Element = E>,
        S: Scheduler,
    {
        if let Some(index) = self.session.next() {
            self.render(page, scheduler, index);
        }
    }

    pub fn prev<P, S>(&mut self, page: &P, scheduler: &mut S)
    where
        P: Page<Element = E>,
        S: Scheduler,
    {
        if let Some(index) = self.session.prev() {
            self.render(page, scheduler, index);
        }
    }

    /// Hides the lightbox, restores page scrolling, clears the image and
    /// cancels any pending fade.
    pub fn close<P, S>(&mut self, page: &P, scheduler: &mut S)
    where
        P: Page<Element = E>,
        S: Scheduler,
    {
        self.cancel_pending_reveal(scheduler);
        self.session.close();
        page.remove_class(&self.elements.root, sel::ACTIVE_CLASS);
        set_page_scroll_locked(page, false);
        page.set_attribute(&self.elements.image, "src", "");
        tracing::debug!("lightbox closed");
    }

    /// Handles a click routed to the lightbox or a gallery item.
    pub fn handle_click<P, S>(
        &mut self,
        page: &P,
        scheduler: &mut S,
        route: Route,
        element: &E,
        target: &E,
    ) -> Propagation
    where
        P: Page<Element = E>,
        S: Scheduler,
    {
        match route {
            Route::GalleryItem => {
                self.open(page, scheduler, element);
                Propagation::Continue
            }
            Route::LightboxNext | Route::LightboxImage => {
                self.next(page, scheduler);
                Propagation::Stop
            }
            Route::LightboxPrev => {
                self.prev(page, scheduler);
                Propagation::Stop
            }
            Route::LightboxClose => {
                self.close(page, scheduler);
                Propagation::Continue
            }
            Route::LightboxBackdrop => {
                if *target == self.elements.root {
                    self.close(page, scheduler);
                }
                Propagation::Continue
            }
            _ => Propagation::Continue,
        }
    }

    /// Keyboard shortcuts, only while the lightbox is open.
    pub fn handle_key<P, S>(&mut self, page: &P, scheduler: &mut S, key: Key)
    where
        P: Page<Element = E>,
        S: Scheduler,
    {
        if !self.session.is_active() {
            return;
        }
        match key {
            Key::Escape => self.close(page, scheduler),
            Key::ArrowRight => self.next(page, scheduler),
            Key::ArrowLeft => self.prev(page, scheduler),
            Key::Other => {}
        }
    }
}

/// Materializes a [`GalleryItem`] from its element.
fn read_item<P: Page>(page: &P, element: P::Element) -> GalleryItem<P::Element> {
    let kind = if page.has_class(&element, sel::VIDEO_ITEM_CLASS) {
        MediaKind::Video
    } else {
        MediaKind::Image
    };
    let source = page
        .query_in(&element, sel::GALLERY_IMAGE)
        .and_then(|image| page.computed_style(&image, "background-image"))
        .and_then(|value| parse_css_url(&value));
    let caption = page.attribute(&element, sel::CAPTION_ATTRIBUTE);
    GalleryItem::new(element, kind, source, caption)
}

/// Locks or unlocks page scrolling through the body overflow.
pub(crate) fn set_page_scroll_locked<P: Page>(page: &P, locked: bool) {
    if let Some(body) = page.body() {
        page.set_style(&body, "overflow", if locked { "hidden" } else { "auto" });
    }
}

fn build_lightbox<P: Page>(page: &P) -> Result<LightboxElements<P::Element>> {
    let body = page
        .body()
        .ok_or_else(|| crate::error::Error::MissingElement("body".to_string()))?;

    let root = page.create_element("div", &[sel::LIGHTBOX_CLASS])?;

    let close = page.create_element("div", &[sel::LIGHTBOX_CLOSE_CLASS])?;
    append_icon(page, &close, "fa-times")?;
    let prev = page.create_element("div", &[sel::LIGHTBOX_NAV_CLASS, sel::LIGHTBOX_PREV_CLASS])?;
    append_icon(page, &prev, "fa-chevron-left")?;
    let next = page.create_element("div", &[sel::LIGHTBOX_NAV_CLASS, sel::LIGHTBOX_NEXT_CLASS])?;
    append_icon(page, &next, "fa-chevron-right")?;

    let wrapper = page.create_element("div", &[sel::LIGHTBOX_WRAPPER_CLASS])?;
    let image = page.create_element("img", &[sel::LIGHTBOX_IMAGE_CLASS])?;
    page.set_attribute(&image, "src", "");
    page.set_attribute(&image, "alt", "Enlarged gallery image");
    let caption = page.create_element("div", &[sel::LIGHTBOX_CAPTION_CLASS])?;
    let counter = page.create_element("div", &[sel::LIGHTBOX_COUNTER_CLASS])?;
    for child in [&image, &caption, &counter] {
        page.append_child(&wrapper, child)?;
    }

    for child in [&close, &prev, &next, &wrapper] {
        page.append_child(&root, child)?;
    }
    page.append_child(&body, &root)?;

    Ok(LightboxElements {
        root,
        close,
        prev,
        next,
        image,
        caption,
        counter,
    })
}

fn append_icon<P: Page>(page: &P, parent: &P::Element, icon: &str) -> Result<()> {
    let glyph = page.create_element("i", &["fas", icon])?;
    page.append_child(parent, &glyph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::ManualScheduler;
    use crate::infrastructure::memory::{MemoryPage, NodeId};
    use crate::test_utils::{add_gallery, Item};
    use std::time::Duration;

    struct Fixture {
        page: MemoryPage,
        scheduler: ManualScheduler,
        lightbox: GalleryNavigator<NodeId>,
        bindings: Vec<Binding<NodeId>>,
        items: Vec<NodeId>,
    }

    fn fixture(items: &[Item<'_>]) -> Fixture {
        let page = MemoryPage::new();
        let (_, elements) = add_gallery(&page, page.body_id(), "gallery-grid", items);
        let (lightbox, bindings) =
            GalleryNavigator::install(&page, FadeDelay::default()).expect("install lightbox");
        Fixture {
            page,
            scheduler: ManualScheduler::new(),
            lightbox,
            bindings,
            items: elements,
        }
    }

    impl Fixture {
        fn settle(&mut self) {
            for task in self.scheduler.advance(Duration::from_millis(200)) {
                if let Task::RevealLightboxFrame(frame) = task {
                    self.lightbox.reveal(&self.page, &frame);
                }
            }
        }

        fn image_src(&self) -> Option<String> {
            self.page.attribute(&self.lightbox.elements().image, "src")
        }
    }

    const THREE: [Item<'static>; 3] = [
        Item::Image("a.jpg", Some("First")),
        Item::Image("b.jpg", None),
        Item::Image("c.jpg", Some("Third")),
    ];

    #[test]
    fn install_injects_subtree_into_body() {
        let fx = fixture(&THREE);
        let root = fx.lightbox.elements().root;
        assert_eq!(fx.page.children(fx.page.body_id()).last(), Some(&root));
        assert_eq!(fx.page.query_all(".lightbox .lightbox-nav").len(), 2);
        assert_eq!(fx.page.query_all(".lightbox i.fas").len(), 3);
        assert_eq!(
            fx.page.query("img.lightbox-content"),
            Some(fx.lightbox.elements().image)
        );
    }

    #[test]
    fn install_binds_only_image_items() {
        let fx = fixture(&[Item::Image("a.jpg", None), Item::Video]);
        let item_bindings: Vec<_> = fx
            .bindings
            .iter()
            .filter(|b| b.route() == Some(Route::GalleryItem))
            .map(|b| *b.element())
            .collect();
        assert_eq!(item_bindings, vec![fx.items[0]]);
    }

    #[test]
    fn open_activates_and_locks_scroll() {
        let mut fx = fixture(&THREE);
        let item = fx.items[1];
        assert!(fx.lightbox.open(&fx.page, &mut fx.scheduler, &item));
        assert_eq!(fx.lightbox.current_index(), Some(1));
        assert!(fx.page.has_class(&fx.lightbox.elements().root, "active"));
        assert_eq!(
            fx.page.style(fx.page.body_id(), "overflow").as_deref(),
            Some("hidden")
        );
    }

    #[test]
    fn render_fades_then_swaps_after_delay() {
        let mut fx = fixture(&THREE);
        let item = fx.items[0];
        fx.lightbox.open(&fx.page, &mut fx.scheduler, &item);
        let image = fx.lightbox.elements().image;

        assert_eq!(fx.page.style(image, "opacity").as_deref(), Some("0"));
        assert_eq!(fx.page.style(image, "display").as_deref(), Some("block"));
        assert_eq!(fx.image_src().as_deref(), Some(""));

        assert!(fx.scheduler.advance(Duration::from_millis(199)).is_empty());
        fx.settle();

        assert_eq!(fx.image_src().as_deref(), Some("a.jpg"));
        assert_eq!(fx.page.style(image, "opacity").as_deref(), Some("1"));
        assert_eq!(fx.page.text(fx.lightbox.elements().caption), "First");
        assert_eq!(fx.page.text(fx.lightbox.elements().counter), "1 / 3");
    }

    #[test]
    fn caption_is_cleared_for_items_without_one() {
        let mut fx = fixture(&THREE);
        let item = fx.items[0];
        fx.lightbox.open(&fx.page, &mut fx.scheduler, &item);
        fx.settle();
        fx.lightbox.next(&fx.page, &mut fx.scheduler);
        fx.settle();
        assert_eq!(fx.page.text(fx.lightbox.elements().caption), "");
        assert_eq!(fx.page.text(fx.lightbox.elements().counter), "2 / 3");
    }

    #[test]
    fn open_on_video_item_is_noop() {
        let mut fx = fixture(&[Item::Image("a.jpg", None), Item::Video]);
        let video = fx.items[1];
        assert!(!fx.lightbox.open(&fx.page, &mut fx.scheduler, &video));
        assert!(!fx.lightbox.is_active());
        assert_eq!(fx.scheduler.pending(), 0);
        assert_eq!(fx.page.style(fx.page.body_id(), "overflow"), None);
    }

    #[test]
    fn open_outside_grid_is_noop() {
        let mut fx = fixture(&THREE);
        let stray = fx.page.append(fx.page.body_id(), "div", &["gallery-item"]);
        assert!(!fx.lightbox.open(&fx.page, &mut fx.scheduler, &stray));
        assert!(!fx.lightbox.is_active());
    }

    #[test]
    fn navigation_is_scoped_to_clicked_grid() {
        let page = MemoryPage::new();
        let (_, first) = add_gallery(&page, page.body_id(), "gallery-grid", &THREE);
        let (_, second) = add_gallery(
            &page,
            page.body_id(),
            "gallery-slider",
            &[Item::Image("x.jpg", None), Item::Image("y.jpg", None)],
        );
        let (mut lightbox, _) =
            GalleryNavigator::install(&page, FadeDelay::new(0)).expect("install");
        let mut scheduler = ManualScheduler::new();

        lightbox.open(&page, &mut scheduler, &second[1]);
        assert_eq!(lightbox.session().len(), 2);
        lightbox.next(&page, &mut scheduler);
        assert_eq!(lightbox.current_index(), Some(0));
        assert_eq!(
            lightbox.session().item(0).map(GalleryItem::element),
            Some(&second[0])
        );
        assert!((0..lightbox.session().len())
            .filter_map(|i| lightbox.session().item(i))
            .all(|item| !first.contains(item.element())));
    }

    #[test]
    fn keys_navigate_and_close_only_while_active() {
        let mut fx = fixture(&THREE);
        fx.lightbox.handle_key(&fx.page, &mut fx.scheduler, Key::ArrowRight);
        assert_eq!(fx.scheduler.pending(), 0);

        let item = fx.items[0];
        fx.lightbox.open(&fx.page, &mut fx.scheduler, &item);
        fx.lightbox.handle_key(&fx.page, &mut fx.scheduler, Key::ArrowLeft);
        assert_eq!(fx.lightbox.current_index(), Some(2));
        fx.lightbox.handle_key(&fx.page, &mut fx.scheduler, Key::ArrowRight);
        assert_eq!(fx.lightbox.current_index(), Some(0));
        fx.lightbox.handle_key(&fx.page, &mut fx.scheduler, Key::Other);
        assert_eq!(fx.lightbox.current_index(), Some(0));
        fx.lightbox.handle_key(&fx.page, &mut fx.scheduler, Key::Escape);
        assert!(!fx.lightbox.is_active());
    }

    #[test]
    fn close_restores_scroll_and_clears_image() {
        let mut fx = fixture(&THREE);
        let item = fx.items[2];
        fx.lightbox.open(&fx.page, &mut fx.scheduler, &item);
        fx.settle();
        assert_eq!(fx.image_src().as_deref(), Some("c.jpg"));

        fx.lightbox.close(&fx.page, &mut fx.scheduler);
        assert!(!fx.lightbox.is_active());
        assert!(!fx.page.has_class(&fx.lightbox.elements().root, "active"));
        assert_eq!(
            fx.page.style(fx.page.body_id(), "overflow").as_deref(),
            Some("auto")
        );
        assert_eq!(fx.image_src().as_deref(), Some(""));
    }

    #[test]
    fn reveal_after_close_is_dropped() {
        let mut fx = fixture(&THREE);
        let item = fx.items[1];
        fx.lightbox.open(&fx.page, &mut fx.scheduler, &item);
        fx.lightbox.close(&fx.page, &mut fx.scheduler);
        fx.settle();
        assert_eq!(fx.image_src().as_deref(), Some(""));
    }

    #[test]
    fn reopening_within_fade_delay_shows_only_new_frame() {
        let mut fx = fixture(&THREE);
        let (first, second) = (fx.items[0], fx.items[2]);
        fx.lightbox.open(&fx.page, &mut fx.scheduler, &first);
        fx.scheduler.advance(Duration::from_millis(50));
        fx.lightbox.close(&fx.page, &mut fx.scheduler);
        fx.scheduler.advance(Duration::from_millis(50));
        fx.lightbox.open(&fx.page, &mut fx.scheduler, &second);
        assert_eq!(fx.scheduler.pending(), 1);

        // The closed session's fade would have been due here.
        let fired = fx.scheduler.advance(Duration::from_millis(100));
        assert!(fired.is_empty());
        assert_eq!(fx.image_src().as_deref(), Some(""));

        fx.settle();
        assert_eq!(fx.image_src().as_deref(), Some("c.jpg"));
        assert_eq!(fx.page.text(fx.lightbox.elements().counter), "3 / 3");
    }

    #[test]
    fn rapid_navigation_keeps_one_pending_fade() {
        let mut fx = fixture(&THREE);
        let item = fx.items[0];
        fx.lightbox.open(&fx.page, &mut fx.scheduler, &item);
        fx.lightbox.next(&fx.page, &mut fx.scheduler);
        fx.lightbox.next(&fx.page, &mut fx.scheduler);
        assert_eq!(fx.scheduler.pending(), 1);
        fx.settle();
        assert_eq!(fx.image_src().as_deref(), Some("c.jpg"));
    }

    #[test]
    fn backdrop_click_closes_only_when_target_is_root() {
        let mut fx = fixture(&THREE);
        let item = fx.items[0];
        let root = fx.lightbox.elements().root;
        let image = fx.lightbox.elements().image;
        fx.lightbox.open(&fx.page, &mut fx.scheduler, &item);

        let propagation = fx.lightbox.handle_click(
            &fx.page,
            &mut fx.scheduler,
            Route::LightboxBackdrop,
            &root,
            &image,
        );
        assert_eq!(propagation, Propagation::Continue);
        assert!(fx.lightbox.is_active());

        fx.lightbox.handle_click(
            &fx.page,
            &mut fx.scheduler,
            Route::LightboxBackdrop,
            &root,
            &root,
        );
        assert!(!fx.lightbox.is_active());
    }

    #[test]
    fn nav_and_image_clicks_stop_propagation() {
        let mut fx = fixture(&THREE);
        let item = fx.items[0];
        let els = fx.lightbox.elements().clone();
        fx.lightbox.open(&fx.page, &mut fx.scheduler, &item);

        let stop = fx.lightbox.handle_click(
            &fx.page,
            &mut fx.scheduler,
            Route::LightboxImage,
            &els.image,
            &els.image,
        );
        assert_eq!(stop, Propagation::Stop);
        assert_eq!(fx.lightbox.current_index(), Some(1));

        let stop = fx.lightbox.handle_click(
            &fx.page,
            &mut fx.scheduler,
            Route::LightboxPrev,
            &els.prev,
            &els.prev,
        );
        assert_eq!(stop, Propagation::Stop);
        assert_eq!(fx.lightbox.current_index(), Some(0));
    }

    #[test]
    fn blank_item_updates_index_without_fade() {
        let mut fx = fixture(&[Item::Image("a.jpg", None), Item::Blank]);
        let item = fx.items[0];
        fx.lightbox.open(&fx.page, &mut fx.scheduler, &item);
        fx.settle();
        fx.lightbox.next(&fx.page, &mut fx.scheduler);
        assert_eq!(fx.lightbox.current_index(), Some(1));
        assert_eq!(fx.scheduler.pending(), 0);
        assert_eq!(fx.image_src().as_deref(), Some("a.jpg"));
    }

    #[test]
    fn snapshot_ignores_later_grid_mutation() {
        let page = MemoryPage::new();
        let (grid, items) = add_gallery(&page, page.body_id(), "gallery-grid", &THREE);
        let (mut lightbox, _) =
            GalleryNavigator::install(&page, FadeDelay::default()).expect("install");
        let mut scheduler = ManualScheduler::new();

        lightbox.open(&page, &mut scheduler, &items[0]);
        page.append(grid, "div", &["gallery-item"]);
        assert_eq!(lightbox.session().len(), 3);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Site composition root.
//!
//! [`Site`] owns one instance of every page component. It is mounted once
//! against a [`Page`] and then driven exclusively through
//! [`Site::update`], which routes each [`Message`] to the component that owns
//! the affected state. Components that find no markup to enhance are simply
//! absent.
//!
//! ```
//! use page_lens::app::{Message, Site};
//! use page_lens::config::Config;
//! use page_lens::infrastructure::clock::ManualScheduler;
//! use page_lens::infrastructure::memory::MemoryPage;
//! use page_lens::application::port::Page;
//!
//! let page = MemoryPage::new();
//! let header = page.append(page.body_id(), "header", &[]);
//! let mut scheduler = ManualScheduler::new();
//! let (mut site, _bindings) = Site::mount(&page, &mut scheduler, &Config::default());
//!
//! page.set_scroll_metrics(page_lens::domain::ui::ScrollMetrics {
//!     scroll_top: 120.0,
//!     scroll_height: 2_000.0,
//!     client_height: 800.0,
//! });
//! site.update(&page, &mut scheduler, Message::Scrolled);
//! assert!(page.has_class(&header, "scrolled"));
//! ```

mod message;

pub use message::Message;

use crate::application::carousel::TestimonialCarousel;
use crate::application::chrome::ScrollChrome;
use crate::application::event::{Binding, Propagation, Route};
use crate::application::lightbox::GalleryNavigator;
use crate::application::menu::MobileMenu;
use crate::application::port::{Page, Scheduler, Task};
use crate::application::reveal::{RevealOptions, RevealSections};
use crate::application::slider::GallerySliders;
use crate::config::Config;
use std::fmt::Debug;

/// Which features found markup to enhance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Features {
    pub scroll_chrome: bool,
    pub mobile_menu: bool,
    pub reveal_sections: usize,
    pub testimonials: usize,
    pub lightbox: bool,
    pub sliders: usize,
}

/// All page enhancements, owned in one place.
#[derive(Debug)]
pub struct Site<E> {
    chrome: ScrollChrome<E>,
    menu: Option<MobileMenu<E>>,
    reveal: RevealSections<E>,
    carousel: Option<TestimonialCarousel<E>>,
    lightbox: Option<GalleryNavigator<E>>,
    sliders: GallerySliders<E>,
}

impl<E: Clone + PartialEq + Debug> Site<E> {
    /// Discovers every component on `page`, starts the carousel and returns
    /// the listeners the host must attach.
    pub fn mount<P, S>(page: &P, scheduler: &mut S, config: &Config) -> (Self, Vec<Binding<E>>)
    where
        P: Page<Element = E>,
        S: Scheduler,
    {
        let mut bindings = Vec::new();

        let chrome = ScrollChrome::mount(page, config.header.scroll_threshold_px);

        let menu = MobileMenu::mount(page).map(|(menu, menu_bindings)| {
            bindings.extend(menu_bindings);
            menu
        });

        let (reveal, reveal_bindings) = RevealSections::mount(
            page,
            RevealOptions {
                threshold: config.reveal.threshold(),
                root_margin: config.reveal.root_margin(),
            },
        );
        bindings.extend(reveal_bindings);

        let carousel = TestimonialCarousel::mount(page, config.carousel.interval()).map(
            |(mut carousel, carousel_bindings)| {
                bindings.extend(carousel_bindings);
                carousel.start(scheduler);
                carousel
            },
        );

        let lightbox = match GalleryNavigator::install(page, config.lightbox.fade_delay()) {
            Ok((lightbox, lightbox_bindings)) => {
                bindings.extend(lightbox_bindings);
                Some(lightbox)
            }
            Err(err) => {
                tracing::warn!(%err, "lightbox disabled");
                None
            }
        };

        let (sliders, slider_bindings) = GallerySliders::mount(page, config.slider.scroll_step());
        bindings.extend(slider_bindings);

        let site = Self {
            chrome,
            menu,
            reveal,
            carousel,
            lightbox,
            sliders,
        };
        let features = site.features();
        tracing::info!(
            scroll_chrome = features.scroll_chrome,
            mobile_menu = features.mobile_menu,
            reveal_sections = features.reveal_sections,
            testimonials = features.testimonials,
            lightbox = features.lightbox,
            sliders = features.sliders,
            bindings = bindings.len(),
            "page enhancements mounted"
        );
        (site, bindings)
    }

    #[must_use]
    pub fn features(&self) -> Features {
        Features {
            scroll_chrome: !self.chrome.is_empty(),
            mobile_menu: self.menu.is_some(),
            reveal_sections: self.reveal.len(),
            testimonials: self.carousel.as_ref().map_or(0, TestimonialCarousel::len),
            lightbox: self.lightbox.is_some(),
            sliders: self.sliders.len(),
        }
    }

    /// Options the host's visibility watcher must use.
    #[must_use]
    pub fn reveal_options(&self) -> &RevealOptions {
        self.reveal.options()
    }

    #[must_use]
    pub fn lightbox(&self) -> Option<&GalleryNavigator<E>> {
        self.lightbox.as_ref()
    }

    #[must_use]
    pub fn carousel(&self) -> Option<&TestimonialCarousel<E>> {
        self.carousel.as_ref()
    }

    /// Single entry point for every event. Returns whether the host should
    /// stop the event from bubbling further.
    pub fn update<P, S>(&mut self, page: &P, scheduler: &mut S, message: Message<E>) -> Propagation
    where
        P: Page<Element = E>,
        S: Scheduler,
    {
        match message {
            Message::Scrolled => {
                self.chrome.on_scroll(page);
                Propagation::Continue
            }
            Message::Clicked {
                route,
                element,
                target,
            } => self.handle_click(page, scheduler, route, &element, &target),
            Message::KeyPressed(key) => {
                if let Some(lightbox) = &mut self.lightbox {
                    lightbox.handle_key(page, scheduler, key);
                }
                Propagation::Continue
            }
            Message::Intersected {
                element,
                is_intersecting,
            } => {
                self.reveal.on_intersection(page, &element, is_intersecting);
                Propagation::Continue
            }
            Message::Timer(task) => {
                self.handle_task(page, task);
                Propagation::Continue
            }
        }
    }

    fn handle_click<P, S>(
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
            Route::MenuToggle | Route::MenuLink => {
                if let Some(menu) = &self.menu {
                    menu.handle_click(page, route);
                }
                Propagation::Continue
            }
            Route::CarouselDot(_) | Route::CarouselPrev | Route::CarouselNext => {
                if let Some(carousel) = &mut self.carousel {
                    carousel.handle_click(page, scheduler, route);
                }
                Propagation::Continue
            }
            Route::GalleryItem
            | Route::LightboxPrev
            | Route::LightboxNext
            | Route::LightboxImage
            | Route::LightboxClose
            | Route::LightboxBackdrop => match &mut self.lightbox {
                Some(lightbox) => lightbox.handle_click(page, scheduler, route, element, target),
                None => Propagation::Continue,
            },
            Route::SliderPrev(_) | Route::SliderNext(_) => {
                self.sliders.handle_click(page, route);
                Propagation::Continue
            }
        }
    }

    fn handle_task<P>(&mut self, page: &P, task: Task)
    where
        P: Page<Element = E>,
    {
        match task {
            Task::AdvanceCarousel => {
                if let Some(carousel) = &mut self.carousel {
                    carousel.advance(page);
                } else {
                    tracing::warn!("carousel tick without a carousel");
                }
            }
            Task::RevealLightboxFrame(frame) => {
                if let Some(lightbox) = &mut self.lightbox {
                    lightbox.reveal(page, &frame);
                }
            }
        }
    }
}

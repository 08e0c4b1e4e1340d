// SPDX-License-Identifier: MPL-2.0
//! Event routing types shared by the components and the host adapters.
//!
//! Components never register listeners themselves. On mount they describe
//! what they need as [`Binding`]s; the host wires each one and, when it
//! fires, sends the [`Route`] back through `Site::update`.

/// What a click on a bound element means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    MenuToggle,
    MenuLink,
    CarouselDot(usize),
    CarouselPrev,
    CarouselNext,
    GalleryItem,
    LightboxPrev,
    LightboxNext,
    LightboxImage,
    LightboxClose,
    /// Click anywhere inside the lightbox root; closes only when the root
    /// itself is the event target.
    LightboxBackdrop,
    SliderPrev(usize),
    SliderNext(usize),
}

/// A listener the host must attach.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding<E> {
    /// Click listener on `element`.
    Click { element: E, route: Route },
    /// Visibility watch on `element`.
    Reveal { element: E },
}

impl<E> Binding<E> {
    #[must_use]
    pub fn click(element: E, route: Route) -> Self {
        Binding::Click { element, route }
    }

    #[must_use]
    pub fn element(&self) -> &E {
        match self {
            Binding::Click { element, .. } | Binding::Reveal { element } => element,
        }
    }

    #[must_use]
    pub fn route(&self) -> Option<Route> {
        match self {
            Binding::Click { route, .. } => Some(*route),
            Binding::Reveal { .. } => None,
        }
    }
}

/// Whether the host should let a handled event keep bubbling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    #[default]
    Continue,
    Stop,
}

/// Keys the site reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Maps a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

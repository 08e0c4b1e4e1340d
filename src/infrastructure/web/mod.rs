// SPDX-License-Identifier: MPL-2.0
//! Browser host: wires DOM events, timers and the visibility observer into
//! a mounted [`Site`].
//!
//! Listeners live for the lifetime of the page and are leaked with
//! `Closure::forget`. Every callback funnels into [`Runtime::update`]
//! through a shared `Rc<RefCell<_>>`.

pub mod logging;
pub mod page;
pub mod scheduler;

pub use page::WebPage;
pub use scheduler::WebScheduler;

use crate::app::{Message, Site};
use crate::application::event::{Binding, Key, Propagation, Route};
use crate::application::port::{Task, TaskId};
use crate::config::{self, Config};
use crate::error::Result;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent,
};

struct Runtime {
    site: Site<Element>,
    page: WebPage,
    scheduler: WebScheduler,
}

type Shared = Rc<RefCell<Runtime>>;

impl Runtime {
    fn update(&mut self, message: Message<Element>) -> Propagation {
        let Self {
            site,
            page,
            scheduler,
        } = self;
        site.update(&*page, scheduler, message)
    }

    fn on_timer(&mut self, id: TaskId, task: Task) {
        self.scheduler.forget(id);
        self.update(Message::Timer(task));
    }
}

fn dispatch(runtime: &Shared, message: Message<Element>) -> Propagation {
    match runtime.try_borrow_mut() {
        Ok(mut runtime) => runtime.update(message),
        Err(_) => {
            tracing::warn!(?message, "re-entrant event dropped");
            Propagation::Continue
        }
    }
}

fn fire_timer(runtime: &Weak<RefCell<Runtime>>, id: TaskId, task: Task) {
    let Some(runtime) = runtime.upgrade() else {
        return;
    };
    let borrowed = runtime.try_borrow_mut();
    match borrowed {
        Ok(mut runtime) => runtime.on_timer(id, task),
        Err(_) => tracing::warn!(?task, "re-entrant timer dropped"),
    };
}

/// Mounts the site and attaches every listener.
///
/// # Errors
///
/// Returns an error when a listener cannot be attached.
pub fn install(page: WebPage, config: &Config) -> Result<()> {
    let window = page.window().clone();
    let document = page.document().clone();
    let mut bindings = Vec::new();

    let runtime: Shared = Rc::new_cyclic(|weak: &Weak<RefCell<Runtime>>| {
        let weak = weak.clone();
        let mut scheduler = WebScheduler::new(
            window.clone(),
            Rc::new(move |id: TaskId, task: Task| fire_timer(&weak, id, task)),
        );
        let (site, site_bindings) = Site::mount(&page, &mut scheduler, config);
        bindings = site_bindings;
        RefCell::new(Runtime {
            site,
            page,
            scheduler,
        })
    });

    let mut reveal_targets = Vec::new();
    for binding in bindings {
        match binding {
            Binding::Click { element, route } => listen_click(&runtime, element, route)?,
            Binding::Reveal { element } => reveal_targets.push(element),
        }
    }
    if !reveal_targets.is_empty() {
        observe_sections(&runtime, &reveal_targets)?;
    }

    let scroll_runtime = Rc::clone(&runtime);
    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        dispatch(&scroll_runtime, Message::Scrolled);
    });
    window
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        .map_err(page::dom_error)?;
    on_scroll.forget();

    let key_runtime = Rc::clone(&runtime);
    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let key = Key::from_name(&event.key());
        if key != Key::Other {
            dispatch(&key_runtime, Message::KeyPressed(key));
        }
    });
    document
        .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
        .map_err(page::dom_error)?;
    on_key.forget();

    // Initial paint for pages loaded mid-scroll.
    dispatch(&runtime, Message::Scrolled);
    Ok(())
}

fn listen_click(runtime: &Shared, element: Element, route: Route) -> Result<()> {
    let runtime = Rc::clone(runtime);
    let bound = element.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .unwrap_or_else(|| bound.clone());
        let message = Message::Clicked {
            route,
            element: bound.clone(),
            target,
        };
        if dispatch(&runtime, message) == Propagation::Stop {
            event.stop_propagation();
        }
    });
    element
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(page::dom_error)?;
    on_click.forget();
    Ok(())
}

fn observe_sections(runtime: &Shared, sections: &[Element]) -> Result<()> {
    let options = runtime.borrow().site.reveal_options().clone();
    let runtime = Rc::clone(runtime);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                dispatch(
                    &runtime,
                    Message::Intersected {
                        element: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                    },
                );
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold.value()));
    init.set_root_margin(&options.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(page::dom_error)?;
    for section in sections {
        observer.observe(section);
    }
    callback.forget();
    Ok(())
}

fn boot() -> Result<()> {
    let page = WebPage::new()?;
    let (config, warning) = config::load_or_default(page.config_text().as_deref());
    logging::init_logging(&config.logging.level);
    if let Some(warning) = warning {
        tracing::warn!(%warning, "invalid embedded config, using defaults");
    }
    install(page, &config)
}

/// Module entry point. Waits for `DOMContentLoaded` when the document is
/// still parsing.
#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    let page = WebPage::new().map_err(|err| JsValue::from_str(&err.to_string()))?;
    let document = page.document().clone();

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(|| {
            if let Err(err) = boot() {
                web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }

    boot().map_err(|err| JsValue::from_str(&err.to_string()))
}

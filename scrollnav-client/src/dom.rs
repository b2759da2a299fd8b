use anyhow::{Context, anyhow};
use dioxus_logger::tracing::{debug, warn};
use scrollnav::{NavState, NavTarget, ScrollDirectionWatcher, WatcherConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, Window};

/// The page's navigation element, looked up once at install time.
pub struct DomNav {
    element: HtmlElement,
}

impl DomNav {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl NavTarget for DomNav {
    fn apply(&mut self, _state: NavState, top: &str) {
        if let Err(err) = self.element.style().set_property("top", top) {
            warn!("failed to set navigation top to {}: {:?}", top, err);
        }
    }
}

/// First element with the given tag, if any. Non-HTML elements are skipped the
/// same way a missing one is.
pub fn find_nav(document: &Document, tag: &str) -> Option<DomNav> {
    let element = document.get_elements_by_tag_name(tag).item(0)?;
    element.dyn_into::<HtmlElement>().ok().map(DomNav::new)
}

pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// A registered `scroll` listener driving a [`ScrollDirectionWatcher`].
///
/// Dropping the subscription removes the listener. Call [`forget`] to keep it
/// for the rest of the page's lifetime instead.
///
/// [`forget`]: ScrollSubscription::forget
pub struct ScrollSubscription {
    window: Window,
    closure: Option<Closure<dyn FnMut(Event)>>,
}

impl ScrollSubscription {
    pub fn install<T>(window: &Window, target: T, config: &WatcherConfig) -> anyhow::Result<Self>
    where
        T: NavTarget + 'static,
    {
        config.validate()?;

        let mut watcher = ScrollDirectionWatcher::with_config(scroll_offset(window), target, config);
        let win = window.clone();

        let closure = Closure::wrap(Box::new(move |_: Event| {
            watcher.on_scroll(scroll_offset(&win));
        }) as Box<dyn FnMut(Event)>);

        window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .map_err(|err| anyhow!("failed to add scroll listener: {:?}", err))?;

        debug!("scroll listener installed");

        Ok(Self {
            window: window.clone(),
            closure: Some(closure),
        })
    }

    /// Leaves the listener registered until the page unloads.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }

    pub fn teardown(self) {
        drop(self);
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            {
                warn!("failed to remove scroll listener: {:?}", err);
            }
            debug!("scroll listener removed");
        }
    }
}

/// Looks up the navigation element and keeps it in sync with scrolling for the
/// page's lifetime. A page without the element gets a listener that does
/// nothing.
pub fn attach_to_page(config: &WatcherConfig) -> anyhow::Result<()> {
    let window = web_sys::window().context("no global `window` exists")?;
    let document = window.document().context("window has no document")?;

    let nav = find_nav(&document, &config.nav_tag);
    if nav.is_none() {
        debug!("no <{}> element on this page, scrolling won't move anything", config.nav_tag);
    }

    ScrollSubscription::install(&window, nav, config)?.forget();
    Ok(())
}

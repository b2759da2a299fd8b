use crate::dom::ScrollSubscription;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use scrollnav::{NavState, NavTarget, WatcherConfig};
use std::cell::RefCell;
use std::rc::Rc;

/// Routes watcher updates into a signal so the nav re-renders itself.
struct SignalNav(Signal<NavState>);

impl NavTarget for SignalNav {
    fn apply(&mut self, state: NavState, _top: &str) {
        if *self.0.peek() != state {
            self.0.set(state);
        }
    }
}

/// Tracks whether the navigation bar should be visible. The scroll listener is
/// registered once when the component mounts and removed when it is dropped.
pub fn use_nav_autohide(config: WatcherConfig) -> Signal<NavState> {
    let state = use_signal(NavState::default);

    let subscription = use_hook(move || {
        let installed = web_sys::window().and_then(|win| {
            ScrollSubscription::install(&win, SignalNav(state), &config)
                .map_err(|err| warn!("navigation autohide disabled: {:#}", err))
                .ok()
        });
        Rc::new(RefCell::new(installed))
    });

    use_drop(move || {
        if let Some(subscription) = subscription.borrow_mut().take() {
            subscription.teardown();
        }
    });

    state
}

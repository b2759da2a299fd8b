use crate::hooks::use_nav_autohide;
use dioxus::prelude::*;
use scrollnav::WatcherConfig;

#[component]
pub fn Navigation(#[props(default)] config: WatcherConfig, children: Element) -> Element {
    let hidden_offset = config.hidden_offset;
    let nav_state = use_nav_autohide(config);

    // Auto-hide navigation on scroll down
    let top = nav_state().top_style(hidden_offset);

    rsx! {
        nav {
            style: "position: fixed; top: {top}; left: 0; right: 0; height: {hidden_offset}px; z-index: 50;",
            {children}
        }
    }
}

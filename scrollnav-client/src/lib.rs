mod components;
pub mod dom;
mod hooks;

use dioxus::prelude::*;
use dioxus_logger::tracing::{Level, info};
use scrollnav::WatcherConfig;
use wasm_bindgen::prelude::*;

pub use components::Navigation;
pub use hooks::use_nav_autohide;

#[component]
pub fn App() -> Element {
    rsx! {
        Navigation {
            div { style: "display: flex; align-items: center; height: 100%; padding: 0 24px; background: #111827; color: white;",
                "scrollnav"
            }
        }

        main { style: "padding-top: 96px;",
            for i in 0..200 {
                p { key: "{i}", style: "margin: 0 24px 16px;", "Line {i}" }
            }
        }
    }
}

pub fn launch() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

/// Entry point for server-rendered pages that ship their own `<nav>`.
///
/// `config` may be `undefined`, `null` or an object with any of `nav_tag` and
/// `hidden_offset`.
#[wasm_bindgen]
pub fn install_nav_autohide(config: JsValue) -> Result<(), JsValue> {
    // Another entry point may have set up logging already
    let _ = dioxus_logger::init(Level::INFO);

    let config: WatcherConfig = if config.is_undefined() || config.is_null() {
        WatcherConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };

    dom::attach_to_page(&config).map_err(|err| JsValue::from_str(&format!("{:#}", err)))?;
    info!("navigation autohide attached to <{}>", config.nav_tag);
    Ok(())
}

// Platform-independent core: everything here runs on the host as well as in wasm
pub mod config;
pub mod state;
pub mod target;
pub mod watcher;

pub use config::WatcherConfig;
pub use state::{NavState, ScrollDirection};
pub use target::NavTarget;
pub use watcher::ScrollDirectionWatcher;

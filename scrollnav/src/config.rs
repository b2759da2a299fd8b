use anyhow::ensure;
use serde::{Deserialize, Serialize};

/// Tag of the element toggled when none is configured.
pub const DEFAULT_NAV_TAG: &str = "nav";

/// Height of the navigation bar, in pixels. Hidden means `top: -80px`.
pub const DEFAULT_HIDDEN_OFFSET: f64 = 80.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatcherConfig {
    pub nav_tag: String,
    pub hidden_offset: f64,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            nav_tag: DEFAULT_NAV_TAG.to_string(),
            hidden_offset: DEFAULT_HIDDEN_OFFSET,
        }
    }
}

impl WatcherConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.nav_tag.trim().is_empty(), "nav_tag must not be empty");
        ensure!(
            self.hidden_offset.is_finite() && self.hidden_offset >= 0.0,
            "hidden_offset must be a finite, non-negative number of pixels, got {}",
            self.hidden_offset
        );
        Ok(())
    }
}

//! Tab bar appearance configuration.
//!
//! Every field is optional in JSON; missing keys take the defaults below.
//! ```json
//! {
//!   "paddingTop": 16,
//!   "activeColors": ["#111", "#222", "#333"],
//!   "activeBackgrounds": "#0EA5E9"
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ACTIVE_COLOR: &str = "#FFFFFF";
pub const DEFAULT_ACTIVE_BACKGROUND: &str = "#2563EB";
pub const DEFAULT_TINT_COLOR: &str = "#9CA3AF";
pub const DEFAULT_BACKGROUND: &str = "#111827";
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 50;
pub const DEFAULT_TRANSITION_MS: u64 = 240;

/// A color given once for every tab, or per tab index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    PerTab(Vec<String>),
}

impl ColorSpec {
    /// Color for tab `index`; per-tab lists fall back when `index` is out of range.
    pub fn resolve<'a>(&'a self, index: usize, fallback: &'a str) -> &'a str {
        match self {
            ColorSpec::Single(color) => color.as_str(),
            ColorSpec::PerTab(colors) => colors.get(index).map(String::as_str).unwrap_or(fallback),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid tab bar config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabBarConfig {
    /// Vertical padding inside the pill, in pixels.
    pub padding_vertical: f64,
    /// Distance from the top of the viewport, in pixels.
    pub padding_top: f64,
    /// Label/icon color of inactive tabs.
    pub tint_color: String,
    pub background: String,
    pub show_icon: bool,
    pub show_label: bool,
    pub active_colors: Option<ColorSpec>,
    pub active_backgrounds: Option<ColorSpec>,
    /// Delay before the one-shot post-mount measurement.
    pub settle_delay_ms: u64,
    /// Duration of the tab width animation (`--tab-bar-transition`).
    pub transition_ms: u64,
}

impl Default for TabBarConfig {
    fn default() -> Self {
        Self {
            padding_vertical: 10.0,
            padding_top: 24.0,
            tint_color: DEFAULT_TINT_COLOR.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            show_icon: true,
            show_label: true,
            active_colors: None,
            active_backgrounds: None,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl TabBarConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse `raw`, logging and falling back to defaults on error.
    pub fn from_json_or_default(raw: &str) -> Self {
        Self::from_json(raw).unwrap_or_else(|err| {
            tracing::warn!(%err, "using default tab bar config");
            Self::default()
        })
    }

    pub fn active_color(&self, index: usize) -> &str {
        resolve(self.active_colors.as_ref(), index, DEFAULT_ACTIVE_COLOR)
    }

    pub fn active_background(&self, index: usize) -> &str {
        resolve(self.active_backgrounds.as_ref(), index, DEFAULT_ACTIVE_BACKGROUND)
    }

    /// Delay of the measurement pass that follows a change of tab weights:
    /// the width animation has finished and layout has had time to settle.
    pub fn reflow_delay_ms(&self) -> u64 {
        self.transition_ms.saturating_add(self.settle_delay_ms)
    }

    /// Whether labels render. A tab with neither icon nor label would be an
    /// empty button, so labels are forced on when icons are off too.
    pub fn labels_visible(&self) -> bool {
        self.show_label || !self.show_icon
    }
}

fn resolve<'a>(spec: Option<&'a ColorSpec>, index: usize, fallback: &'a str) -> &'a str {
    spec.map(|s| s.resolve(index, fallback)).unwrap_or(fallback)
}

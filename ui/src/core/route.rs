//! Tab destinations supplied by the host.

use serde::{Deserialize, Serialize};

/// Symbol rendered inside a tab button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    Globe,
    Card,
    Megaphone,
    Message,
    Users,
}

/// A single selectable tab. Treated as immutable once handed to the tab bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub key: String,
    pub name: String,
    pub icon: Icon,
}

impl Route {
    pub fn new(key: impl Into<String>, name: impl Into<String>, icon: Icon) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            icon,
        }
    }
}

/// Fallback routes used when the host supplies none.
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::new("home", "Home", Icon::Home),
        Route::new("globe", "Globe", Icon::Globe),
        Route::new("card", "Card", Icon::Card),
    ]
}

//! Shared UI crate for SMS Desk. The tab bar, localization and the dashboard
//! pages live here; platform crates only add routing and launch glue.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    // Dashboard header with locale switcher (components/app_header.rs)
    pub mod app_header;
    pub use app_header::AppHeader;

    pub mod icons;
    pub use icons::TabIcon;

    // Floating tab bar (components/tab_bar.rs); state lives in core::tab_bar
    pub mod tab_bar;
    pub use tab_bar::TabBar;
}

pub use crate::core::config::{ColorSpec, TabBarConfig};
pub use crate::core::route::{default_routes, Icon, Route};

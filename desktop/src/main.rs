#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{AppHeader, TabBar};
use ui::dashboard::{self, dashboard_routes, section_index};
use ui::views::{Campaigns, Messages, Users};
use ui::TabBarConfig;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopDashboard)]
    #[route("/")]
    Campaigns {},
    #[route("/sms")]
    Messages {},
    #[route("/users")]
    Users {},
}

impl Route {
    fn section(&self) -> &'static str {
        match self {
            Route::Campaigns {} => dashboard::CAMPAIGNS,
            Route::Messages {} => dashboard::MESSAGES,
            Route::Users {} => dashboard::USERS,
        }
    }

    fn from_section(key: &str) -> Option<Self> {
        match key {
            dashboard::CAMPAIGNS => Some(Route::Campaigns {}),
            dashboard::MESSAGES => Some(Route::Messages {}),
            dashboard::USERS => Some(Route::Users {}),
            _ => None,
        }
    }
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

const TAB_BAR_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/tab_bar.json"
));

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("SMS Desk – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppHeader updates it on selection.
    // Seeded with whatever `init` negotiated from the OS / browser locale.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the ui crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout around the shared header and tab bar; the tab bar callback
/// navigates with the desktop-specific `Route` enum.
#[component]
fn DesktopDashboard() -> Element {
    let current = use_route::<Route>();
    let nav = navigator();
    let config = use_hook(|| TabBarConfig::from_json_or_default(TAB_BAR_JSON));

    // Re-localize tab labels when the language changes; the router (and the
    // current page) stays mounted.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|c| c()).unwrap_or_default();
    let routes = dashboard_routes();
    let initial_index = section_index(current.section()).unwrap_or(0);

    rsx! {
        div { class: "dashboard",
            AppHeader {}
            TabBar {
                config,
                routes,
                initial_index,
                on_select: move |picked: ui::Route| {
                    match Route::from_section(&picked.key) {
                        Some(target) => {
                            nav.push(target);
                        }
                        None => tracing::warn!(key = %picked.key, "tab without a page"),
                    }
                },
            }
            Outlet::<Route> {}
        }
    }
}

use dioxus::prelude::*;

use ui::components::{AppHeader, TabBar};
use ui::dashboard::{self, dashboard_routes, section_index};
use ui::views::{Campaigns, Messages, Users};
use ui::TabBarConfig;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebDashboard)]
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

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));
const TAB_BAR_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/tab_bar.json"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppHeader updates it on selection.
    // Seeded with whatever `init` negotiated from the OS / browser locale.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        // Shared theme lives in the ui crate; inline it rather than duplicating the file.
        document::Style { "{THEME_CSS}" }

        Router::<Route> {}
    }
}

/// Web layout: header, routed page and the floating tab bar, which needs the
/// web-specific `Route` enum to navigate.
#[component]
fn WebDashboard() -> Element {
    let current = use_route::<Route>();
    let nav = navigator();
    let config = use_hook(|| TabBarConfig::from_json_or_default(TAB_BAR_JSON));

    // Re-localize tab labels when the language changes.
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

use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;

// Header stylesheet (inlined too in release native builds, where assets are not served)
const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

/// Dashboard header: brand, tagline and the locale switcher.
///
/// Language changes are pushed into the `Signal<String>` context the platform
/// crate provides (if any), so every page subscribed to it re-renders with the
/// new bundle. Every render pulls fresh strings via `t!`.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Seeded from the app-wide code so a remounted header keeps the selection.
    let mut current_lang = use_signal(|| {
        lang_code_ctx
            .map(|c| c.peek().clone())
            .unwrap_or_else(i18n::current_language)
    });
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Reactive dependency on the global language code (if provided)
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();
    let selected = if _lang_marker.is_empty() {
        current_lang()
    } else {
        _lang_marker.clone()
    };

    #[cfg(debug_assertions)]
    {
        tracing::trace!(lang = %_lang_marker, "AppHeader render");
    }

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header {
            id: "app-header",
            class: "app-header",
            // Hidden marker ensures a re-render when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "app-header__inner",
                div { class: "app-header__brand",
                    span { class: "app-header__brand-mark", {t!("app-title")} }
                    span { class: "app-header__brand-subtitle", "{tagline}" }
                }

                if show_switcher {
                    div { class: "app-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{selected}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                let name = i18n::language_display_name(&c).to_string();
                                let is_selected = c == selected;
                                rsx!{
                                    option { key: "{c}", value: "{c}", selected: is_selected, "{name}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}

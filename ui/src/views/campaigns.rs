use dioxus::prelude::*;

#[cfg(debug_assertions)]
fn log_campaigns_render(lang: &str) {
    // Render trace for diagnosing i18n refresh issues.
    tracing::trace!(lang_marker = lang, "Campaigns render");
}

#[component]
pub fn Campaigns() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| crate::i18n::FALLBACK_LANGUAGE.to_string());

    #[cfg(debug_assertions)]
    {
        log_campaigns_render(&_lang_current);
    }

    rsx! {
        section { class: "page page-campaigns",
            h1 { {crate::t!("page-campaigns-title")} }
            p { {crate::t!("page-campaigns-intro")} }
        }
    }
}

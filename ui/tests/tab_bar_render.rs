//! Components rendered headless (no layout, no mount events) to check the
//! markup they produce before any measurement has run.

use dioxus::prelude::*;
use ui::components::{AppHeader, TabBar};
use ui::{ColorSpec, TabBarConfig};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn globe_selected() -> Element {
    rsx! {
        TabBar {
            initial_index: 1,
            config: TabBarConfig {
                active_colors: Some(ColorSpec::PerTab(vec!["#111111".into()])),
                ..TabBarConfig::default()
            },
        }
    }
}

#[test]
fn exactly_one_tab_is_marked_selected() {
    let html = render(globe_selected);
    assert_eq!(html.matches(r#"aria-selected="true""#).count(), 1, "{html}");
    assert_eq!(html.matches(r#"aria-selected="false""#).count(), 2, "{html}");
}

#[test]
fn active_tab_is_weighted_and_colored_with_fallback() {
    let html = render(globe_selected);
    // "Globe": 5 / 8 + 0.5; the per-tab list has no entry for index 1.
    assert!(html.contains("flex-grow: 1.125; color: #FFFFFF;"), "{html}");
    assert_eq!(html.matches("flex-grow: 1; color: #9CA3AF;").count(), 2, "{html}");
}

#[test]
fn highlight_starts_hidden_and_animation_length_is_exposed() {
    let html = render(globe_selected);
    assert!(html.contains(r#"class="tab-bar__dot""#), "{html}");
    assert!(!html.contains("tab-bar__dot--visible"), "{html}");
    assert!(html.contains("--tab-bar-transition: 240ms;"), "{html}");
}

fn header_in_bulgarian() -> Element {
    use_context_provider(|| Signal::new("bg-BG".to_string()));
    rsx! { AppHeader {} }
}

#[test]
fn header_shows_language_from_context() {
    let html = render(header_in_bulgarian);
    assert!(
        html.contains(r#"id="locale-select" value="bg-BG""#),
        "{html}"
    );
}

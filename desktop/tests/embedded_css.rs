#![cfg(test)]
//! The desktop build inlines the shared theme and the tab bar stylesheet in
//! release mode; a truncated or moved file would only show up at runtime.
//!
//! If a file is renamed, update both this test and the `include_str!`
//! constants in `desktop/src/main.rs` / `ui/src/components/tab_bar.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const TAB_BAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/tab_bar.css"
));

const TAB_BAR_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/tab_bar.json"
));

#[test]
fn embedded_css_files_are_not_empty() {
    assert!(!EMBEDDED_CSS.trim().is_empty(), "Embedded theme is empty.");
    assert!(!TAB_BAR_CSS.trim().is_empty(), "Tab bar stylesheet is empty.");
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", "--tab-bar-clearance", "body {", ".page {"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn bundled_tab_bar_config_parses() {
    let config = ui::TabBarConfig::from_json(TAB_BAR_JSON).expect("bundled config is valid JSON");
    assert!(config.padding_top > 0.0);
    assert_eq!(config.active_background(2), "#D97706");
    assert_eq!(config.active_background(9), ui::core::config::DEFAULT_ACTIVE_BACKGROUND);
}

use std::collections::{BTreeMap, BTreeSet};

/// Locale parity test.
///
/// Every non-fallback locale must define each message of the fallback
/// (en-US) `smsdesk-ui.ftl`, with the same `{ $variable }` placeholders.
///
/// The parser is deliberately small: comment lines (`#`), attributes (`.`)
/// and indented continuation lines are skipped; only single-line messages
/// are inspected for placeholders.
const EN_US: &str = include_str!("../i18n/en-US/smsdesk-ui.ftl");
const BG_BG: &str = include_str!("../i18n/bg-BG/smsdesk-ui.ftl");

/// Registered translations (add new locales here).
const LOCALES: &[(&str, &str)] = &[("bg-BG", BG_BG)];

/// Message id -> set of `$variables` used in its value.
fn messages(src: &str, locale: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for raw in src.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        let Some((left, value)) = line.split_once('=') else {
            continue;
        };
        let key = left.trim();
        if key.is_empty() || key.contains(char::is_whitespace) || key.starts_with('-') {
            continue;
        }
        if out.insert(key.to_string(), variables(value)).is_some() {
            panic!("Duplicate key `{key}` in {locale} (line: \"{raw}\")");
        }
    }
    out
}

fn variables(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .map(|rest| {
            rest.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback = messages(EN_US, "en-US");
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let translated = messages(src, locale);
        let missing: Vec<_> = fallback
            .keys()
            .filter(|k| !translated.contains_key(*k))
            .cloned()
            .collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.join("\n  ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
        failures.join("\n\n")
    );
}

#[test]
fn placeholders_match_fallback() {
    let fallback = messages(EN_US, "en-US");
    for (locale, src) in LOCALES {
        for (key, vars) in messages(src, locale) {
            if let Some(expected) = fallback.get(&key) {
                assert_eq!(
                    &vars, expected,
                    "Placeholder mismatch for `{key}` in {locale}"
                );
            }
        }
    }
}

#[test]
fn position_message_uses_index_and_total() {
    let fallback = messages(EN_US, "en-US");
    let vars = fallback.get("tab-bar-position").expect("tab-bar-position defined");
    assert!(vars.contains("index") && vars.contains("total"));
}

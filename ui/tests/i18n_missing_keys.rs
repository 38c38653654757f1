use std::collections::{BTreeMap, BTreeSet};

/// Every locale must define the fallback's keys and reference the same `{ $variables }`.
///
/// `fl!` only validates call sites against en-US, so a translation that drops or renames a
/// variable would otherwise render a raw placeholder at runtime.
#[test]
fn locales_match_fallback_keys_and_variables() {
    // (If you add a new locale, register it here.)
    const EN_US: &str = include_str!("../i18n/en-US/equipviz_ui.ftl");
    const ES_ES: &str = include_str!("../i18n/es-ES/equipviz_ui.ftl");

    let fallback = parse_messages(EN_US);
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");

    let locales: &[(&str, &str)] = &[("es-ES", ES_ES)];
    let mut failures = Vec::new();

    for (locale, src) in locales {
        let messages = parse_messages(src);
        for (key, vars) in &fallback {
            match messages.get(key) {
                None => failures.push(format!("{locale}: missing `{key}`")),
                Some(found) if found != vars => failures.push(format!(
                    "{locale}: `{key}` uses {found:?}, fallback uses {vars:?}"
                )),
                Some(_) => {}
            }
        }
    }

    assert!(
        failures.is_empty(),
        "Translation check failed:\n  {}",
        failures.join("\n  ")
    );
}

/// Single-line messages only: `key = pattern`. Duplicate keys fail immediately.
fn parse_messages(src: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut messages = BTreeMap::new();
    for line in src.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        let Some((key, pattern)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            continue;
        }
        let previous = messages.insert(key.to_string(), variables(pattern));
        assert!(previous.is_none(), "duplicate key `{key}`");
    }
    messages
}

fn variables(pattern: &str) -> BTreeSet<String> {
    pattern
        .split('$')
        .skip(1)
        .filter_map(|rest| {
            let name: String = rest
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect();
            (!name.is_empty()).then_some(name)
        })
        .collect()
}

#[test]
fn variable_extraction_reads_placeables() {
    let vars = variables(" Uploaded: { $name } | Total Rows: { $total }");
    assert_eq!(
        vars.into_iter().collect::<Vec<_>>(),
        ["name".to_string(), "total".to_string()]
    );
}

use std::collections::{BTreeSet, HashSet};

/// Every non-fallback locale must define at least the keys of `en-US/statscards-ui.ftl`.
///
/// Lightweight parser: comment lines (`#`), attributes (`.attr`) and blank
/// lines are skipped; any `key =` line is a message definition.
#[test]
fn all_locales_have_all_fallback_keys() {
    const EN_US: &str = include_str!("../i18n/en-US/statscards-ui.ftl");
    const RU_RU: &str = include_str!("../i18n/ru-RU/statscards-ui.ftl");

    let fallback_keys = extract_keys(EN_US);
    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");

    let locales: &[(&str, &str)] = &[("ru-RU", RU_RU)];

    let mut failures = Vec::new();
    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = fallback_keys.iter().filter(|k| !keys.contains(*k)).collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn placeholders_survive_translation() {
    const EN_US: &str = include_str!("../i18n/en-US/statscards-ui.ftl");
    const RU_RU: &str = include_str!("../i18n/ru-RU/statscards-ui.ftl");

    for key in ["toast-copy-failed"] {
        let en = message_line(EN_US, key).expect("key in fallback");
        let ru = message_line(RU_RU, key).expect("key in ru-RU");
        assert!(en.contains("{ $reason }") && ru.contains("{ $reason }"), "{key}");
    }
}

fn message_line<'a>(src: &'a str, key: &str) -> Option<&'a str> {
    src.lines()
        .map(str::trim)
        .find(|line| line.split('=').next().map(str::trim) == Some(key))
}

fn is_message_key(key: &str) -> bool {
    !key.is_empty()
        && !key.contains(' ')
        && !key.contains('\t')
        && !key.starts_with('[')
        && !key.starts_with('@')
}

fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if is_message_key(key) {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for raw in src.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if is_message_key(key) && !seen.insert(key.to_string()) {
                dups.insert(format!("{key}  (line: \"{raw}\")"));
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}

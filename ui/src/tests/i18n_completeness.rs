//! Every `t!("key")` used in this crate must resolve in the fallback locale.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FALLBACK_FTL: &str = include_str!("../../i18n/en-US/statscards-ui.ftl");

fn fallback_keys() -> BTreeSet<String> {
    FALLBACK_FTL
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, _)| key.trim().to_string())
        .filter(|key| !key.is_empty() && key.chars().all(valid_key_char))
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn rust_sources(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
            files.push(path);
        }
    }
    files
}

/// Literal first arguments of `t!(` invocations.
fn referenced_keys(source: &str) -> BTreeSet<String> {
    const NEEDLE: &str = concat!("t!", "(\"");
    source
        .match_indices(NEEDLE)
        .filter_map(|(pos, _)| {
            let rest = &source[pos + NEEDLE.len()..];
            let end = rest.find('"')?;
            let key = &rest[..end];
            key.chars().all(valid_key_char).then(|| key.to_string())
        })
        .collect()
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let known = fallback_keys();
    assert!(!known.is_empty(), "fallback FTL parsed to zero keys");

    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut missing = Vec::new();
    for file in rust_sources(&src_root) {
        let Ok(content) = fs::read_to_string(&file) else {
            continue;
        };
        for key in referenced_keys(&content) {
            if !known.contains(&key) {
                missing.push(format!("{key} ({})", file.display()));
            }
        }
    }

    assert!(
        missing.is_empty(),
        "translation keys missing from en-US:\n{}",
        missing.join("\n")
    );
}

#[test]
fn key_scanner_reads_literal_arguments() {
    let sample = concat!(
        "let a = t!", "(\"toast-copied\");\n",
        "let b = t!", "(\"toast-copy-failed\", reason = r);\n",
        "let c = t!", "(\"Not A Key\");\n",
    );
    let keys: Vec<String> = referenced_keys(sample).into_iter().collect();
    assert_eq!(keys, vec!["toast-copied", "toast-copy-failed"]);
}

//! Hygiene: scans `panel/src` for patterns that panic or swallow errors.
//!
//! Panels report failures through the notifier; production code must never
//! crash the caller or drop an error silently. Budgets are zero and stay zero.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, skipping `*_test.rs` and the test fakes.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        let is_test = path_str.ends_with("_test.rs") || path_str.ends_with("test_helpers.rs");
        if is_test || !path_str.ends_with(".rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn assert_absent(pattern: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the panel crate root");

    let hits: Vec<String> = files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| format!("  {}: {count}", file.path))
        })
        .collect();

    assert!(hits.is_empty(), "`{pattern}` found in production code:\n{}", hits.join("\n"));
}

#[test]
fn no_unwrap() {
    assert_absent(".unwrap()");
}

#[test]
fn no_expect() {
    assert_absent(".expect(");
}

#[test]
fn no_panicking_macros() {
    for pattern in ["panic!(", "unreachable!(", "todo!(", "unimplemented!("] {
        assert_absent(pattern);
    }
}

#[test]
fn no_silent_discard() {
    assert_absent("let _ =");
    assert_absent(".ok()");
}

#[test]
fn no_dead_code_allowances() {
    assert_absent("#[allow(dead_code)]");
}

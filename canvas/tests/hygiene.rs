//! Hygiene checks that enforce coding standards at test time
//!
//! Scans the canvas crate's production sources for patterns that crash the
//! process or swallow errors. Each pattern has a budget of zero; the budget
//! never grows.

use std::fs;
use std::path::Path;

/// `(pattern, budget, why it is banned)`
const RULES: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "crashes the process"),
    ("unreachable!(", 0, "crashes the process"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards a value without inspecting it"),
    (".ok()", 0, "discards the error"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn production_code_stays_within_hygiene_budgets() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under src/");

    let mut violations = Vec::new();
    for (pattern, budget, why) in RULES {
        let hits: Vec<(String, usize)> = files
            .iter()
            .map(|(path, content)| (path.clone(), content.lines().filter(|l| l.contains(pattern)).count()))
            .filter(|(_, count)| *count > 0)
            .collect();
        let total: usize = hits.iter().map(|(_, c)| c).sum();
        if total > *budget {
            let detail: Vec<String> = hits.iter().map(|(p, c)| format!("    {p}: {c}")).collect();
            violations.push(format!("{pattern} ({why}): found {total}, max {budget}\n{}", detail.join("\n")));
        }
    }
    assert!(violations.is_empty(), "hygiene budget exceeded:\n{}", violations.join("\n"));
}

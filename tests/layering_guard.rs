//! Layering guardrails for the workspace crates.
//!
//! `cminus_core` is the vocabulary leaf and must stay dependency-free; `cminus_syntax` must never
//! depend back on the root `cminus` crate.

/// Dependency names listed in the `[dependencies]` table of a manifest.
fn dependency_names(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_vocabulary_has_no_dependencies() {
    let manifest = include_str!("../crates/cminus_core/Cargo.toml");
    assert!(
        dependency_names(manifest).is_empty(),
        "`cminus_core` must not declare [dependencies]"
    );
}

#[test]
fn syntax_crate_does_not_depend_on_root_crate() {
    let manifest = include_str!("../crates/cminus_syntax/Cargo.toml");
    let names = dependency_names(manifest);
    assert!(names.iter().any(|n| n == "cminus_core"));
    assert!(
        !names.iter().any(|n| n == "cminus"),
        "`cminus_syntax` must not depend on the `cminus` crate"
    );
}

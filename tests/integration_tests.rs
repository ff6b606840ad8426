//! Integration tests for the C-minus front end

use std::fs;
use std::path::{Path, PathBuf};

use cminus::artifacts::Artifacts;
use cminus::cli::fixture_runner::{self, FixtureResult};
use cminus::config::OutputConfig;
use cminus::lexer::ScanOptions;
use cminus::parser;
use insta::assert_snapshot;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cminus_it_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

/// Every on-disk fixture matches the listings the front end produces.
#[test]
fn test_fixtures_match_expected_listings() {
    let fixtures = fixture_runner::discover_fixtures(&fixtures_dir());
    assert_eq!(fixtures.len(), 5);

    for fixture in &fixtures {
        match fixture_runner::run_fixture(&fixture.dir, &ScanOptions::default()) {
            FixtureResult::Passed(_) => {}
            other => panic!("fixture {} did not pass: {:?}", fixture.name, other),
        }
    }
}

#[test]
fn test_fixtures_are_discovered_in_path_order() {
    let names: Vec<String> = fixture_runner::discover_fixtures(&fixtures_dir())
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "01_clean_program",
            "02_lexical_errors",
            "03_missing_tokens",
            "04_unexpected_eof",
            "05_comments_and_break",
        ]
    );
}

#[test]
fn test_write_to_creates_all_five_files() {
    let out = scratch_dir("write");
    let config = OutputConfig::new().with_out_dir(out.join("nested"));
    let artifacts = Artifacts::compile("void main(void) { return; }", &config.scan);

    let written = artifacts.write_to(&config).unwrap();
    assert_eq!(written.len(), 5);
    for path in &written {
        assert!(path.is_file(), "missing {}", path.display());
    }

    assert_eq!(
        fs::read_to_string(config.path_for("syntax_errors.txt")).unwrap(),
        "No syntax errors found."
    );
    assert_eq!(
        fs::read_to_string(config.path_for("lexical_errors.txt")).unwrap(),
        "No lexical errors found.\n"
    );
    let tree = fs::read_to_string(config.path_for("parse_tree.txt")).unwrap();
    assert!(tree.starts_with("Program\n"));
    assert!(tree.ends_with("└── $"));

    let _ = fs::remove_dir_all(&out);
}

#[test]
fn test_write_to_reports_unwritable_directory() {
    let out = scratch_dir("blocked");
    fs::create_dir_all(&out).unwrap();
    let blocker = out.join("file");
    fs::write(&blocker, "not a directory").unwrap();

    let config = OutputConfig::new().with_out_dir(&blocker);
    let err = Artifacts::compile("", &config.scan).write_to(&config).unwrap_err();
    assert!(err.to_string().contains("cannot create output directory"));

    let _ = fs::remove_dir_all(&out);
}

#[test]
fn test_empty_input_parses_to_empty_declaration_list() {
    let artifacts = Artifacts::compile("", &ScanOptions::default());
    assert_eq!(artifacts.tokens, "");
    assert_eq!(artifacts.lexical_errors, "No lexical errors found.\n");
    assert_eq!(artifacts.syntax_errors, "No syntax errors found.");
    assert_eq!(artifacts.parse_tree, "Program\n├── Declaration-list\n│   └── epsilon\n└── $");
}

#[test]
fn test_parse_keeps_scanner_tables() {
    let outcome = parser::parse("int a; int b; int a;");
    let symbols: Vec<&str> = outcome.session.symbols.iter().collect();
    assert_eq!(symbols.iter().filter(|s| **s == "a").count(), 1);
    assert!(symbols.contains(&"b"));
    assert_eq!(outcome.session.tokens.len(), 9);
    assert_eq!(outcome.session.tokens.lines().count(), 1);
    assert!(outcome.syntax_errors.is_empty());
}

#[test]
fn test_comment_preview_option_reaches_listing() {
    let options = ScanOptions::new().with_comment_preview_len(2);
    let artifacts = Artifacts::compile("int x;\n/* abcdef", &options);
    assert_eq!(artifacts.lexical_errors, "2.\t(/*..., Open comment at EOF)\n");
}

#[test]
fn test_minimal_program_tree() {
    let artifacts = Artifacts::compile("void main(void) { }", &ScanOptions::default());
    assert_eq!(artifacts.syntax_errors, "No syntax errors found.");
    assert_snapshot!(artifacts.parse_tree, @r"
    Program
    ├── Declaration-list
    │   ├── Declaration
    │   │   ├── Declaration-initial
    │   │   │   ├── Type-specifier
    │   │   │   │   └── (KEYWORD, void)
    │   │   │   └── (ID, main)
    │   │   └── Declaration-prime
    │   │       └── Fun-declaration-prime
    │   │           ├── (SYMBOL, ()
    │   │           ├── Params
    │   │           │   └── (KEYWORD, void)
    │   │           ├── (SYMBOL, ))
    │   │           └── Compound-stmt
    │   │               ├── (SYMBOL, {)
    │   │               ├── Declaration-list
    │   │               │   └── epsilon
    │   │               ├── Statement-list
    │   │               │   └── epsilon
    │   │               └── (SYMBOL, })
    │   └── Declaration-list
    │       └── epsilon
    └── $
    ");
}

//! Property-based tests for the C-minus front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use cminus::artifacts::Artifacts;
use cminus::diagnostics::SyntaxErrorKind;
use cminus::lexer::{self, ScanOptions};
use cminus::parser;
use proptest::prelude::*;

/// Fragments of plausible and implausible C-minus text.
fn fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "int", "void", "if", "else", "for", "break", "return", ";", ",", "[", "]", "(", ")", "{", "}", "+", "-",
            "*", "/", "=", "==", "<", "0x", "/* c */", "/*", "*/", "// c\n", "@", "#!", "é", " ", "\n",
        ])
        .prop_map(str::to_string),
        "[a-zA-Z_][a-zA-Z0-9_]{0,6}",
        "[0-9]{1,4}",
    ]
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment_strategy(), 0..60).prop_map(|parts| parts.join(" "))
}

/// Structurally valid programs: a few globals and one function.
fn program_strategy() -> impl Strategy<Value = String> {
    let ident = "[a-z][a-z0-9]{0,5}".prop_filter("not a keyword", |s| {
        !matches!(s.as_str(), "if" | "else" | "void" | "int" | "for" | "break" | "return")
    });
    (prop::collection::vec(ident.clone(), 1..5), ident, 0u32..1000).prop_map(|(globals, name, n)| {
        let mut src = String::new();
        for g in &globals {
            src.push_str(&format!("int {};\n", g));
        }
        src.push_str(&format!("void {}(void) {{\n    {} = {};\n}}\n", name, globals[0], n));
        src
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: the same input always yields the same five listings
    #[test]
    fn compile_is_deterministic(src in source_strategy()) {
        let first = Artifacts::compile(&src, &ScanOptions::default());
        let second = Artifacts::compile(&src, &ScanOptions::default());
        prop_assert_eq!(first, second);
    }

    /// Property: tokens and errors come out in non-decreasing line order
    #[test]
    fn token_and_error_lines_are_monotonic(src in source_strategy()) {
        let (tokens, session) = lexer::lex(&src);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].line <= pair[1].line);
        }
        let lexical_lines: Vec<usize> = session.errors.iter().map(|e| e.line).collect();
        for pair in lexical_lines.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
        let outcome = parser::parse(&src);
        for pair in outcome.syntax_errors.windows(2) {
            prop_assert!(pair[0].line <= pair[1].line);
        }
    }

    /// Property: no symbol is recorded twice
    #[test]
    fn symbols_are_unique(src in source_strategy()) {
        let (_, session) = lexer::lex(&src);
        let mut seen: Vec<&str> = session.symbols.iter().collect();
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), total);
    }

    /// Property: "Unexpected EOF" is reported at most once, and nothing follows it
    #[test]
    fn unexpected_eof_is_reported_at_most_once(src in source_strategy()) {
        let outcome = parser::parse(&src);
        let eof_positions: Vec<usize> = outcome
            .syntax_errors
            .iter()
            .enumerate()
            .filter(|(_, e)| e.kind == SyntaxErrorKind::UnexpectedEof)
            .map(|(i, _)| i)
            .collect();
        prop_assert!(eof_positions.len() <= 1);
        if let Some(&i) = eof_positions.first() {
            prop_assert_eq!(i, outcome.syntax_errors.len() - 1);
        }
        prop_assert_eq!(outcome.tree.name(), "Program");
    }

    /// Property: well-formed programs parse without any diagnostic
    #[test]
    fn generated_programs_parse_cleanly(src in program_strategy()) {
        let artifacts = Artifacts::compile(&src, &ScanOptions::default());
        prop_assert!(!artifacts.has_errors(), "errors for {:?}: {}", src, artifacts.syntax_errors);
        prop_assert!(artifacts.parse_tree.ends_with("└── $"));
    }
}

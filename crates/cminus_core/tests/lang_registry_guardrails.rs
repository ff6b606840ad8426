use std::collections::HashMap;

use cminus_core::errors;
use cminus_core::lang::keywords;
use cminus_core::lang::symbols;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }

    assert_eq!(keywords::KEYWORDS.len(), 7);
}

#[test]
fn keywords_are_lowercase_ascii_identifiers() {
    for info in keywords::KEYWORDS {
        assert!(
            info.canonical.chars().all(|c| c.is_ascii_lowercase()),
            "keyword {:?} must be lowercase ASCII",
            info.canonical
        );
        assert!(!info.description.is_empty(), "keyword {:?} has no description", info.canonical);
    }
}

#[test]
fn symbols_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, symbols::SymbolId> = HashMap::new();

    for info in symbols::SYMBOLS {
        assert_eq!(
            symbols::from_str(info.canonical),
            Some(info.id),
            "symbol canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(symbols::as_str(info.id), info.canonical);

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate symbol spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn symbol_start_agrees_with_registry() {
    for info in symbols::SYMBOLS {
        let first = info.canonical.chars().next().unwrap();
        assert!(symbols::is_symbol_start(first), "{:?} should start a symbol", first);
    }

    for c in [':', '!', '>', '%', '@', '#', '&', '|', '.', '"'] {
        assert!(!symbols::is_symbol_start(c), "{:?} must not start a symbol", c);
        assert_eq!(symbols::from_char(c), None);
    }
}

#[test]
fn only_two_character_symbol_is_equality() {
    let long: Vec<_> = symbols::SYMBOLS.iter().filter(|s| s.canonical.len() > 1).collect();
    assert_eq!(long.len(), 1);
    assert_eq!(long[0].id, symbols::SymbolId::EqEq);
    assert_eq!(symbols::from_char('='), Some(symbols::SymbolId::Assign));
}

#[test]
fn messages_are_stable() {
    assert_eq!(errors::ILLEGAL_CHARACTER_MSG, "Illegal character");
    assert_eq!(errors::NO_LEXICAL_ERRORS, "No lexical errors found.");
    assert_eq!(errors::NO_SYNTAX_ERRORS, "No syntax errors found.");
}

#[test]
fn every_registry_row_is_stable() {
    use cminus_core::lang::registry::Stability;

    for info in keywords::KEYWORDS {
        assert_eq!(info.stability, Stability::Stable, "keyword {:?}", info.canonical);
    }
    for info in symbols::SYMBOLS {
        assert_eq!(info.stability, Stability::Stable, "symbol {:?}", info.canonical);
    }
}

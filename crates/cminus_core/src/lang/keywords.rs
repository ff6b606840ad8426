//! Define the reserved keyword vocabulary for C-minus.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings
//! and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `If` is an identifier, not a keyword.
//! - The table order is the order keywords are preloaded into a fresh symbol table.
//!
//! ## Examples
//! ```rust
//! use cminus_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("return"), Some(KeywordId::Return));
//! assert_eq!(keywords::from_str("Return"), None);
//! assert_eq!(keywords::as_str(KeywordId::Void), "void");
//! ```

use super::registry::Stability;

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Break,
    Else,
    If,
    Int,
    Return,
    Void,
    For,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Type,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub description: &'static str,
    pub stability: Stability,
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(
        KeywordId::Break,
        "break",
        KeywordCategory::ControlFlow,
        "Leave the innermost enclosing loop.",
    ),
    info(
        KeywordId::Else,
        "else",
        KeywordCategory::ControlFlow,
        "Alternative branch of an `if` statement.",
    ),
    info(
        KeywordId::If,
        "if",
        KeywordCategory::ControlFlow,
        "Conditional statement.",
    ),
    info(KeywordId::Int, "int", KeywordCategory::Type, "Integer type specifier."),
    info(
        KeywordId::Return,
        "return",
        KeywordCategory::ControlFlow,
        "Return from the current function, optionally with a value.",
    ),
    info(
        KeywordId::Void,
        "void",
        KeywordCategory::Type,
        "Empty type specifier; also marks an empty parameter list.",
    ),
    info(
        KeywordId::For,
        "for",
        KeywordCategory::ControlFlow,
        "Counted loop with init, condition and step expressions.",
    ),
];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a registry entry")
}

/// Resolve a spelling to its keyword identifier.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Check whether a spelling is reserved.
pub fn is_keyword(s: &str) -> bool {
    from_str(s).is_some()
}

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    description: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        description,
        stability: Stability::Stable,
    }
}

//! Symbol vocabulary.
//!
//! This module defines the canonical set of operator and punctuation symbols recognized by the
//! scanner. C-minus has a single two-character symbol (`==`); everything else is one character.
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact.
//! - Characters outside this set (for example `:`, `!`, `>`) are not symbols and are reported by
//!   the scanner as illegal characters.
//!
//! ## Examples
//! ```rust
//! use cminus_core::lang::symbols::{self, SymbolId};
//!
//! assert_eq!(symbols::from_str("=="), Some(SymbolId::EqEq));
//! assert_eq!(symbols::as_str(SymbolId::LBrace), "{");
//! assert!(symbols::is_symbol_start('='));
//! assert!(!symbols::is_symbol_start('>'));
//! ```

use super::registry::Stability;

/// Broad syntactic grouping for symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolCategory {
    /// Brackets, parentheses and braces.
    Delimiter,
    /// `;` and `,`.
    Separator,
    /// `+ - * /`.
    Arithmetic,
    /// `=`.
    Assignment,
    /// `<` and `==`.
    Relational,
}

/// Stable identifier for symbol tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolId {
    // Separators
    Semicolon,
    Comma,

    // Delimiters
    LBracket,
    RBracket,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
    Less,
    EqEq,
}

/// Metadata for a symbol.
#[derive(Debug, Clone, Copy)]
pub struct SymbolInfo {
    pub id: SymbolId,
    pub canonical: &'static str,
    pub category: SymbolCategory,
    pub stability: Stability,
}

/// Registry of all symbols.
pub const SYMBOLS: &[SymbolInfo] = &[
    // Separators
    info(SymbolId::Semicolon, ";", SymbolCategory::Separator),
    info(SymbolId::Comma, ",", SymbolCategory::Separator),
    // Delimiters
    info(SymbolId::LBracket, "[", SymbolCategory::Delimiter),
    info(SymbolId::RBracket, "]", SymbolCategory::Delimiter),
    info(SymbolId::LParen, "(", SymbolCategory::Delimiter),
    info(SymbolId::RParen, ")", SymbolCategory::Delimiter),
    info(SymbolId::LBrace, "{", SymbolCategory::Delimiter),
    info(SymbolId::RBrace, "}", SymbolCategory::Delimiter),
    // Operators
    info(SymbolId::Plus, "+", SymbolCategory::Arithmetic),
    info(SymbolId::Minus, "-", SymbolCategory::Arithmetic),
    info(SymbolId::Star, "*", SymbolCategory::Arithmetic),
    info(SymbolId::Slash, "/", SymbolCategory::Arithmetic),
    info(SymbolId::Assign, "=", SymbolCategory::Assignment),
    info(SymbolId::Less, "<", SymbolCategory::Relational),
    info(SymbolId::EqEq, "==", SymbolCategory::Relational),
];

/// Return the canonical spelling for a symbol.
pub fn as_str(id: SymbolId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a symbol.
pub fn category(id: SymbolId) -> SymbolCategory {
    info_for(id).category
}

/// Return the full metadata entry for a symbol.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: SymbolId) -> &'static SymbolInfo {
    SYMBOLS
        .iter()
        .find(|s| s.id == id)
        .expect("INVARIANT: every SymbolId has a registry entry")
}

/// Resolve a spelling to its symbol identifier.
pub fn from_str(s: &str) -> Option<SymbolId> {
    SYMBOLS.iter().find(|info| info.canonical == s).map(|info| info.id)
}

/// Resolve a single character to a one-character symbol.
///
/// ## Returns
/// - `None` for characters that only start a longer symbol, or no symbol at all.
pub fn from_char(c: char) -> Option<SymbolId> {
    let mut buf = [0u8; 4];
    from_str(c.encode_utf8(&mut buf))
}

/// Check whether `c` is the first character of any symbol spelling.
pub fn is_symbol_start(c: char) -> bool {
    SYMBOLS.iter().any(|info| info.canonical.starts_with(c))
}

const fn info(id: SymbolId, canonical: &'static str, category: SymbolCategory) -> SymbolInfo {
    SymbolInfo {
        id,
        canonical,
        category,
        stability: Stability::Stable,
    }
}

//! C-minus language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords and symbols.
//!
//! The design goal is to avoid stringly-typed checks scattered across the scanner and parser.
//! Instead, callers work with **stable IDs** (`KeywordId`, `SymbolId`) and look up spellings and
//! metadata via registry tables.
//!
//! ## Notes
//! - Registries are **pure**: no token types, no IO, no side effects.
//! - The scanner enforces lexical rules; registries only provide spellings and metadata.
//!
//! ## Examples
//! ```rust
//! use cminus_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("if"), Some(KeywordId::If));
//! assert_eq!(keywords::as_str(KeywordId::If), "if");
//! ```

pub mod keywords;
pub mod registry;
pub mod symbols;

//! Syntax front end for C-minus: scanner, diagnostic sinks, grammar tables, and predictive parser.
//!
//! ## Notes
//! - This crate is "syntax-only": it produces tokens, symbols, a parse tree and diagnostics. There is no semantic
//!   analysis and no code generation.
//! - Vocabulary identity (keywords/symbols) comes from `cminus_core::lang` registries.
//! - All per-run state lives in a [`session::Session`]; there are no globals, so independent runs can proceed in
//!   parallel.
//!
//! ## Examples
//! ```rust
//! use cminus_syntax::parser;
//!
//! let outcome = parser::parse("void main(void) { }");
//! assert!(outcome.syntax_errors.is_empty());
//! assert_eq!(outcome.tree.name(), "Program");
//! ```

pub mod diagnostics;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod session;
pub mod span;
pub mod tables;
pub mod tree;

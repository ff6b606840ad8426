#![forbid(unsafe_code)]
//! C-minus compiler front end
//!
//! Turns C-minus source text into five listings: tokens, lexical errors, the symbol table, a
//! box-drawn parse tree and syntax errors. The scanner and the predictive parser live in
//! `cminus_syntax`; this crate adds the artifact pipeline, output configuration and the CLI.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a front end bug (logic error), use `.expect("INVARIANT: reason")` with
//!   a clear explanation.
//!
//! ## Examples
//! ```rust
//! use cminus::artifacts::Artifacts;
//! use cminus::lexer::ScanOptions;
//!
//! let artifacts = Artifacts::compile("int x[3;", &ScanOptions::default());
//! assert_eq!(artifacts.syntax_errors, "#1 : syntax error, missing ]");
//! ```

pub mod artifacts;
pub mod cli;
pub mod config;
pub mod version;

pub use cminus_syntax::diagnostics;
pub use cminus_syntax::grammar;
pub use cminus_syntax::lexer;
pub use cminus_syntax::parser;
pub use cminus_syntax::session;
pub use cminus_syntax::tree;

pub use artifacts::{ArtifactError, Artifacts};
pub use config::OutputConfig;

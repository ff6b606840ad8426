//! Predictive parser for the C-minus language
//!
//! Pulls tokens from a [`Scanner`] one at a time and derives a concrete [`ParseNode`] tree rooted
//! at `Program`, selecting productions from the LL(1) tables in [`crate::grammar`].
//!
//! Syntax errors never stop the parse. Each one is recovered in panic mode and recorded:
//!
//! - a nonterminal whose FOLLOW set holds the lookahead is skipped (`missing <rule>`)
//! - any other unpredicted token is discarded (`illegal <class>`) and the rule retried
//! - running out of input mid-rule is reported once, after which every pending rule unwinds
//!
//! ## Examples
//!
//! ```rust
//! use cminus_syntax::parser;
//!
//! let outcome = parser::parse("int x[10];");
//! assert!(outcome.syntax_errors.is_empty());
//! assert!(outcome.tree.find("Var-declaration-prime").is_some());
//! ```

use crate::diagnostics::{SyntaxError, SyntaxErrorKind};
use crate::grammar::{self, NonTerminal, Symbol};
use crate::lexer::{END_MARKER, ScanOptions, Scanner, Token};
use crate::session::Session;
use crate::tree::ParseNode;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/recovery.rs");
include!("parser/api.rs");
include!("parser/tests.rs");

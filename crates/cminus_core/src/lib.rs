//! Provide the canonical language vocabulary for the C-minus front end.
//!
//! This crate is intentionally small and dependency-free. It holds the reserved words, the symbol set and the
//! user-facing diagnostic messages, so the scanner, the parser and the CLI all agree on the same spellings.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global mutable state, and no scanner or parser types.

pub mod errors;
pub mod lang;

//! Shared user-facing diagnostic messages.
//!
//! The scanner, the artifact exporters, and the fixture runner all read these constants so the
//! emitted text stays byte-for-byte stable.

/// A character (or run of characters) that cannot start any lexeme.
pub const ILLEGAL_CHARACTER_MSG: &str = "Illegal character";

/// A digit run glued to letters, or a multi-digit number with a leading zero.
pub const MALFORMED_NUMBER_MSG: &str = "Malformed number";

/// A `/*` comment still open at end of input.
pub const UNCLOSED_COMMENT_MSG: &str = "Open comment at EOF";

/// A `*/` with no comment open.
pub const STRAY_CLOSING_COMMENT_MSG: &str = "Stray closing comment";

/// A run starting with a non-ASCII letter.
pub const INVALID_IDENTIFIER_START_MSG: &str = "Invalid Identifier Start";

/// Written to the lexical error listing when the scanner reported nothing.
pub const NO_LEXICAL_ERRORS: &str = "No lexical errors found.";

/// Written to the syntax error listing when the parser reported nothing.
pub const NO_SYNTAX_ERRORS: &str = "No syntax errors found.";

/// Detail text for running out of input while a rule was still pending.
pub const UNEXPECTED_EOF_MSG: &str = "Unexpected EOF";

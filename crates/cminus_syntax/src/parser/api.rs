/// Scan and parse `source` with default scanner options.
///
/// This is the main public entrypoint for the front end.
///
/// ## Returns
/// - The parse tree, syntax errors in detection order, and the session holding the token, symbol
///   and lexical error tables. Never fails; check the error lists to tell clean runs apart.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> ParseOutcome {
    Parser::new(Scanner::new(source)).parse()
}

/// Like [`parse`], with explicit scanner options.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_with_options(source: &str, options: ScanOptions) -> ParseOutcome {
    Parser::new(Scanner::with_options(source, options)).parse()
}

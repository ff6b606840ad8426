// Parser core types and derivation loop.
//
// This file is `include!`'d into `crate::parser`. Derivation runs on an explicit stack of
// `Frame`s rather than the call stack, so nesting depth in the input is bounded only by memory.

/// Whether the parser may still consume input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    Scanning,
    /// Input ran out while something was still expected. Sticky: every pending and later rule
    /// returns nothing once this is set.
    UnexpectedEnd,
}

/// Everything one parse run produces.
#[derive(Debug)]
pub struct ParseOutcome {
    pub tree: ParseNode,
    pub syntax_errors: Vec<SyntaxError>,
    /// Token, symbol and lexical error tables filled while parsing.
    pub session: Session,
}

/// A nonterminal whose production is being expanded.
struct Frame {
    node: ParseNode,
    rhs: &'static [Symbol],
    next: usize,
}

/// What entering a nonterminal yields.
enum Entry {
    /// Finished immediately: an ε-derivation, or nothing after recovery.
    Complete(Option<ParseNode>),
    /// A production was selected and its right-hand side is pending.
    Open(Frame),
}

pub struct Parser<'a> {
    scanner: Scanner<'a>,
    lookahead: Token,
    state: ParseState,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    /// Create a parser and pull the first lookahead token.
    pub fn new(mut scanner: Scanner<'a>) -> Self {
        let lookahead = scanner.next_token();
        Self {
            scanner,
            lookahead,
            state: ParseState::Scanning,
            errors: Vec::new(),
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    /// Parse the whole input.
    ///
    /// The root production `Program -> Declaration-list $` is driven here: after the
    /// declaration list, every leftover token is reported as illegal and discarded until the end
    /// marker, which becomes the tree's last child. If input ran out early the marker is omitted.
    pub fn parse(mut self) -> ParseOutcome {
        let mut root = ParseNode::nonterminal(NonTerminal::Program);
        if let Some(declarations) = self.derive(NonTerminal::DeclarationList) {
            root.push(declarations);
        }

        if self.state == ParseState::Scanning {
            while !self.lookahead.is_end() {
                self.discard_illegal();
            }
            root.push(ParseNode::leaf(END_MARKER));
        }

        ParseOutcome {
            tree: root,
            syntax_errors: self.errors,
            session: self.scanner.into_session(),
        }
    }

    fn advance(&mut self) {
        self.lookahead = self.scanner.next_token();
    }

    /// Derive `root` and everything beneath it.
    ///
    /// ## Returns
    /// - The subtree, or `None` when recovery skipped `root` entirely.
    fn derive(&mut self, root: NonTerminal) -> Option<ParseNode> {
        let mut stack = match self.enter(root) {
            Entry::Complete(node) => return node,
            Entry::Open(frame) => vec![frame],
        };

        loop {
            let frame = stack.last_mut()?;
            let Some(&symbol) = frame.rhs.get(frame.next) else {
                let done = stack.pop()?.node;
                match stack.last_mut() {
                    Some(parent) => parent.node.push(done),
                    None => return Some(done),
                }
                continue;
            };
            frame.next += 1;

            let child = match symbol {
                Symbol::Terminal(expected) => self.match_terminal(expected),
                Symbol::NonTerminal(nt) => match self.enter(nt) {
                    Entry::Complete(node) => node,
                    Entry::Open(frame) => {
                        stack.push(frame);
                        continue;
                    }
                },
            };

            if let (Some(child), Some(parent)) = (child, stack.last_mut()) {
                parent.node.push(child);
            }
        }
    }

    /// Select a production for `nt`, recovering in panic mode when none applies.
    fn enter(&mut self, nt: NonTerminal) -> Entry {
        loop {
            if self.state == ParseState::UnexpectedEnd {
                return Entry::Complete(None);
            }

            let class = self.lookahead.class();
            if let Some(production) = grammar::predict(nt, class) {
                let mut node = ParseNode::nonterminal(nt);
                if production.is_epsilon() {
                    node.push(ParseNode::epsilon());
                    return Entry::Complete(Some(node));
                }
                return Entry::Open(Frame {
                    node,
                    rhs: production.rhs,
                    next: 0,
                });
            }

            if grammar::in_follow(nt, class) {
                self.report(SyntaxErrorKind::MissingNonterminal(nt));
                return Entry::Complete(None);
            }

            if self.lookahead.is_end() {
                self.unexpected_end();
                return Entry::Complete(None);
            }

            self.discard_illegal();
            if self.lookahead.is_end() {
                self.unexpected_end();
                return Entry::Complete(None);
            }
        }
    }

    /// Match `expected` against the lookahead class.
    ///
    /// ## Returns
    /// - The matched leaf, or `None` if the terminal is missing (the token is kept) or input ran out.
    fn match_terminal(&mut self, expected: &'static str) -> Option<ParseNode> {
        if self.state == ParseState::UnexpectedEnd {
            return None;
        }

        if self.lookahead.class() == expected {
            let leaf = ParseNode::leaf(self.lookahead.render());
            self.advance();
            return Some(leaf);
        }

        if self.lookahead.is_end() {
            self.unexpected_end();
        } else {
            self.report(SyntaxErrorKind::MissingTerminal(expected));
        }
        None
    }
}

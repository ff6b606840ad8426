//! Grammar tables driving the predictive parser.
//!
//! The grammar is fixed, so every table is a `const` slice:
//!
//! - [`PRODUCTIONS`]: all 85 productions with their predict sets
//! - [`SETS`]: FIRST, nullability and FOLLOW for each of the 47 nonterminals
//!
//! Lookahead classes are plain strings: `ID`, `NUM`, the spelling of a keyword or symbol, or
//! `$` for end of input (see [`crate::lexer::Token::class`]).

mod productions;
mod sets;

use std::fmt;

pub use productions::PRODUCTIONS;
pub use sets::SETS;

// ============================================================================
// Nonterminals
// ============================================================================

/// A grammar nonterminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NonTerminal {
    Program,
    DeclarationList,
    Declaration,
    DeclarationInitial,
    DeclarationPrime,
    VarDeclarationPrime,
    FunDeclarationPrime,
    TypeSpecifier,
    Params,
    ParamList,
    Param,
    ParamPrime,
    CompoundStmt,
    StatementList,
    Statement,
    ExpressionStmt,
    SelectionStmt,
    ElseStmt,
    IterationStmt,
    ReturnStmt,
    ReturnStmtPrime,
    Expression,
    B,
    H,
    SimpleExpressionZegond,
    SimpleExpressionPrime,
    C,
    Relop,
    AdditiveExpression,
    AdditiveExpressionPrime,
    AdditiveExpressionZegond,
    D,
    Addop,
    Term,
    TermPrime,
    TermZegond,
    G,
    SignedFactor,
    SignedFactorZegond,
    Factor,
    VarCallPrime,
    VarPrime,
    FactorPrime,
    FactorZegond,
    Args,
    ArgList,
    ArgListPrime,
}

impl NonTerminal {
    /// Every nonterminal, in declaration order.
    pub const ALL: [NonTerminal; 47] = {
        use NonTerminal::*;
        [
            Program,
            DeclarationList,
            Declaration,
            DeclarationInitial,
            DeclarationPrime,
            VarDeclarationPrime,
            FunDeclarationPrime,
            TypeSpecifier,
            Params,
            ParamList,
            Param,
            ParamPrime,
            CompoundStmt,
            StatementList,
            Statement,
            ExpressionStmt,
            SelectionStmt,
            ElseStmt,
            IterationStmt,
            ReturnStmt,
            ReturnStmtPrime,
            Expression,
            B,
            H,
            SimpleExpressionZegond,
            SimpleExpressionPrime,
            C,
            Relop,
            AdditiveExpression,
            AdditiveExpressionPrime,
            AdditiveExpressionZegond,
            D,
            Addop,
            Term,
            TermPrime,
            TermZegond,
            G,
            SignedFactor,
            SignedFactorZegond,
            Factor,
            VarCallPrime,
            VarPrime,
            FactorPrime,
            FactorZegond,
            Args,
            ArgList,
            ArgListPrime,
        ]
    };

    /// Grammar spelling, as used for parse-tree labels and "missing" diagnostics.
    pub fn name(self) -> &'static str {
        use NonTerminal as N;
        match self {
            N::Program => "Program",
            N::DeclarationList => "Declaration-list",
            N::Declaration => "Declaration",
            N::DeclarationInitial => "Declaration-initial",
            N::DeclarationPrime => "Declaration-prime",
            N::VarDeclarationPrime => "Var-declaration-prime",
            N::FunDeclarationPrime => "Fun-declaration-prime",
            N::TypeSpecifier => "Type-specifier",
            N::Params => "Params",
            N::ParamList => "Param-list",
            N::Param => "Param",
            N::ParamPrime => "Param-prime",
            N::CompoundStmt => "Compound-stmt",
            N::StatementList => "Statement-list",
            N::Statement => "Statement",
            N::ExpressionStmt => "Expression-stmt",
            N::SelectionStmt => "Selection-stmt",
            N::ElseStmt => "Else-stmt",
            N::IterationStmt => "Iteration-stmt",
            N::ReturnStmt => "Return-stmt",
            N::ReturnStmtPrime => "Return-stmt-prime",
            N::Expression => "Expression",
            N::B => "B",
            N::H => "H",
            N::SimpleExpressionZegond => "Simple-expression-zegond",
            N::SimpleExpressionPrime => "Simple-expression-prime",
            N::C => "C",
            N::Relop => "Relop",
            N::AdditiveExpression => "Additive-expression",
            N::AdditiveExpressionPrime => "Additive-expression-prime",
            N::AdditiveExpressionZegond => "Additive-expression-zegond",
            N::D => "D",
            N::Addop => "Addop",
            N::Term => "Term",
            N::TermPrime => "Term-prime",
            N::TermZegond => "Term-zegond",
            N::G => "G",
            N::SignedFactor => "Signed-factor",
            N::SignedFactorZegond => "Signed-factor-zegond",
            N::Factor => "Factor",
            N::VarCallPrime => "Var-call-prime",
            N::VarPrime => "Var-prime",
            N::FactorPrime => "Factor-prime",
            N::FactorZegond => "Factor-zegond",
            N::Args => "Args",
            N::ArgList => "Arg-list",
            N::ArgListPrime => "Arg-list-prime",
        }
    }

    /// Resolve a grammar spelling back to its nonterminal.
    pub fn from_name(name: &str) -> Option<NonTerminal> {
        Self::ALL.iter().copied().find(|nt| nt.name() == name)
    }

    /// Position in [`NonTerminal::ALL`] and [`SETS`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Productions
// ============================================================================

/// One right-hand-side symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Matched against the lookahead class.
    Terminal(&'static str),
    NonTerminal(NonTerminal),
}

/// A production with its predict set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Production {
    pub id: u16,
    pub lhs: NonTerminal,
    /// Empty for the ε-production.
    pub rhs: &'static [Symbol],
    pub predict: &'static [&'static str],
}

impl Production {
    pub fn is_epsilon(&self) -> bool {
        self.rhs.is_empty()
    }

    pub fn predicts(&self, class: &str) -> bool {
        self.predict.iter().any(|p| *p == class)
    }
}

/// FIRST, nullability and FOLLOW of one nonterminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonTerminalSets {
    pub nonterminal: NonTerminal,
    pub first: &'static [&'static str],
    pub nullable: bool,
    pub follow: &'static [&'static str],
}

const fn prod(
    id: u16,
    lhs: NonTerminal,
    rhs: &'static [Symbol],
    predict: &'static [&'static str],
) -> Production {
    Production { id, lhs, rhs, predict }
}

const fn sets(
    nonterminal: NonTerminal,
    first: &'static [&'static str],
    nullable: bool,
    follow: &'static [&'static str],
) -> NonTerminalSets {
    NonTerminalSets {
        nonterminal,
        first,
        nullable,
        follow,
    }
}

// ============================================================================
// Lookups
// ============================================================================

/// Alternatives of `nt`, in lookup order.
pub fn productions(nt: NonTerminal) -> impl Iterator<Item = &'static Production> {
    PRODUCTIONS.iter().filter(move |p| p.lhs == nt)
}

/// Select the production for `nt` under lookahead `class`.
///
/// ## Returns
/// - The first alternative (in table order) whose predict set contains `class`, or `None`.
pub fn predict(nt: NonTerminal, class: &str) -> Option<&'static Production> {
    productions(nt).find(|p| p.predicts(class))
}

fn sets_for(nt: NonTerminal) -> &'static NonTerminalSets {
    SETS.get(nt.index())
        .expect("INVARIANT: SETS has one entry per nonterminal")
}

/// FIRST set of `nt` (terminal classes only; nullability is reported by [`nullable`]).
pub fn first(nt: NonTerminal) -> &'static [&'static str] {
    sets_for(nt).first
}

pub fn follow(nt: NonTerminal) -> &'static [&'static str] {
    sets_for(nt).follow
}

pub fn nullable(nt: NonTerminal) -> bool {
    sets_for(nt).nullable
}

/// Whether `class` may legally follow `nt`; the parser's synchronization test.
pub fn in_follow(nt: NonTerminal, class: &str) -> bool {
    follow(nt).iter().any(|f| *f == class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_sizes() {
        assert_eq!(PRODUCTIONS.len(), 85);
        assert_eq!(SETS.len(), NonTerminal::ALL.len());
    }

    #[test]
    fn sets_follow_declaration_order() {
        for (index, entry) in SETS.iter().enumerate() {
            assert_eq!(entry.nonterminal.index(), index, "{}", entry.nonterminal);
            assert_eq!(NonTerminal::ALL[index], entry.nonterminal);
        }
    }

    #[test]
    fn production_ids_are_sequential() {
        for (index, p) in PRODUCTIONS.iter().enumerate() {
            assert_eq!(p.id as usize, index + 1);
        }
    }

    #[test]
    fn names_round_trip_and_are_unique() {
        let mut seen = HashSet::new();
        for nt in NonTerminal::ALL {
            assert!(seen.insert(nt.name()), "duplicate name {}", nt.name());
            assert_eq!(NonTerminal::from_name(nt.name()), Some(nt));
        }
        assert_eq!(NonTerminal::from_name("Nope"), None);
    }

    #[test]
    fn every_nonterminal_has_a_production() {
        for nt in NonTerminal::ALL {
            assert!(productions(nt).next().is_some(), "{} has no production", nt);
        }
    }

    #[test]
    fn predict_sets_are_disjoint_per_nonterminal() {
        for nt in NonTerminal::ALL {
            let alternatives: Vec<_> = productions(nt).collect();
            for (i, a) in alternatives.iter().enumerate() {
                for b in &alternatives[i + 1..] {
                    for class in a.predict {
                        assert!(
                            !b.predicts(class),
                            "{}: productions {} and {} both predict `{}`",
                            nt,
                            a.id,
                            b.id,
                            class
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn every_first_terminal_is_predicted() {
        for nt in NonTerminal::ALL {
            for class in first(nt) {
                assert!(predict(nt, class).is_some(), "{}: `{}` in FIRST but unpredicted", nt, class);
            }
        }
    }

    #[test]
    fn nullable_follow_selects_a_production() {
        for nt in NonTerminal::ALL.into_iter().filter(|nt| nullable(*nt)) {
            for class in follow(nt) {
                assert!(predict(nt, class).is_some(), "{}: `{}` in FOLLOW but unpredicted", nt, class);
            }
        }
    }

    #[test]
    fn epsilon_productions_are_nullable() {
        for nt in NonTerminal::ALL {
            let has_epsilon = productions(nt).any(Production::is_epsilon);
            if has_epsilon {
                assert!(nullable(nt), "{} has an ε-production", nt);
            }
        }
        assert!(nullable(NonTerminal::B));
        assert!(!nullable(NonTerminal::Program));
    }

    #[test]
    fn else_binds_to_nearest_if() {
        let chosen = predict(NonTerminal::ElseStmt, "else").map(|p| p.id);
        assert_eq!(chosen, Some(32));
        assert!(in_follow(NonTerminal::ElseStmt, "else"));
    }

    #[test]
    fn semicolon_starts_declaration_prime() {
        assert!(first(NonTerminal::DeclarationPrime).contains(&";"));
        assert!(first(NonTerminal::VarDeclarationPrime).contains(&";"));
        assert_eq!(predict(NonTerminal::DeclarationPrime, ";").map(|p| p.id), Some(7));
    }

    #[test]
    fn ordered_lookup_prefers_earlier_alternative() {
        let signed: Vec<u16> = productions(NonTerminal::SignedFactor).map(|p| p.id).collect();
        assert_eq!(signed, vec![64, 65, 66]);
        assert_eq!(predict(NonTerminal::SignedFactor, "ID").map(|p| p.id), Some(66));
        assert_eq!(predict(NonTerminal::Expression, "ID").map(|p| p.id), Some(39));
        assert!(predict(NonTerminal::Expression, "}").is_none());
    }
}

//! FIRST and FOLLOW sets, one entry per nonterminal in declaration order.
//!
//! Sets hold lookahead classes: `ID`, `NUM`, keyword and symbol spellings, and `$` for end of input.

use super::NonTerminal as N;
use super::{NonTerminalSets, sets};

#[rustfmt::skip]
pub const SETS: &[NonTerminalSets] = &[
    sets(N::Program, &["$", "int", "void"], false, &["$"]),
    sets(N::DeclarationList, &["int", "void"], true, &["ID", "NUM", "$", "if", "else", "for", "break", "return", ";", "(", "{", "}", "+", "-"]),
    sets(N::Declaration, &["int", "void"], false, &["ID", "NUM", "$", "int", "void", "if", "else", "for", "break", "return", ";", "(", "{", "}", "+", "-"]),
    sets(N::DeclarationInitial, &["int", "void"], false, &[",", "[", "(", ")"]),
    sets(N::DeclarationPrime, &[";", "[", "("], false, &["ID", "NUM", "$", "int", "void", "if", "else", "for", "break", "return", ";", "(", "{", "}", "+", "-"]),
    sets(N::VarDeclarationPrime, &[";", "["], false, &["ID", "NUM", "$", "int", "void", "if", "else", "for", "break", "return", ";", "(", "{", "}", "+", "-"]),
    sets(N::FunDeclarationPrime, &["("], false, &["ID", "NUM", "$", "int", "void", "if", "else", "for", "break", "return", ";", "(", "{", "}", "+", "-"]),
    sets(N::TypeSpecifier, &["int", "void"], false, &["ID"]),
    sets(N::Params, &["int", "void"], false, &[")"]),
    sets(N::ParamList, &[","], true, &[")"]),
    sets(N::Param, &["int", "void"], false, &[",", ")"]),
    sets(N::ParamPrime, &["["], true, &[",", ")"]),
    sets(N::CompoundStmt, &["{"], false, &["ID", "NUM", "$", "int", "void", "if", "else", "for", "break", "return", ";", "(", "{", "}", "+", "-"]),
    sets(N::StatementList, &["ID", "NUM", "if", "for", "break", "return", ";", "(", "{", "+", "-"], true, &["}"]),
    sets(N::Statement, &["ID", "NUM", "if", "for", "break", "return", ";", "(", "{", "+", "-"], false, &["ID", "NUM", "if", "else", "for", "break", "return", ";", "(", "{", "}", "+", "-"]),
    sets(N::ExpressionStmt, &["ID", "NUM", "break", ";", "(", "+", "-"], false, &["ID", "NUM", "if", "else", "for", "break", "return", ";", "(", "{", "}", "+", "-"]),
    sets(N::SelectionStmt, &["if"], false, &["ID", "NUM", "if", "else", "for", "break", "return", ";", "(", "{", "}", "+", "-"]),
    sets(N::ElseStmt, &["else"], true, &["ID", "NUM", "if", "else", "for", "break", "return", ";", "(", "{", "}", "+", "-"]),
    sets(N::IterationStmt, &["for"], false, &["ID", "NUM", "if", "else", "for", "break", "return", ";", "(", "{", "}", "+", "-"]),
    sets(N::ReturnStmt, &["return"], false, &["ID", "NUM", "if", "else", "for", "break", "return", ";", "(", "{", "}", "+", "-"]),
    sets(N::ReturnStmtPrime, &["ID", "NUM", ";", "(", "+", "-"], false, &["ID", "NUM", "if", "else", "for", "break", "return", ";", "(", "{", "}", "+", "-"]),
    sets(N::Expression, &["ID", "NUM", "(", "+", "-"], false, &[";", ",", "]", ")"]),
    sets(N::B, &["[", "(", "+", "-", "*", "/", "=", "<", "=="], true, &[";", ",", "]", ")"]),
    sets(N::H, &["(", "+", "-", "*", "/", "=", "<", "=="], true, &[";", ",", "]", ")"]),
    sets(N::SimpleExpressionZegond, &["NUM", "(", "+", "-"], false, &[";", ",", "]", ")"]),
    sets(N::SimpleExpressionPrime, &["(", "+", "-", "*", "/", "<", "=="], true, &[";", ",", "]", ")"]),
    sets(N::C, &["<", "=="], true, &[";", ",", "]", ")"]),
    sets(N::Relop, &["<", "=="], false, &["ID", "NUM", "(", "+", "-"]),
    sets(N::AdditiveExpression, &["ID", "NUM", "(", "+", "-"], false, &[";", ",", "]", ")"]),
    sets(N::AdditiveExpressionPrime, &["(", "+", "-", "*", "/"], true, &[";", ",", "]", ")", "<", "=="]),
    sets(N::AdditiveExpressionZegond, &["NUM", "(", "+", "-"], false, &[";", ",", "]", ")", "<", "=="]),
    sets(N::D, &["+", "-"], true, &[";", ",", "]", ")", "<", "=="]),
    sets(N::Addop, &["+", "-"], false, &["ID", "NUM", "(", "+", "-"]),
    sets(N::Term, &["ID", "NUM", "(", "+", "-"], false, &[";", ",", "]", ")", "+", "-", "<", "=="]),
    sets(N::TermPrime, &["(", "*", "/"], true, &[";", ",", "]", ")", "+", "-", "<", "=="]),
    sets(N::TermZegond, &["NUM", "(", "+", "-"], false, &[";", ",", "]", ")", "+", "-", "<", "=="]),
    sets(N::G, &["*", "/"], true, &[";", ",", "]", ")", "+", "-", "<", "=="]),
    sets(N::SignedFactor, &["ID", "NUM", "(", "+", "-"], false, &[";", ",", "]", ")", "+", "-", "*", "/", "<", "=="]),
    sets(N::SignedFactorZegond, &["NUM", "(", "+", "-"], false, &[";", ",", "]", ")", "+", "-", "*", "/", "<", "=="]),
    sets(N::Factor, &["ID", "NUM", "("], false, &[";", ",", "]", ")", "+", "-", "*", "/", "<", "=="]),
    sets(N::VarCallPrime, &["[", "("], true, &[";", ",", "]", ")", "+", "-", "*", "/", "<", "=="]),
    sets(N::VarPrime, &["["], true, &[";", ",", "]", ")", "+", "-", "*", "/", "<", "=="]),
    sets(N::FactorPrime, &["("], true, &[";", ",", "]", ")", "+", "-", "*", "/", "<", "=="]),
    sets(N::FactorZegond, &["NUM", "("], false, &[";", ",", "]", ")", "+", "-", "*", "/", "<", "=="]),
    sets(N::Args, &["ID", "NUM", "(", "+", "-"], true, &[")"]),
    sets(N::ArgList, &["ID", "NUM", "(", "+", "-"], false, &[")"]),
    sets(N::ArgListPrime, &[","], true, &[")"]),
];

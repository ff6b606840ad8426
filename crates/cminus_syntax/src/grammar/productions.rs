//! The LL(1) production table.
//!
//! Alternatives of one nonterminal are listed in lookup order; the first alternative whose
//! predict set holds the lookahead class wins.

use super::NonTerminal as N;
use super::Symbol::{NonTerminal as Nt, Terminal as T};
use super::{Production, prod};

#[rustfmt::skip]
pub const PRODUCTIONS: &[Production] = &[
    prod(1, N::Program, &[Nt(N::DeclarationList), T("$")], &["$", "int", "void"]),
    prod(2, N::DeclarationList, &[Nt(N::Declaration), Nt(N::DeclarationList)], &["int", "void"]),
    prod(3, N::DeclarationList, &[], &["ID", "NUM", "$", "if", "else", "for", "break", "return", ";", "(", "{", "}", "+", "-"]),
    prod(4, N::Declaration, &[Nt(N::DeclarationInitial), Nt(N::DeclarationPrime)], &["int", "void"]),
    prod(5, N::DeclarationInitial, &[Nt(N::TypeSpecifier), T("ID")], &["int", "void"]),
    prod(6, N::DeclarationPrime, &[Nt(N::FunDeclarationPrime)], &["("]),
    prod(7, N::DeclarationPrime, &[Nt(N::VarDeclarationPrime)], &[";", "["]),
    prod(8, N::VarDeclarationPrime, &[T("["), T("NUM"), T("]"), T(";")], &["["]),
    prod(9, N::VarDeclarationPrime, &[T(";")], &[";"]),
    prod(10, N::FunDeclarationPrime, &[T("("), Nt(N::Params), T(")"), Nt(N::CompoundStmt)], &["("]),
    prod(11, N::TypeSpecifier, &[T("int")], &["int"]),
    prod(12, N::TypeSpecifier, &[T("void")], &["void"]),
    prod(13, N::Params, &[T("int"), T("ID"), Nt(N::ParamPrime), Nt(N::ParamList)], &["int"]),
    prod(14, N::Params, &[T("void")], &["void"]),
    prod(15, N::ParamList, &[T(","), Nt(N::Param), Nt(N::ParamList)], &[","]),
    prod(16, N::ParamList, &[], &[")"]),
    prod(17, N::Param, &[Nt(N::DeclarationInitial), Nt(N::ParamPrime)], &["int", "void"]),
    prod(18, N::ParamPrime, &[T("["), T("]")], &["["]),
    prod(19, N::ParamPrime, &[], &[",", ")"]),
    prod(20, N::CompoundStmt, &[T("{"), Nt(N::DeclarationList), Nt(N::StatementList), T("}")], &["{"]),
    prod(21, N::StatementList, &[Nt(N::Statement), Nt(N::StatementList)], &["ID", "NUM", "if", "for", "break", "return", ";", "(", "{", "+", "-"]),
    prod(22, N::StatementList, &[], &["}"]),
    prod(23, N::Statement, &[Nt(N::ExpressionStmt)], &["ID", "NUM", "break", ";", "(", "+", "-"]),
    prod(24, N::Statement, &[Nt(N::CompoundStmt)], &["{"]),
    prod(25, N::Statement, &[Nt(N::SelectionStmt)], &["if"]),
    prod(26, N::Statement, &[Nt(N::IterationStmt)], &["for"]),
    prod(27, N::Statement, &[Nt(N::ReturnStmt)], &["return"]),
    prod(28, N::ExpressionStmt, &[Nt(N::Expression), T(";")], &["ID", "NUM", "(", "+", "-"]),
    prod(29, N::ExpressionStmt, &[T("break"), T(";")], &["break"]),
    prod(30, N::ExpressionStmt, &[T(";")], &[";"]),
    prod(31, N::SelectionStmt, &[T("if"), T("("), Nt(N::Expression), T(")"), Nt(N::Statement), Nt(N::ElseStmt)], &["if"]),
    prod(32, N::ElseStmt, &[T("else"), Nt(N::Statement)], &["else"]),
    prod(33, N::ElseStmt, &[], &["ID", "NUM", "if", "for", "break", "return", ";", "(", "{", "}", "+", "-"]),
    prod(34, N::IterationStmt, &[T("for"), T("("), Nt(N::Expression), T(";"), Nt(N::Expression), T(";"), Nt(N::Expression), T(")"), Nt(N::CompoundStmt)], &["for"]),
    prod(35, N::ReturnStmt, &[T("return"), Nt(N::ReturnStmtPrime)], &["return"]),
    prod(36, N::ReturnStmtPrime, &[Nt(N::Expression), T(";")], &["ID", "NUM", "(", "+", "-"]),
    prod(37, N::ReturnStmtPrime, &[T(";")], &[";"]),
    prod(38, N::Expression, &[Nt(N::SimpleExpressionZegond)], &["NUM", "(", "+", "-"]),
    prod(39, N::Expression, &[T("ID"), Nt(N::B)], &["ID"]),
    prod(40, N::B, &[T("="), Nt(N::Expression)], &["="]),
    prod(41, N::B, &[T("["), Nt(N::Expression), T("]"), Nt(N::H)], &["["]),
    prod(42, N::B, &[Nt(N::SimpleExpressionPrime)], &[";", ",", "]", "(", ")", "+", "-", "*", "/", "<", "=="]),
    prod(43, N::H, &[T("="), Nt(N::Expression)], &["="]),
    prod(44, N::H, &[Nt(N::G), Nt(N::D), Nt(N::C)], &[";", ",", "]", "(", ")", "+", "-", "*", "/", "<", "=="]),
    prod(45, N::SimpleExpressionZegond, &[Nt(N::AdditiveExpressionZegond), Nt(N::C)], &["NUM", "(", "+", "-"]),
    prod(46, N::SimpleExpressionPrime, &[Nt(N::AdditiveExpressionPrime), Nt(N::C)], &[";", ",", "]", "(", ")", "+", "-", "*", "/", "<", "=="]),
    prod(47, N::C, &[Nt(N::Relop), Nt(N::AdditiveExpression)], &["<", "=="]),
    prod(48, N::C, &[], &[";", ",", "]", ")"]),
    prod(49, N::Relop, &[T("==")], &["=="]),
    prod(50, N::Relop, &[T("<")], &["<"]),
    prod(51, N::AdditiveExpression, &[Nt(N::Term), Nt(N::D)], &["ID", "NUM", "(", "+", "-"]),
    prod(52, N::AdditiveExpressionPrime, &[Nt(N::TermPrime), Nt(N::D)], &[";", ",", "]", "(", ")", "+", "-", "*", "/", "<", "=="]),
    prod(53, N::AdditiveExpressionZegond, &[Nt(N::TermZegond), Nt(N::D)], &["NUM", "(", "+", "-"]),
    prod(54, N::D, &[Nt(N::Addop), Nt(N::Term), Nt(N::D)], &["+", "-"]),
    prod(55, N::D, &[], &[";", ",", "]", ")", "<", "=="]),
    prod(56, N::Addop, &[T("+")], &["+"]),
    prod(57, N::Addop, &[T("-")], &["-"]),
    prod(58, N::Term, &[Nt(N::SignedFactor), Nt(N::G)], &["ID", "NUM", "(", "+", "-"]),
    prod(59, N::TermPrime, &[Nt(N::FactorPrime), Nt(N::G)], &[";", ",", "]", "(", ")", "+", "-", "*", "/", "<", "=="]),
    prod(60, N::TermZegond, &[Nt(N::SignedFactorZegond), Nt(N::G)], &["NUM", "(", "+", "-"]),
    prod(61, N::G, &[T("*"), Nt(N::SignedFactor), Nt(N::G)], &["*"]),
    prod(62, N::G, &[T("/"), Nt(N::SignedFactor), Nt(N::G)], &["/"]),
    prod(63, N::G, &[], &[";", ",", "]", ")", "+", "-", "<", "=="]),
    prod(64, N::SignedFactor, &[T("+"), Nt(N::Factor)], &["+"]),
    prod(65, N::SignedFactor, &[T("-"), Nt(N::Factor)], &["-"]),
    prod(66, N::SignedFactor, &[Nt(N::Factor)], &["ID", "NUM", "("]),
    prod(67, N::SignedFactorZegond, &[T("+"), Nt(N::Factor)], &["+"]),
    prod(68, N::SignedFactorZegond, &[T("-"), Nt(N::Factor)], &["-"]),
    prod(69, N::SignedFactorZegond, &[Nt(N::FactorZegond)], &["NUM", "("]),
    prod(70, N::Factor, &[T("("), Nt(N::Expression), T(")")], &["("]),
    prod(71, N::Factor, &[T("ID"), Nt(N::VarCallPrime)], &["ID"]),
    prod(72, N::Factor, &[T("NUM")], &["NUM"]),
    prod(73, N::VarCallPrime, &[T("("), Nt(N::Args), T(")")], &["("]),
    prod(74, N::VarCallPrime, &[Nt(N::VarPrime)], &[";", ",", "[", "]", ")", "+", "-", "*", "/", "<", "=="]),
    prod(75, N::VarPrime, &[T("["), Nt(N::Expression), T("]")], &["["]),
    prod(76, N::VarPrime, &[], &[";", ",", "]", ")", "+", "-", "*", "/", "<", "=="]),
    prod(77, N::FactorPrime, &[T("("), Nt(N::Args), T(")")], &["("]),
    prod(78, N::FactorPrime, &[], &[";", ",", "]", ")", "+", "-", "*", "/", "<", "=="]),
    prod(79, N::FactorZegond, &[T("("), Nt(N::Expression), T(")")], &["("]),
    prod(80, N::FactorZegond, &[T("NUM")], &["NUM"]),
    prod(81, N::Args, &[Nt(N::ArgList)], &["ID", "NUM", "(", "+", "-"]),
    prod(82, N::Args, &[], &[")"]),
    prod(83, N::ArgList, &[Nt(N::Expression), Nt(N::ArgListPrime)], &["ID", "NUM", "(", "+", "-"]),
    prod(84, N::ArgListPrime, &[T(","), Nt(N::Expression), Nt(N::ArgListPrime)], &[","]),
    prod(85, N::ArgListPrime, &[], &[")"]),
];

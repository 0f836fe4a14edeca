use crate::{ast::statements::Stmt, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

/// Binary precedence levels, loosest first.
///
/// Each level folds operands parsed at [`BindingPower::next`] with its own
/// operator class. `Unary` has no binary operator and ends the ladder.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
}

impl BindingPower {
    pub fn operator(&self) -> Option<TokenKind> {
        match self {
            BindingPower::LogicalOr => Some(TokenKind::LogicalOr),
            BindingPower::LogicalAnd => Some(TokenKind::LogicalAnd),
            BindingPower::Equality => Some(TokenKind::EqualityOperator),
            BindingPower::Relational => Some(TokenKind::RelationalOperator),
            BindingPower::Additive => Some(TokenKind::AdditiveOperator),
            BindingPower::Multiplicative => Some(TokenKind::MultiplicativeOperator),
            BindingPower::Unary => None,
        }
    }

    pub fn next(&self) -> BindingPower {
        match self {
            BindingPower::LogicalOr => BindingPower::LogicalAnd,
            BindingPower::LogicalAnd => BindingPower::Equality,
            BindingPower::Equality => BindingPower::Relational,
            BindingPower::Relational => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Multiplicative,
            BindingPower::Multiplicative | BindingPower::Unary => BindingPower::Unary,
        }
    }

    /// Whether this level builds `LogicalExpression` rather than `BinaryExpression` nodes.
    pub fn is_logical(&self) -> bool {
        matches!(self, BindingPower::LogicalOr | BindingPower::LogicalAnd)
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

/// Picks the statement rule for a lookahead kind.
pub fn stmt_lookup(kind: Option<TokenKind>) -> StmtHandler {
    let handler: StmtHandler = match kind {
        Some(TokenKind::Semicolon) => parse_empty_stmt,
        Some(TokenKind::If) => parse_if_stmt,
        Some(TokenKind::OpenCurly) => parse_block_stmt,
        Some(TokenKind::Let) => parse_variable_stmt,
        _ => parse_expression_stmt,
    };
    handler
}

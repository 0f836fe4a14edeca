use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("null", TokenKind::Null);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    String,
    Identifier,

    Semicolon,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,
    Comma,

    SimpleAssign,  // =
    ComplexAssign, // += -= *= /=

    AdditiveOperator,       // + -
    MultiplicativeOperator, // * /
    RelationalOperator,     // < <= > >=
    EqualityOperator,       // == !=

    LogicalAnd, // &&
    LogicalOr,  // ||
    LogicalNot, // !

    // Reserved
    Let,
    If,
    Else,
    True,
    False,
    Null,
}

impl TokenKind {
    /// Whether a token of this kind starts a literal expression.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::String
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }

    pub fn is_assignment_operator(&self) -> bool {
        matches!(self, TokenKind::SimpleAssign | TokenKind::ComplexAssign)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Semicolon => ";",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Comma => ",",
            TokenKind::SimpleAssign => "SIMPLE_ASSIGN",
            TokenKind::ComplexAssign => "COMPLEX_ASSIGN",
            TokenKind::AdditiveOperator => "ADDITIVE_OPERATOR",
            TokenKind::MultiplicativeOperator => "MULTIPLICATIVE_OPERATOR",
            TokenKind::RelationalOperator => "RELATIONAL_OPERATOR",
            TokenKind::EqualityOperator => "EQUALITY_OPERATOR",
            TokenKind::LogicalAnd => "LOGICAL_AND",
            TokenKind::LogicalOr => "LOGICAL_OR",
            TokenKind::LogicalNot => "LOGICAL_NOT",
            TokenKind::Let => "let",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
        };
        write!(f, "{}", name)
    }
}

/// A classified slice of source text.
///
/// `value` is the exact matched text: string literals keep their quotes
/// and numbers are not yet converted.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.value)
    }
}

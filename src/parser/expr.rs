use crate::{
    ast::expressions::{
        AssignmentExpr, BinaryExpr, BooleanLiteral, Expr, Identifier, NumericLiteral,
        StringLiteral, UnaryExpr,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

/// Expression: the top of the precedence ladder.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_assignment_expr(parser)
}

/// AssignmentExpression
///  : LogicalOrExpression
///  | Identifier AssignmentOperator AssignmentExpression
///
/// Recursing on the right makes `a = b = 1` group as `a = (b = 1)`.
pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_binary_expr(parser, BindingPower::LogicalOr)?;

    let operator_kind = match parser.current_token_kind() {
        Some(kind) if kind.is_assignment_operator() => kind,
        _ => return Ok(left),
    };

    let operator_token = parser.expect(operator_kind)?;
    let left = check_valid_assignment_target(left, &operator_token)?;
    let right = parse_assignment_expr(parser)?;

    Ok(Expr::Assignment(AssignmentExpr {
        operator: operator_token.value,
        left,
        right: Box::new(right),
    }))
}

fn check_valid_assignment_target(node: Expr, operator_token: &Token) -> Result<Identifier, Error> {
    match node {
        Expr::Identifier(identifier) => Ok(identifier),
        _ => Err(Error::new(
            ErrorImpl::InvalidAssignmentTarget,
            operator_token.span.start.clone(),
        )),
    }
}

/// Parses one precedence level.
///
/// Operands come from the next tighter level; each further operator of this
/// level folds the tree so far into the left side of a new node, which
/// makes every level left-associative.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let operator_kind = match bp.operator() {
        Some(kind) => kind,
        None => return parse_unary_expr(parser),
    };

    let mut left = parse_binary_expr(parser, bp.next())?;

    while parser.current_token_kind() == Some(operator_kind) {
        let operator = parser.expect(operator_kind)?.value;
        let right = parse_binary_expr(parser, bp.next())?;

        let binary = BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        };

        left = if bp.is_logical() {
            Expr::Logical(binary)
        } else {
            Expr::Binary(binary)
        };
    }

    Ok(left)
}

/// UnaryExpression
///  : PrimaryExpression
///  | ADDITIVE_OPERATOR UnaryExpression
///  | LOGICAL_NOT UnaryExpression
pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        Some(kind @ (TokenKind::AdditiveOperator | TokenKind::LogicalNot)) => {
            let operator = parser.expect(kind)?.value;
            let argument = parse_unary_expr(parser)?;

            Ok(Expr::Unary(UnaryExpr {
                operator,
                argument: Box::new(argument),
            }))
        }
        _ => parse_primary_expr(parser),
    }
}

/// PrimaryExpression
///  : Literal
///  | '(' Expression ')'
///  | Identifier
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        Some(kind) if kind.is_literal() => parse_literal(parser),
        Some(TokenKind::OpenParen) => parse_grouping_expr(parser),
        _ => Ok(Expr::Identifier(parse_identifier(parser)?)),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Identifier, Error> {
    let name = parser.expect(TokenKind::Identifier)?.value;

    Ok(Identifier { name })
}

pub fn parse_literal(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        Some(TokenKind::Number) => parse_numeric_literal(parser),
        Some(TokenKind::String) => parse_string_literal(parser),
        Some(kind @ (TokenKind::True | TokenKind::False)) => {
            parser.expect(kind)?;
            Ok(Expr::Boolean(BooleanLiteral {
                value: kind == TokenKind::True,
            }))
        }
        Some(TokenKind::Null) => {
            parser.expect(TokenKind::Null)?;
            Ok(Expr::Null)
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedLiteral {
                token: parser
                    .current_token()
                    .map(|token| token.value.clone())
                    .unwrap_or_default(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_numeric_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::Number)?;

    // Digit runs too long for an f64 parse to infinity rather than failing
    match token.value.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Expr::Numeric(NumericLiteral { value })),
        _ => Err(Error::new(
            ErrorImpl::NumberParseError { token: token.value },
            token.span.start,
        )),
    }
}

/// Drops the delimiting quotes and trims what is left; escapes are not
/// interpreted.
pub fn parse_string_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::String)?;
    let inner = &token.value[1..token.value.len() - 1];

    Ok(Expr::String(StringLiteral {
        value: inner.trim().to_string(),
    }))
}

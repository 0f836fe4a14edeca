use crate::{
    ast::{
        ast::Program,
        statements::{BlockStmt, ExpressionStmt, IfStmt, Stmt, VariableDeclaration, VariableStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_assignment_expr, parse_expr, parse_identifier},
    lookups::stmt_lookup,
    parser::Parser,
};

/// Program
///  : StatementList
pub fn parse_program(parser: &mut Parser) -> Result<Program, Error> {
    let body = parse_stmt_list(parser, None)?;

    Ok(Program { body })
}

/// Parses statements until the input ends or the lookahead is `stop`.
pub fn parse_stmt_list(parser: &mut Parser, stop: Option<TokenKind>) -> Result<Vec<Stmt>, Error> {
    let mut statements = Vec::new();

    while parser.has_tokens() && parser.current_token_kind() != stop {
        statements.push(parse_stmt(parser)?);
    }

    Ok(statements)
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    stmt_lookup(parser.current_token_kind())(parser)
}

pub fn parse_empty_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Empty)
}

/// BlockStatement
///  : '{' OptStatementList '}'
pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let body = if parser.current_token_kind() != Some(TokenKind::CloseCurly) {
        parse_stmt_list(parser, Some(TokenKind::CloseCurly))?
    } else {
        Vec::new()
    };

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Stmt::Block(BlockStmt { body }))
}

/// IfStatement
///  : 'if' '(' Expression ')' Statement
///  | 'if' '(' Expression ')' Statement 'else' Statement
///
/// An `else` belongs to the nearest `if` without one.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::If)?;

    parser.expect(TokenKind::OpenParen)?;
    let test = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let consequent = parse_stmt(parser)?;

    let alternate = if parser.current_token_kind() == Some(TokenKind::Else) {
        parser.expect(TokenKind::Else)?;
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        test,
        consequent: Box::new(consequent),
        alternate,
    }))
}

/// VariableStatement
///  : 'let' VariableDeclarationList ';'
pub fn parse_variable_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Let)?;

    let mut declarations = vec![parse_variable_declaration(parser)?];
    while parser.current_token_kind() == Some(TokenKind::Comma) {
        parser.expect(TokenKind::Comma)?;
        declarations.push(parse_variable_declaration(parser)?);
    }

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Variable(VariableStmt { declarations }))
}

/// VariableDeclaration
///  : Identifier OptVariableInitializer
pub fn parse_variable_declaration(parser: &mut Parser) -> Result<VariableDeclaration, Error> {
    let id = parse_identifier(parser)?;

    let init = if parser.current_token_kind() == Some(TokenKind::SimpleAssign) {
        parser.expect(TokenKind::SimpleAssign)?;
        Some(parse_assignment_expr(parser)?)
    } else {
        None
    };

    Ok(VariableDeclaration { id, init })
}

/// ExpressionStatement
///  : Expression ';'
pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Literals and identifiers
//! - Operator precedence and associativity
//! - Assignment, including invalid targets
//! - Block, if, variable, empty and expression statements
//! - Syntax and lexical errors

use serde_json::json;

use super::parser::{parse, Parser};
use crate::{
    ast::{
        ast::{NodeType, ToJson},
        expressions::Expr,
        statements::Stmt,
    },
    errors::errors::{ErrorImpl, ErrorPhase, ErrorTip},
};

fn parse_ok(source: &str) -> crate::ast::ast::Program {
    parse(source, Some("test.letter".to_string())).unwrap()
}

/// The expression of the single expression statement in `source`.
fn expr_of(source: &str) -> Expr {
    let program = parse_ok(source);
    assert_eq!(program.body.len(), 1);
    match program.body.into_iter().next() {
        Some(Stmt::Expression(stmt)) => stmt.expression,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

#[test]
fn test_parse_numeric_literal() {
    let program = parse_ok("42;");

    assert_eq!(
        program.to_json(),
        json!({
            "type": "Program",
            "body": [{
                "type": "ExpressionStatement",
                "expression": { "type": "NumericLiteral", "value": 42 },
            }],
        })
    );
}

#[test]
fn test_parse_string_literal_strips_and_trims() {
    let expr = expr_of("'  hello ';");

    assert_eq!(expr.to_json(), json!({ "type": "StringLiteral", "value": "hello" }));
}

#[test]
fn test_parse_double_quoted_string() {
    let expr = expr_of(r#""hello";"#);

    assert_eq!(expr.to_json(), json!({ "type": "StringLiteral", "value": "hello" }));
}

#[test]
fn test_parse_boolean_and_null_literals() {
    let program = parse_ok("true; false; null;");

    assert_eq!(
        program.body.to_json(),
        json!([
            { "type": "ExpressionStatement", "expression": { "type": "BooleanLiteral", "value": true } },
            { "type": "ExpressionStatement", "expression": { "type": "BooleanLiteral", "value": false } },
            { "type": "ExpressionStatement", "expression": { "type": "NullLiteral", "value": null } },
        ])
    );
}

#[test]
fn test_parse_identifier() {
    let expr = expr_of("answer;");

    assert_eq!(expr.to_json(), json!({ "type": "Identifier", "name": "answer" }));
}

#[test]
fn test_parse_empty_program() {
    let program = parse_ok("");

    assert!(program.body.is_empty());
    assert_eq!(program.to_json(), json!({ "type": "Program", "body": [] }));
}

#[test]
fn test_parse_whitespace_only_program() {
    assert!(parse_ok("  \n\t ").body.is_empty());
}

#[test]
fn test_statements_in_source_order() {
    let program = parse_ok("42; 'hello'; x;");

    let types: Vec<NodeType> = program
        .body
        .iter()
        .map(|stmt| match stmt {
            Stmt::Expression(stmt) => stmt.expression.get_node_type(),
            other => other.get_node_type(),
        })
        .collect();

    assert_eq!(
        types,
        vec![NodeType::NumericLiteral, NodeType::StringLiteral, NodeType::Identifier]
    );
}

#[test]
fn test_additive_is_left_associative() {
    let expr = expr_of("a - b - c;");

    assert_eq!(
        expr.to_json(),
        json!({
            "type": "BinaryExpression",
            "operator": "-",
            "left": {
                "type": "BinaryExpression",
                "operator": "-",
                "left": { "type": "Identifier", "name": "a" },
                "right": { "type": "Identifier", "name": "b" },
            },
            "right": { "type": "Identifier", "name": "c" },
        })
    );
}

#[test]
fn test_multiplication_binds_tighter() {
    let expr = expr_of("2 + 3 * 4;");

    assert_eq!(
        expr.to_json(),
        json!({
            "type": "BinaryExpression",
            "operator": "+",
            "left": { "type": "NumericLiteral", "value": 2 },
            "right": {
                "type": "BinaryExpression",
                "operator": "*",
                "left": { "type": "NumericLiteral", "value": 3 },
                "right": { "type": "NumericLiteral", "value": 4 },
            },
        })
    );
}

#[test]
fn test_parentheses_override_precedence() {
    let expr = expr_of("(2 + 3) * 4;");

    match expr {
        Expr::Binary(binary) => {
            assert_eq!(binary.operator, "*");
            assert_eq!(binary.left.get_node_type(), NodeType::BinaryExpression);
            assert_eq!(binary.right.get_node_type(), NodeType::NumericLiteral);
        }
        other => panic!("expected a binary expression, got {:?}", other),
    }
}

#[test]
fn test_parenthesized_literal_is_unwrapped() {
    assert_eq!(expr_of("((7));"), expr_of("7;"));
}

#[test]
fn test_equality_over_relational() {
    let expr = expr_of("x > 0 == true;");

    assert_eq!(
        expr.to_json(),
        json!({
            "type": "BinaryExpression",
            "operator": "==",
            "left": {
                "type": "BinaryExpression",
                "operator": ">",
                "left": { "type": "Identifier", "name": "x" },
                "right": { "type": "NumericLiteral", "value": 0 },
            },
            "right": { "type": "BooleanLiteral", "value": true },
        })
    );
}

#[test]
fn test_logical_and_builds_logical_expression() {
    let expr = expr_of("x > 0 && y < 1;");

    assert_eq!(expr.get_node_type(), NodeType::LogicalExpression);
    match expr {
        Expr::Logical(logical) => {
            assert_eq!(logical.operator, "&&");
            assert_eq!(logical.left.get_node_type(), NodeType::BinaryExpression);
            assert_eq!(logical.right.get_node_type(), NodeType::BinaryExpression);
        }
        other => panic!("expected a logical expression, got {:?}", other),
    }
}

#[test]
fn test_and_binds_tighter_than_or() {
    let expr = expr_of("a || b && c;");

    match expr {
        Expr::Logical(logical) => {
            assert_eq!(logical.operator, "||");
            assert_eq!(logical.left.get_node_type(), NodeType::Identifier);
            match *logical.right {
                Expr::Logical(ref inner) => assert_eq!(inner.operator, "&&"),
                ref other => panic!("expected &&, got {:?}", other),
            }
        }
        other => panic!("expected a logical expression, got {:?}", other),
    }
}

#[test]
fn test_relational_operators() {
    for operator in ["<", "<=", ">", ">="] {
        match expr_of(&format!("a {} b;", operator)) {
            Expr::Binary(binary) => assert_eq!(binary.operator, operator),
            other => panic!("expected a binary expression, got {:?}", other),
        }
    }
}

#[test]
fn test_unary_expressions() {
    let expr = expr_of("-x;");
    assert_eq!(
        expr.to_json(),
        json!({
            "type": "UnaryExpression",
            "operator": "-",
            "argument": { "type": "Identifier", "name": "x" },
        })
    );

    let expr = expr_of("!!x;");
    assert_eq!(
        expr.to_json(),
        json!({
            "type": "UnaryExpression",
            "operator": "!",
            "argument": {
                "type": "UnaryExpression",
                "operator": "!",
                "argument": { "type": "Identifier", "name": "x" },
            },
        })
    );
}

#[test]
fn test_unary_binds_tighter_than_binary() {
    match expr_of("-a * b;") {
        Expr::Binary(binary) => {
            assert_eq!(binary.operator, "*");
            assert_eq!(binary.left.get_node_type(), NodeType::UnaryExpression);
        }
        other => panic!("expected a binary expression, got {:?}", other),
    }
}

#[test]
fn test_minus_minus_is_two_unary_operators() {
    match expr_of("--x;") {
        Expr::Unary(outer) => {
            assert_eq!(outer.operator, "-");
            assert_eq!(outer.argument.get_node_type(), NodeType::UnaryExpression);
        }
        other => panic!("expected a unary expression, got {:?}", other),
    }
}

#[test]
fn test_parse_assignment() {
    let expr = expr_of("x = 42;");

    assert_eq!(
        expr.to_json(),
        json!({
            "type": "AssignmentExpression",
            "operator": "=",
            "left": { "type": "Identifier", "name": "x" },
            "right": { "type": "NumericLiteral", "value": 42 },
        })
    );
}

#[test]
fn test_assignment_is_right_associative() {
    let expr = expr_of("a = b = 1;");

    assert_eq!(
        expr.to_json(),
        json!({
            "type": "AssignmentExpression",
            "operator": "=",
            "left": { "type": "Identifier", "name": "a" },
            "right": {
                "type": "AssignmentExpression",
                "operator": "=",
                "left": { "type": "Identifier", "name": "b" },
                "right": { "type": "NumericLiteral", "value": 1 },
            },
        })
    );
}

#[test]
fn test_compound_assignment_keeps_operator() {
    for operator in ["+=", "-=", "*=", "/="] {
        match expr_of(&format!("x {} 2;", operator)) {
            Expr::Assignment(assignment) => {
                assert_eq!(assignment.operator, operator);
                assert_eq!(assignment.left.name, "x");
            }
            other => panic!("expected an assignment, got {:?}", other),
        }
    }
}

#[test]
fn test_assignment_takes_whole_right_side() {
    match expr_of("x = a + b;") {
        Expr::Assignment(assignment) => {
            assert_eq!(assignment.right.get_node_type(), NodeType::BinaryExpression)
        }
        other => panic!("expected an assignment, got {:?}", other),
    }
}

#[test]
fn test_parenthesized_identifier_is_valid_target() {
    assert_eq!(expr_of("(x) = 1;").get_node_type(), NodeType::AssignmentExpression);
}

#[test]
fn test_invalid_assignment_target() {
    let error = parse("1 = 2;", None).unwrap_err();

    assert_eq!(*error.get_internal_error(), ErrorImpl::InvalidAssignmentTarget);
    assert_eq!(error.to_string(), "Invalid left-hand side in assignment expression");
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_binary_expression_is_invalid_target() {
    let error = parse("a + b = c;", None).unwrap_err();

    assert_eq!(*error.get_internal_error(), ErrorImpl::InvalidAssignmentTarget);
}

#[test]
fn test_parse_variable_statement() {
    let program = parse_ok("let x = 3 + 8;");

    assert_eq!(
        program.body.to_json(),
        json!([{
            "type": "VariableStatement",
            "declarations": [{
                "type": "VariableDeclaration",
                "id": { "type": "Identifier", "name": "x" },
                "init": {
                    "type": "BinaryExpression",
                    "operator": "+",
                    "left": { "type": "NumericLiteral", "value": 3 },
                    "right": { "type": "NumericLiteral", "value": 8 },
                },
            }],
        }])
    );
}

#[test]
fn test_parse_variable_without_initializer() {
    let program = parse_ok("let x;");

    match &program.body[0] {
        Stmt::Variable(stmt) => {
            assert_eq!(stmt.declarations.len(), 1);
            assert_eq!(stmt.declarations[0].id.name, "x");
            assert!(stmt.declarations[0].init.is_none());
            assert_eq!(stmt.declarations[0].to_json()["init"], json!(null));
        }
        other => panic!("expected a variable statement, got {:?}", other),
    }
}

#[test]
fn test_parse_multiple_declarations() {
    let program = parse_ok("let a, b = 2, c = d = 3;");

    match &program.body[0] {
        Stmt::Variable(stmt) => {
            let names: Vec<&str> = stmt.declarations.iter().map(|d| d.id.name.as_str()).collect();
            assert_eq!(names, vec!["a", "b", "c"]);
            assert!(stmt.declarations[0].init.is_none());
            assert_eq!(
                stmt.declarations[2].init.as_ref().map(Expr::get_node_type),
                Some(NodeType::AssignmentExpression)
            );
        }
        other => panic!("expected a variable statement, got {:?}", other),
    }
}

#[test]
fn test_parse_empty_block() {
    let program = parse_ok("{}");

    assert_eq!(
        program.to_json(),
        json!({
            "type": "Program",
            "body": [{ "type": "BlockStatement", "body": [] }],
        })
    );
}

#[test]
fn test_parse_nested_blocks() {
    let program = parse_ok("{ 42; { 'hello'; } }");

    match &program.body[0] {
        Stmt::Block(block) => {
            assert_eq!(block.body.len(), 2);
            assert_eq!(block.body[1].get_node_type(), NodeType::BlockStatement);
        }
        other => panic!("expected a block, got {:?}", other),
    }
}

#[test]
fn test_parse_empty_statement() {
    let program = parse_ok(";");

    assert_eq!(program.body, vec![Stmt::Empty]);
    assert_eq!(program.body.to_json(), json!([{ "type": "EmptyStatement" }]));
}

#[test]
fn test_parse_if_statement() {
    let program = parse_ok("if (x) { x = 1; }");

    assert_eq!(
        program.body.to_json(),
        json!([{
            "type": "IfStatement",
            "test": { "type": "Identifier", "name": "x" },
            "consequent": {
                "type": "BlockStatement",
                "body": [{
                    "type": "ExpressionStatement",
                    "expression": {
                        "type": "AssignmentExpression",
                        "operator": "=",
                        "left": { "type": "Identifier", "name": "x" },
                        "right": { "type": "NumericLiteral", "value": 1 },
                    },
                }],
            },
            "alternate": null,
        }])
    );
}

#[test]
fn test_parse_if_else_statement() {
    let program = parse_ok("if (x > 0) y; else z;");

    match &program.body[0] {
        Stmt::If(stmt) => {
            assert_eq!(stmt.test.get_node_type(), NodeType::BinaryExpression);
            assert_eq!(stmt.consequent.get_node_type(), NodeType::ExpressionStatement);
            assert_eq!(
                stmt.alternate.as_ref().map(|alternate| alternate.get_node_type()),
                Some(NodeType::ExpressionStatement)
            );
        }
        other => panic!("expected an if statement, got {:?}", other),
    }
}

#[test]
fn test_else_binds_to_nearest_if() {
    let program = parse_ok("if (a) if (b) x; else y;");

    match &program.body[0] {
        Stmt::If(outer) => {
            assert!(outer.alternate.is_none());
            match outer.consequent.as_ref() {
                Stmt::If(inner) => assert!(inner.alternate.is_some()),
                other => panic!("expected a nested if, got {:?}", other),
            }
        }
        other => panic!("expected an if statement, got {:?}", other),
    }
}

#[test]
fn test_missing_semicolon() {
    let error = parse("42", None).unwrap_err();

    assert_eq!(error.get_phase(), ErrorPhase::Syntax);
    assert_eq!(error.to_string(), "Unexpected end of input, expected: \";\"");
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_unexpected_token_names_expected_kind() {
    let error = parse("let x 5;", None).unwrap_err();

    assert_eq!(error.to_string(), "Unexpected token: \"5\", expected: \";\"");
    assert_eq!(error.get_position().0, 6);
}

#[test]
fn test_missing_identifier_in_declaration() {
    let error = parse("let = 42;", None).unwrap_err();

    assert_eq!(error.to_string(), "Unexpected token: \"=\", expected: \"IDENTIFIER\"");
}

#[test]
fn test_if_requires_parentheses() {
    let error = parse("if x { }", None).unwrap_err();

    assert_eq!(error.to_string(), "Unexpected token: \"x\", expected: \"(\"");
}

#[test]
fn test_unclosed_block() {
    let error = parse("{ 42;", None).unwrap_err();

    assert_eq!(error.to_string(), "Unexpected end of input, expected: \"}\"");
}

#[test]
fn test_unclosed_parenthesis() {
    let error = parse("(1 + 2;", None).unwrap_err();

    assert_eq!(error.to_string(), "Unexpected token: \";\", expected: \")\"");
}

#[test]
fn test_stray_closing_curly() {
    let error = parse("}", None).unwrap_err();

    assert_eq!(error.to_string(), "Unexpected token: \"}\", expected: \"IDENTIFIER\"");
}

#[test]
fn test_lexical_error_aborts_parse() {
    let error = parse("x = 1; y = #;", None).unwrap_err();

    assert_eq!(error.get_phase(), ErrorPhase::Lexical);
    assert_eq!(error.to_string(), "Unexpected token: \"#\"");
    assert_eq!(error.get_position().0, 11);
}

#[test]
fn test_parser_is_reusable() {
    let mut parser = Parser::new(Some("test.letter".to_string()));

    assert!(parser.parse("let x = ;").is_err());

    let program = parser.parse("x;").unwrap();
    assert_eq!(program.body.len(), 1);
    assert_eq!(parser.source(), "x;");
}

#[test]
fn test_error_positions_carry_file_name() {
    let error = parse("let;", Some("main.letter".to_string())).unwrap_err();

    assert_eq!(*error.get_position().1, "main.letter");
}

#[test]
fn test_parser_render_error() {
    let mut parser = Parser::new(None);
    let error = parser.parse("let x = 1\nlet y = 2;").unwrap_err();

    let rendered = parser.render_error(&error);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "Error: UnexpectedToken (Unexpected token: \"let\", expected: \";\")");
    assert_eq!(lines[1], "-> shell");
    assert_eq!(lines[3], "2 | let y = 2;");
    assert_eq!(lines[4], "  | ^");
}

#[test]
fn test_number_too_large_for_f64() {
    let source = format!("x = {};", "9".repeat(400));
    let error = parse(&source, None).unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_phase(), ErrorPhase::Syntax);
    assert_eq!(error.get_position().0, 4);
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("numeric limit")),
        ErrorTip::None => panic!("expected a tip for an oversized number"),
    }
}

#[test]
fn test_largest_finite_number_still_parses() {
    let source = format!("{};", "9".repeat(308));
    let program = parse(&source, None).unwrap();

    match &program.body[0] {
        Stmt::Expression(stmt) => match &stmt.expression {
            Expr::Numeric(number) => assert!(number.value.is_finite()),
            other => panic!("expected a number, got {:?}", other),
        },
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

#[test]
fn test_lexical_error_clears_previous_lookahead() {
    let mut parser = Parser::new(None);
    assert!(parser.parse("let x = 1 2;").is_err());
    assert!(parser.has_tokens());

    assert!(parser.parse("@").is_err());
    assert!(!parser.has_tokens());
}

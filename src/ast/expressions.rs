use serde_json::{json, Value};

use super::ast::{NodeType, ToJson};

/// Expression
///
/// `Logical` and `Binary` share a payload: they differ only in which node
/// kind they report (`&&`/`||` versus everything else).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Assignment(AssignmentExpr),
    Logical(BinaryExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Identifier(Identifier),
    Numeric(NumericLiteral),
    String(StringLiteral),
    Boolean(BooleanLiteral),
    Null,
}

impl Expr {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Expr::Assignment(_) => NodeType::AssignmentExpression,
            Expr::Logical(_) => NodeType::LogicalExpression,
            Expr::Binary(_) => NodeType::BinaryExpression,
            Expr::Unary(_) => NodeType::UnaryExpression,
            Expr::Identifier(_) => NodeType::Identifier,
            Expr::Numeric(_) => NodeType::NumericLiteral,
            Expr::String(_) => NodeType::StringLiteral,
            Expr::Boolean(_) => NodeType::BooleanLiteral,
            Expr::Null => NodeType::NullLiteral,
        }
    }
}

impl ToJson for Expr {
    fn to_json(&self) -> Value {
        let kind = self.get_node_type().as_str();
        match self {
            Expr::Assignment(assignment) => json!({
                "type": kind,
                "operator": assignment.operator,
                "left": assignment.left.to_json(),
                "right": assignment.right.to_json(),
            }),
            Expr::Logical(binary) | Expr::Binary(binary) => json!({
                "type": kind,
                "operator": binary.operator,
                "left": binary.left.to_json(),
                "right": binary.right.to_json(),
            }),
            Expr::Unary(unary) => json!({
                "type": kind,
                "operator": unary.operator,
                "argument": unary.argument.to_json(),
            }),
            Expr::Identifier(identifier) => identifier.to_json(),
            Expr::Numeric(number) => json!({
                "type": kind,
                "value": number.to_json_value(),
            }),
            Expr::String(string) => json!({
                "type": kind,
                "value": string.value,
            }),
            Expr::Boolean(boolean) => json!({
                "type": kind,
                "value": boolean.value,
            }),
            Expr::Null => json!({
                "type": kind,
                "value": Value::Null,
            }),
        }
    }
}

// LITERALS

/// Numeric Literal
#[derive(Debug, Clone, PartialEq)]
pub struct NumericLiteral {
    pub value: f64,
}

impl NumericLiteral {
    // 2^53: beyond this not every integer is representable in an f64
    const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

    /// Integral values become JSON integers so `42` reads back as `42`, not `42.0`.
    fn to_json_value(&self) -> Value {
        if self.value.fract() == 0.0 && self.value.abs() <= Self::MAX_EXACT_INTEGER {
            json!(self.value as i64)
        } else {
            json!(self.value)
        }
    }
}

/// String Literal
/// Holds the text between the quotes, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub value: bool,
}

/// Identifier
/// A name. Also the only valid target of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
}

impl ToJson for Identifier {
    fn to_json(&self) -> Value {
        json!({
            "type": NodeType::Identifier.as_str(),
            "name": self.name,
        })
    }
}

// COMPLEX

/// Binary Expression
/// A left-associated operation between two operands, e.g. `a + b` or `a && b`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Unary Expression
/// A prefix `+`, `-` or `!` applied to its argument.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: String,
    pub argument: Box<Expr>,
}

/// Assignment Expression
/// `left = right`, or a compound form such as `left += right`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub operator: String,
    pub left: Identifier,
    pub right: Box<Expr>,
}

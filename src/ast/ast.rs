use std::fmt::Display;

use serde_json::{json, Value};

use super::statements::Stmt;

/// Node Types
///
/// Every kind of node a parse can produce. The names double as the `type`
/// field of the JSON view.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeType {
    Program,
    ExpressionStatement,
    BlockStatement,
    EmptyStatement,
    VariableStatement,
    VariableDeclaration,
    IfStatement,
    AssignmentExpression,
    LogicalExpression,
    BinaryExpression,
    UnaryExpression,
    Identifier,
    NumericLiteral,
    StringLiteral,
    BooleanLiteral,
    NullLiteral,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Program => "Program",
            NodeType::ExpressionStatement => "ExpressionStatement",
            NodeType::BlockStatement => "BlockStatement",
            NodeType::EmptyStatement => "EmptyStatement",
            NodeType::VariableStatement => "VariableStatement",
            NodeType::VariableDeclaration => "VariableDeclaration",
            NodeType::IfStatement => "IfStatement",
            NodeType::AssignmentExpression => "AssignmentExpression",
            NodeType::LogicalExpression => "LogicalExpression",
            NodeType::BinaryExpression => "BinaryExpression",
            NodeType::UnaryExpression => "UnaryExpression",
            NodeType::Identifier => "Identifier",
            NodeType::NumericLiteral => "NumericLiteral",
            NodeType::StringLiteral => "StringLiteral",
            NodeType::BooleanLiteral => "BooleanLiteral",
            NodeType::NullLiteral => "NullLiteral",
        }
    }
}

impl Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Plain-data view of a node.
///
/// Objects carry a `type` field naming the [`NodeType`] plus the node's own
/// fields (`body`, `expression`, `left`, ...). Missing optional children are
/// `null`.
pub trait ToJson {
    fn to_json(&self) -> Value;
}

impl<T: ToJson> ToJson for Option<T> {
    fn to_json(&self) -> Value {
        match self {
            Some(node) => node.to_json(),
            None => Value::Null,
        }
    }
}

impl<T: ToJson> ToJson for Box<T> {
    fn to_json(&self) -> Value {
        self.as_ref().to_json()
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(ToJson::to_json).collect())
    }
}

/// The root of every parse: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn get_node_type(&self) -> NodeType {
        NodeType::Program
    }
}

impl ToJson for Program {
    fn to_json(&self) -> Value {
        json!({
            "type": NodeType::Program.as_str(),
            "body": self.body.to_json(),
        })
    }
}

use std::slice::Iter;

use serde_json::{json, Value};

use super::{
    ast::{NodeType, ToJson},
    expressions::{Expr, Identifier},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    Block(BlockStmt),
    Empty,
    Variable(VariableStmt),
    If(IfStmt),
}

impl Stmt {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Stmt::Expression(_) => NodeType::ExpressionStatement,
            Stmt::Block(_) => NodeType::BlockStatement,
            Stmt::Empty => NodeType::EmptyStatement,
            Stmt::Variable(_) => NodeType::VariableStatement,
            Stmt::If(_) => NodeType::IfStatement,
        }
    }
}

impl ToJson for Stmt {
    fn to_json(&self) -> Value {
        let kind = self.get_node_type().as_str();
        match self {
            Stmt::Expression(stmt) => json!({
                "type": kind,
                "expression": stmt.expression.to_json(),
            }),
            Stmt::Block(block) => json!({
                "type": kind,
                "body": block.body.to_json(),
            }),
            Stmt::Empty => json!({ "type": kind }),
            Stmt::Variable(stmt) => json!({
                "type": kind,
                "declarations": stmt.declarations.to_json(),
            }),
            Stmt::If(stmt) => json!({
                "type": kind,
                "test": stmt.test.to_json(),
                "consequent": stmt.consequent.to_json(),
                "alternate": stmt.alternate.to_json(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

/// `let a, b = 1;`: one statement, one declaration per name.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableStmt {
    pub declarations: Vec<VariableDeclaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub id: Identifier,
    pub init: Option<Expr>,
}

impl VariableDeclaration {
    pub fn get_node_type(&self) -> NodeType {
        NodeType::VariableDeclaration
    }
}

impl ToJson for VariableDeclaration {
    fn to_json(&self) -> Value {
        json!({
            "type": NodeType::VariableDeclaration.as_str(),
            "id": self.id.to_json(),
            "init": self.init.to_json(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub test: Expr,
    pub consequent: Box<Stmt>,
    pub alternate: Option<Box<Stmt>>,
}

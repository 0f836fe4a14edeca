//! Renders syntax trees back into source text.
//!
//! Every assignment, binary and logical expression is wrapped in
//! parentheses. The parser discards parentheses, so parsing the printed
//! text of a parsed tree gives back the same tree.

use std::fmt::{Display, Formatter, Result};

use super::{
    ast::Program,
    expressions::{Expr, Identifier},
    statements::{Stmt, VariableDeclaration},
};

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, stmt) in self.body.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Stmt::Expression(stmt) => write!(f, "{};", stmt.expression),
            Stmt::Block(block) => {
                if block.body.is_empty() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{")?;
                for stmt in block.iter() {
                    write!(f, " {}", stmt)?;
                }
                write!(f, " }}")
            }
            Stmt::Empty => write!(f, ";"),
            Stmt::Variable(stmt) => {
                write!(f, "let ")?;
                for (i, declaration) in stmt.declarations.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", declaration)?;
                }
                write!(f, ";")
            }
            Stmt::If(stmt) => {
                write!(f, "if ({}) {}", stmt.test, stmt.consequent)?;
                if let Some(alternate) = &stmt.alternate {
                    write!(f, " else {}", alternate)?;
                }
                Ok(())
            }
        }
    }
}

impl Display for VariableDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.init {
            Some(init) => write!(f, "{} = {}", self.id, init),
            None => write!(f, "{}", self.id),
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.name)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::Assignment(assignment) => write!(
                f,
                "({} {} {})",
                assignment.left, assignment.operator, assignment.right
            ),
            Expr::Logical(binary) | Expr::Binary(binary) => {
                write!(f, "({} {} {})", binary.left, binary.operator, binary.right)
            }
            Expr::Unary(unary) => write!(f, "{}{}", unary.operator, unary.argument),
            Expr::Identifier(identifier) => write!(f, "{}", identifier),
            Expr::Numeric(number) => write!(f, "{}", number.value),
            Expr::String(string) => {
                if string.value.contains('"') {
                    write!(f, "'{}'", string.value)
                } else {
                    write!(f, "\"{}\"", string.value)
                }
            }
            Expr::Boolean(boolean) => write!(f, "{}", boolean.value),
            Expr::Null => write!(f, "null"),
        }
    }
}

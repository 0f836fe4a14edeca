//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive descent parser that pulls tokens
//! from the lexer one at a time and builds the syntax tree. It handles:
//!
//! - Statement parsing (blocks, `if`/`else`, `let` declarations, expressions)
//! - Expression parsing by precedence climbing, from assignment down to
//!   literals
//! - Error reporting on the first unexpected token
//!
//! Decisions are made on a single token of lookahead and nothing is ever
//! backtracked.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;

//! Lexical analysis module for the parser.
//!
//! This module contains the lexer (scanner) that converts source text
//! into a lazy stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using an ordered table of regex patterns
//! - Recognition of reserved words, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;

//! Error types and error handling for the parser.
//!
//! This module defines the errors raised while turning source text into
//! a syntax tree. It includes:
//!
//! - Error structures with source position information
//! - Lexical and syntax error variants
//! - Error formatting and display functionality
//! - Helpful suggestions for common mistakes

pub mod errors;

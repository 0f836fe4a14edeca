//! Parser state and token consumption.
//!
//! The parser owns a [`Lexer`] and a single lookahead slot. Grammar rules
//! in [`super::expr`] and [`super::stmt`] inspect the lookahead to pick an
//! alternative and consume tokens through [`Parser::expect`], which pulls
//! the next token from the lexer.

use log::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    render_error, Position,
};

use super::stmt::parse_program;

/// The main parser structure that maintains parsing state.
///
/// A parser handles one parse at a time; each call to [`Parser::parse`]
/// starts from scratch. Use separate instances to parse concurrently.
pub struct Parser {
    /// The source of the current parse, kept for error reports
    source: String,
    /// Produces tokens on demand
    lexer: Lexer,
    /// The next unconsumed token, `None` once the input is exhausted
    lookahead: Option<Token>,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `file` - Name stamped into error positions, `"shell"` if not given
    pub fn new(file: Option<String>) -> Self {
        Parser {
            source: String::new(),
            lexer: Lexer::new(String::new(), file),
            lookahead: None,
        }
    }

    /// Parses `source` into a [`Program`].
    ///
    /// Fails on the first lexical or syntax error; no partial tree is
    /// returned.
    pub fn parse(&mut self, source: &str) -> Result<Program, Error> {
        debug!("parsing {} bytes from {}", source.len(), self.lexer.file());

        self.source = source.to_string();
        self.lexer.init(source.to_string());
        // Cleared first so a lexical error on the first token does not leave
        // the previous parse's lookahead behind.
        self.lookahead = None;
        self.lookahead = self.lexer.next_token()?;

        let program = parse_program(self)?;

        debug!("parsed {} top-level statements", program.body.len());
        Ok(program)
    }

    /// Returns the lookahead token without consuming it.
    pub fn current_token(&self) -> Option<&Token> {
        self.lookahead.as_ref()
    }

    /// Returns the kind of the lookahead token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.lookahead.is_some()
    }

    /// Consumes the lookahead if it is of `expected_kind`.
    ///
    /// # Returns
    ///
    /// The consumed token. Fails with `UnexpectedToken` on a mismatch or
    /// `UnexpectedEndOfInput` if there is no token left.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = match self.lookahead.take() {
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedEndOfInput {
                        expected: expected_kind.to_string(),
                    },
                    self.lexer.get_position(),
                ))
            }
            Some(token) if token.kind != expected_kind => {
                let error = Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.value.clone(),
                        expected: expected_kind.to_string(),
                    },
                    token.span.start.clone(),
                );
                self.lookahead = Some(token);
                return Err(error);
            }
            Some(token) => token,
        };

        trace!("consumed {}", token);
        self.lookahead = self.lexer.next_token()?;

        Ok(token)
    }

    /// Returns the position of the lookahead, or the end of the source.
    pub fn get_position(&self) -> Position {
        match &self.lookahead {
            Some(token) => token.span.start.clone(),
            None => self.lexer.get_position(),
        }
    }

    /// The source of the most recent parse.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Renders `error` against the source of the most recent parse.
    pub fn render_error(&self, error: &Error) -> String {
        render_error(error, &self.source)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new(None)
    }
}

/// Parses source text into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing.
///
/// # Arguments
///
/// * `source` - The full program text
/// * `file` - Name stamped into error positions, `"shell"` if not given
pub fn parse(source: &str, file: Option<String>) -> Result<Program, Error> {
    Parser::new(file).parse(source)
}

use std::rc::Rc;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Turns the text matched by a pattern into a token, or `None` to skip it.
pub type RegexHandler = fn(&Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried top to bottom; the first pattern matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },

        RegexPattern { regex: Regex::new(r"^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new(r"^\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { regex: Regex::new(r"^\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: Regex::new(r"^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },

        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Number) },
        // Identifiers and keywords are ASCII only
        RegexPattern { regex: Regex::new(r"^[A-Za-z0-9_]+").unwrap(), handler: symbol_handler },

        // `==` and `!=` must win over `=` and `!`
        RegexPattern { regex: Regex::new(r"^[=!]=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::EqualityOperator) },
        RegexPattern { regex: Regex::new(r"^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::SimpleAssign) },
        RegexPattern { regex: Regex::new(r"^[*/+\-]=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ComplexAssign) },

        RegexPattern { regex: Regex::new(r"^[+\-]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::AdditiveOperator) },
        RegexPattern { regex: Regex::new(r"^[*/]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MultiplicativeOperator) },

        RegexPattern { regex: Regex::new(r"^[<>]=?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RelationalOperator) },

        RegexPattern { regex: Regex::new(r"^&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LogicalAnd) },
        RegexPattern { regex: Regex::new(r"^\|\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LogicalOr) },
        RegexPattern { regex: Regex::new(r"^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LogicalNot) },

        RegexPattern { regex: Regex::new(r#"^"[^"]*""#).unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::String) },
        RegexPattern { regex: Regex::new(r"^'[^']*'").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::String) },
    ];
}

/// Pulls tokens from a source string one at a time.
///
/// The only state is the source and a byte cursor into it; nothing is
/// buffered between calls to [`Lexer::next_token`].
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    /// Starts over on a new source, keeping the file label.
    pub fn init(&mut self, source: String) {
        self.source = source;
        self.pos = 0;
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn has_more_tokens(&self) -> bool {
        !self.at_eof()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos, Rc::clone(&self.file))
    }

    /// Span of `matched` starting at the cursor.
    pub fn span_of(&self, matched: &str) -> Span {
        Span {
            start: Position(self.pos, Rc::clone(&self.file)),
            end: Position(self.pos + matched.len(), Rc::clone(&self.file)),
        }
    }

    /// Scans the next token.
    ///
    /// Returns `Ok(None)` once the input is exhausted. Input that matches no
    /// pattern is an `UnrecognisedToken` error; the cursor is then moved to
    /// the end so scanning stops there.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        'scan: while !self.at_eof() {
            for pattern in PATTERNS.iter() {
                let matched = match pattern.regex.find(self.remainder()) {
                    Some(found) => found.as_str().to_string(),
                    None => continue,
                };

                let token = (pattern.handler)(self, &matched);
                self.advance_n(matched.len());

                match token {
                    Some(token) => {
                        trace!("scanned {} at {}", token, token.span.start.0);
                        return Ok(Some(token));
                    }
                    None => continue 'scan,
                }
            }

            let error = Error::new(
                ErrorImpl::UnrecognisedToken { token: self.at().to_string() },
                self.get_position(),
            );
            self.pos = self.source.len();
            return Err(error);
        }

        Ok(None)
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

fn skip_handler(_lexer: &Lexer, _matched: &str) -> Option<Token> {
    None
}

fn symbol_handler(lexer: &Lexer, matched: &str) -> Option<Token> {
    let kind = match RESERVED_LOOKUP.get(matched) {
        Some(kind) => *kind,
        None => TokenKind::Identifier,
    };

    Some(MK_TOKEN!(kind, String::from(matched), lexer.span_of(matched)))
}

/// Scans all of `source` up front.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::new(source, file).collect()
}

//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler that emits a fixed kind
//!
//! These macros reduce boilerplate in the pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a handler that turns the matched text into a token of `$kind`.
///
/// The matched text is kept verbatim, so one handler serves every operator
/// in a class (e.g. both `+` and `-` for `AdditiveOperator`).
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^[+\\-]").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::AdditiveOperator),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &Lexer, matched: &str| Some(MK_TOKEN!($kind, String::from(matched), lexer.span_of(matched)))
    };
}

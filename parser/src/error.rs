//! Parser error types.

use crate::Span;
use std::fmt;

/// A syntax error with the offending position in the pattern.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    pub fn unexpected_eof(span: Span, expected: &str) -> Self {
        Self::new(
            format!("unexpected end of pattern, expected {}", expected),
            span,
        )
    }

    pub fn unexpected_token(span: Span, expected: &str, found: &str) -> Self {
        Self::new(format!("expected {}, found {}", expected, found), span)
    }

    pub fn column(&self) -> usize {
        self.span.column
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "syntax error at column {}: {}",
            self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

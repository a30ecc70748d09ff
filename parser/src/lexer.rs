//! Lexer (tokenizer) for pattern text.

use crate::{ParseError, ParseResult, Span};

/// Token types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Integer literal, possibly negative.
    Int(i64),

    // Symbols
    LBracket, // [
    RBracket, // ]
    Comma,    // ,
    Colon,    // :
    Minus,    // -

    // End of pattern
    Eof,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "integer",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Minus => "'-'",
            TokenKind::Eof => "end of pattern",
        }
    }
}

/// A token with its span.
#[derive(Debug, Clone, Copy)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn eof(pos: usize, column: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            span: Span::new(pos, pos, column),
        }
    }
}

/// Lexer state.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    pos: usize,
    column: usize,
    /// Whether the previously emitted token was an integer literal.
    /// A `-` directly followed by a digit is the range separator after an
    /// integer, and the sign of a negative literal everywhere else; a `-`
    /// not followed by a digit is always the separator.
    after_int: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            pos: 0,
            column: 1,
            after_int: false,
        }
    }

    /// Tokenize all input into a vector of tokens, ending with EOF.
    pub fn tokenize(mut self) -> ParseResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.kind, TokenKind::Eof);
            self.after_int = matches!(token.kind, TokenKind::Int(_));
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn span_from(&self, start: usize, start_col: usize) -> Span {
        Span::new(start, self.pos, start_col)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.pos = pos + c.len_utf8();
            self.column += 1;
            Some(c)
        } else {
            None
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> ParseResult<Token> {
        self.skip_whitespace();

        let start = self.pos;
        let start_col = self.column;

        let Some(c) = self.next_char() else {
            return Ok(Token::eof(self.pos, self.column));
        };

        let kind = match c {
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '-' => {
                if !self.after_int && matches!(self.peek_char(), Some('0'..='9')) {
                    self.scan_number(c, start, start_col)?
                } else {
                    TokenKind::Minus
                }
            }
            '0'..='9' => self.scan_number(c, start, start_col)?,
            _ => {
                return Err(ParseError::new(
                    format!("unexpected character '{}'", c),
                    self.span_from(start, start_col),
                ));
            }
        };

        Ok(Token::new(kind, self.span_from(start, start_col)))
    }

    fn scan_number(
        &mut self,
        first: char,
        start: usize,
        start_col: usize,
    ) -> ParseResult<TokenKind> {
        let mut number = String::new();
        number.push(first);

        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                number.push(c);
                self.next_char();
            } else {
                break;
            }
        }

        let value: i64 = number.parse().map_err(|_| {
            ParseError::new(
                format!("invalid integer literal '{}'", number),
                self.span_from(start, start_col),
            )
        })?;
        Ok(TokenKind::Int(value))
    }
}

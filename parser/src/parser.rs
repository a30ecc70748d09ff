//! Recursive-descent parser for the pattern grammar.
//!
//! ```text
//! atom      := N '-' N   inclusive range
//!            | N ':' N   exclusive range
//!            | ':' N     prefix
//!            | N ':'     suffix
//!            | ':'       all
//!            | N         single
//! enumlist  := atom (',' atom)*
//! group     := '[' enumlist ']'
//! pattern   := (group (',' group)*) | enumlist | <empty>
//! ```
//!
//! A pattern starting with `[` is a sequence pattern with one slot per
//! group; any other non-empty pattern is a scalar enumeration; the empty
//! pattern is a scalar with no atoms.

use crate::ast::{Atom, Group, Pattern};
use crate::error::{ParseError, ParseResult};
use crate::lexer::{Lexer, Token, TokenKind};

// ==================== PARSER STATE ====================

/// Parser state.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a new parser from pattern text.
    pub fn new(input: &str) -> ParseResult<Self> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(Self { tokens, pos: 0 })
    }
}

// ==================== TOKEN HELPERS ====================

impl Parser {
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| {
            self.tokens
                .last()
                .expect("tokens should always end with EOF")
        })
    }

    fn advance(&mut self) -> Token {
        let token = *self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
    }

    fn at_eof(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    fn expect(&mut self, kind: &TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let token = self.peek();
            Err(ParseError::unexpected_token(
                token.span,
                kind.name(),
                token.kind.name(),
            ))
        }
    }

    fn expect_int(&mut self) -> ParseResult<i64> {
        match self.peek().kind {
            TokenKind::Int(n) => {
                self.advance();
                Ok(n)
            }
            TokenKind::Eof => Err(ParseError::unexpected_eof(self.peek().span, "integer")),
            _ => {
                let token = self.peek();
                Err(ParseError::unexpected_token(
                    token.span,
                    "integer",
                    token.kind.name(),
                ))
            }
        }
    }

    fn expect_eof(&mut self) -> ParseResult<()> {
        if self.at_eof() {
            Ok(())
        } else {
            let token = self.peek();
            Err(ParseError::unexpected_token(
                token.span,
                "end of pattern",
                token.kind.name(),
            ))
        }
    }
}

// ==================== GRAMMAR PRODUCTIONS ====================

impl Parser {
    /// Parse a whole pattern.
    pub fn parse_pattern(&mut self) -> ParseResult<Pattern> {
        if self.at_eof() {
            // The empty pattern: a single slot with no atoms.
            return Ok(Pattern::Scalar(Vec::new()));
        }
        let pattern = if self.check(&TokenKind::LBracket) {
            let mut groups = vec![self.parse_group()?];
            while self.check(&TokenKind::Comma) {
                self.advance();
                groups.push(self.parse_group()?);
            }
            Pattern::Sequence(groups)
        } else {
            Pattern::Scalar(self.parse_enum()?)
        };
        self.expect_eof()?;
        Ok(pattern)
    }

    /// Parse one bracket group.
    ///
    /// A group containing nested brackets, or nothing at all, is consumed
    /// through its matching `]` and reported as [`Group::Malformed`]; the
    /// predicate compiler turns that into a grouping error carrying the
    /// slot index.
    fn parse_group(&mut self) -> ParseResult<Group> {
        self.expect(&TokenKind::LBracket)?;
        if !self.group_is_flat_enum() {
            self.skip_balanced()?;
            return Ok(Group::Malformed);
        }
        let atoms = self.parse_enum()?;
        self.expect(&TokenKind::RBracket)?;
        Ok(Group::Atoms(atoms))
    }

    /// Whether the group body starting at the current token is a non-empty,
    /// bracket-free run up to its matching `]`.
    fn group_is_flat_enum(&self) -> bool {
        if self.check(&TokenKind::RBracket) {
            return false; // empty group
        }
        for token in &self.tokens[self.pos..] {
            match token.kind {
                TokenKind::LBracket => return false,
                // Unbalanced groups fall through to parse_enum, which
                // reports the missing ']' as a syntax error.
                TokenKind::RBracket | TokenKind::Eof => return true,
                _ => {}
            }
        }
        true
    }

    /// Consume a malformed group body through its matching `]`.
    fn skip_balanced(&mut self) -> ParseResult<()> {
        let mut depth = 1usize;
        loop {
            let token = self.advance();
            match token.kind {
                TokenKind::LBracket => depth += 1,
                TokenKind::RBracket => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                TokenKind::Eof => {
                    return Err(ParseError::unexpected_eof(token.span, "']'"));
                }
                _ => {}
            }
        }
    }

    /// Parse a comma-separated atom enumeration.
    fn parse_enum(&mut self) -> ParseResult<Vec<Atom>> {
        let mut atoms = vec![self.parse_atom()?];
        while self.check(&TokenKind::Comma) {
            self.advance();
            atoms.push(self.parse_atom()?);
        }
        Ok(atoms)
    }

    /// Parse a single atom.
    fn parse_atom(&mut self) -> ParseResult<Atom> {
        if self.check(&TokenKind::Colon) {
            self.advance();
            // ':' followed by an integer is a prefix; bare ':' matches all.
            if matches!(self.peek().kind, TokenKind::Int(_)) {
                return Ok(Atom::Prefix(self.expect_int()?));
            }
            return Ok(Atom::All);
        }

        let lo = self.expect_int()?;
        match self.peek().kind {
            TokenKind::Minus => {
                self.advance();
                let hi = self.expect_int()?;
                Ok(Atom::InclusiveRange(lo, hi))
            }
            TokenKind::Colon => {
                self.advance();
                if matches!(self.peek().kind, TokenKind::Int(_)) {
                    Ok(Atom::ExclusiveRange(lo, self.expect_int()?))
                } else {
                    Ok(Atom::Suffix(lo))
                }
            }
            _ => Ok(Atom::Single(lo)),
        }
    }
}

// ==================== PUBLIC API ====================

/// Parse a pattern string into its AST.
pub fn parse(input: &str) -> ParseResult<Pattern> {
    Parser::new(input)?.parse_pattern()
}

// ==================== TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(input: &str) -> Vec<Atom> {
        match parse(input).unwrap() {
            Pattern::Scalar(atoms) => atoms,
            other => panic!("expected scalar pattern, got {:?}", other),
        }
    }

    fn sequence(input: &str) -> Vec<Group> {
        match parse(input).unwrap() {
            Pattern::Sequence(groups) => groups,
            other => panic!("expected sequence pattern, got {:?}", other),
        }
    }

    // ==================== SCALAR TESTS ====================

    #[test]
    fn test_parse_enumeration() {
        assert_eq!(
            scalar("4,5,7"),
            vec![Atom::Single(4), Atom::Single(5), Atom::Single(7)]
        );
    }

    #[test]
    fn test_parse_atom_forms() {
        assert_eq!(scalar("1-3"), vec![Atom::InclusiveRange(1, 3)]);
        assert_eq!(scalar("1:3"), vec![Atom::ExclusiveRange(1, 3)]);
        assert_eq!(scalar(":5"), vec![Atom::Prefix(5)]);
        assert_eq!(scalar("5:"), vec![Atom::Suffix(5)]);
        assert_eq!(scalar(":"), vec![Atom::All]);
        assert_eq!(scalar("5"), vec![Atom::Single(5)]);
    }

    #[test]
    fn test_parse_mixed_enumeration() {
        assert_eq!(
            scalar("1-3,7,10:"),
            vec![
                Atom::InclusiveRange(1, 3),
                Atom::Single(7),
                Atom::Suffix(10)
            ]
        );
    }

    #[test]
    fn test_parse_negative_bounds() {
        assert_eq!(scalar("-5"), vec![Atom::Single(-5)]);
        assert_eq!(scalar("1--5"), vec![Atom::InclusiveRange(1, -5)]);
        assert_eq!(scalar("-5--3"), vec![Atom::InclusiveRange(-5, -3)]);
        assert_eq!(scalar(":-5"), vec![Atom::Prefix(-5)]);
        assert_eq!(scalar("5:-3"), vec![Atom::ExclusiveRange(5, -3)]);
        assert_eq!(scalar("3,-5"), vec![Atom::Single(3), Atom::Single(-5)]);
    }

    #[test]
    fn test_whitespace_around_separator() {
        assert_eq!(scalar("1 - 5"), scalar("1-5"));
        assert_eq!(scalar("1 -5"), scalar("1-5"));
        assert_eq!(scalar(" 4 , 5 , 7 "), scalar("4,5,7"));
    }

    #[test]
    fn test_parse_empty_pattern() {
        assert_eq!(parse("").unwrap(), Pattern::Scalar(Vec::new()));
        assert_eq!(parse("   ").unwrap(), Pattern::Scalar(Vec::new()));
        assert_eq!(parse("").unwrap().arity(), 1);
    }

    // ==================== SEQUENCE TESTS ====================

    #[test]
    fn test_parse_sequence_pattern() {
        let groups = sequence("[:],[3]");
        assert_eq!(
            groups,
            vec![
                Group::Atoms(vec![Atom::All]),
                Group::Atoms(vec![Atom::Single(3)]),
            ]
        );
        assert_eq!(parse("[:],[3]").unwrap().arity(), 2);
    }

    #[test]
    fn test_parse_single_group() {
        assert_eq!(
            sequence("[1-3,7]"),
            vec![Group::Atoms(vec![
                Atom::InclusiveRange(1, 3),
                Atom::Single(7)
            ])]
        );
    }

    #[test]
    fn test_nested_group_is_malformed() {
        assert_eq!(sequence("[[1]]"), vec![Group::Malformed]);
        assert_eq!(sequence("[1,[2]]"), vec![Group::Malformed]);
        assert_eq!(sequence("[[1],[2]]"), vec![Group::Malformed]);
    }

    #[test]
    fn test_empty_group_is_malformed() {
        assert_eq!(sequence("[]"), vec![Group::Malformed]);
    }

    #[test]
    fn test_malformed_group_position_is_preserved() {
        assert_eq!(
            sequence("[1],[[2]]"),
            vec![Group::Atoms(vec![Atom::Single(1)]), Group::Malformed]
        );
    }

    // ==================== DISPLAY ROUND-TRIP ====================

    #[test]
    fn test_display_round_trip() {
        for input in ["4,5,7", "1-3,7,10:", ":5", "5:", ":", "1--5", "[:],[3]", "[1:3,9],[0:]"] {
            let pattern = parse(input).unwrap();
            assert_eq!(parse(&pattern.to_string()).unwrap(), pattern, "{}", input);
        }
    }

    // ==================== ERROR TESTS ====================

    #[test]
    fn test_unbalanced_bracket() {
        let err = parse("[1,2").unwrap_err();
        assert!(err.message.contains("']'"), "message was: {}", err.message);
    }

    #[test]
    fn test_unbalanced_nested_bracket() {
        assert!(parse("[[1,2").is_err());
    }

    #[test]
    fn test_mixed_scalar_and_group() {
        assert!(parse("1,[2]").is_err());
        assert!(parse("[1],2").is_err());
    }

    #[test]
    fn test_trailing_comma() {
        assert!(parse("1,2,").is_err());
        assert!(parse("[1],").is_err());
    }

    #[test]
    fn test_dangling_range_separator() {
        let err = parse("1-").unwrap_err();
        assert!(
            err.message.contains("end of pattern"),
            "message was: {}",
            err.message
        );
        assert!(parse("-").is_err());
    }

    #[test]
    fn test_detached_sign_is_rejected() {
        // The sign of a negative literal must be adjacent to its digits.
        let err = parse("1,- 5").unwrap_err();
        assert!(
            err.message.contains("expected integer"),
            "message was: {}",
            err.message
        );
    }

    #[test]
    fn test_stray_tokens_after_pattern() {
        assert!(parse("1:2:3").is_err());
        assert!(parse("[1,2]]").is_err());
    }

    #[test]
    fn test_invalid_character() {
        assert!(parse("1,a").is_err());
    }
}

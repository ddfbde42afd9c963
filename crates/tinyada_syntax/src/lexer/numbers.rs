//! Number scanning for the TinyAda lexer
//!
//! Only decimal integer literals exist: a run of ASCII digits.

use super::Lexer;
use super::tokens::{Token, TokenKind};
use crate::source::{CharSource, Span};

impl<S: CharSource> Lexer<'_, S> {
    pub(super) fn integer_token(&mut self, start: usize) -> Token {
        let mut digits = String::new();
        while let Some(c) = self.source.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.source.consume();
        }

        Token::new(TokenKind::Int(digits), Span::new(start, self.source.offset()))
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{TokenKind, lex};

    #[test]
    fn test_digit_run() {
        let tokens = lex("007 42").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Int("007".to_string()));
        assert_eq!(tokens[1].kind, TokenKind::Int("42".to_string()));
    }

    #[test]
    fn test_underscore_ends_literal() {
        // `_` is not a digit and is not a symbol: it cannot start a token.
        let err = lex("1_000").unwrap_err();
        assert_eq!(err.message, "unexpected symbol '_'");
    }
}

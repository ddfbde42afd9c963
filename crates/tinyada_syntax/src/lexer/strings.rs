//! String scanning for the TinyAda lexer
//!
//! A string literal runs from `"` to the next unpaired `"` on the same line. Inside it, `""` stands for one quote
//! character. The token keeps the raw text, quotes included.

use super::Lexer;
use super::tokens::{Token, TokenKind};
use super::vocabulary::STRING_QUOTE;
use crate::diagnostics::CompileError;
use crate::source::{CharSource, Span};

impl<S: CharSource> Lexer<'_, S> {
    pub(super) fn string_token(&mut self, start: usize) -> Result<Token, CompileError> {
        let mut raw = String::new();
        if let Some(quote) = self.source.consume() {
            raw.push(quote);
        }

        loop {
            match self.source.peek() {
                Some(STRING_QUOTE) => {
                    self.source.consume();
                    raw.push(STRING_QUOTE);
                    if self.source.peek() == Some(STRING_QUOTE) {
                        self.source.consume();
                        raw.push(STRING_QUOTE);
                        continue;
                    }
                    return Ok(Token::new(TokenKind::String(raw), Span::new(start, self.source.offset())));
                }
                Some('\n') | None => {
                    return Err(CompileError::lexical(
                        "unterminated string literal",
                        Span::new(start, self.source.offset()),
                    ));
                }
                Some(c) => {
                    raw.push(c);
                    self.source.consume();
                }
            }
        }
    }
}

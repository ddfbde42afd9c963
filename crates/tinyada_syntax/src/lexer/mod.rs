//! Lexer for TinyAda
//!
//! Produces tokens one at a time, on demand, from a [`CharSource`]:
//! - Reserved words and identifiers (maximal munch up to a delimiter, then a reserved-word lookup)
//! - Integer literals (digit strings) and string literals
//! - Operators and punctuation, including the two-character forms `:=` `..` `/=` `<=` `>=` `**`
//! - Newlines, which are real tokens: the recognizer uses line boundaries for error recovery
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `vocabulary` - Lookup tables built from the `tinyada_core` registries
//! - `numbers` - Integer literal scanning
//! - `strings` - String literal scanning

mod numbers;
mod strings;
pub mod tokens;
pub mod vocabulary;

pub use tokens::{Token, TokenKind};
pub use vocabulary::Vocabulary;

use crate::diagnostics::CompileError;
use crate::source::{CharSource, SourceText, Span};
use vocabulary::STRING_QUOTE;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Dispatch on the first significant character:
//
// [skip ' ' '\t' '\r' '\\'] → end of input → Eof (nothing consumed)
//                           → '\n'         → Newline
//                           → letter       → identifier / reserved word
//                           → digit        → integer literal
//                           → '"'          → string literal
//                           → otherwise    → operator / punctuation, or a lexical error
// ============================================================================

/// Lexer for TinyAda source code.
///
/// The lexer holds no token lookahead between calls: each call to [`Lexer::next_token`] consumes exactly the
/// characters of the token it returns (plus any skipped whitespace before it).
pub struct Lexer<'v, S> {
    source: S,
    vocab: &'v Vocabulary,
    /// Set once the iterator has yielded `Eof` or an error.
    finished: bool,
}

impl<'a> Lexer<'static, SourceText<'a>> {
    /// Create a lexer over a string using the standard vocabulary.
    pub fn new(source: &'a str) -> Self {
        Lexer::with_vocabulary(SourceText::new(source), Vocabulary::standard())
    }
}

impl<'v, S: CharSource> Lexer<'v, S> {
    /// Create a lexer over any character source with an injected vocabulary.
    pub fn with_vocabulary(source: S, vocab: &'v Vocabulary) -> Self {
        Self {
            source,
            vocab,
            finished: false,
        }
    }

    /// Scan the next token.
    ///
    /// At end of input this returns `Eof` without consuming anything, so it can be called again.
    ///
    /// ## Errors
    /// Returns a lexical error if the next significant character begins no token.
    pub fn next_token(&mut self) -> Result<Token, CompileError> {
        while let Some(c) = self.source.peek() {
            if self.vocab.is_ignorable(c) {
                self.source.consume();
            } else {
                break;
            }
        }

        let start = self.source.offset();
        let Some(c) = self.source.peek() else {
            return Ok(Token::new(TokenKind::Eof, Span::point(start)));
        };

        let token = if c == '\n' {
            self.source.consume();
            Token::new(TokenKind::Newline, Span::new(start, self.source.offset()))
        } else if c.is_alphabetic() {
            self.alphabetic_token(start)
        } else if c.is_ascii_digit() {
            self.integer_token(start)
        } else if c == STRING_QUOTE {
            self.string_token(start)?
        } else {
            self.source.consume();
            self.operator_token(start, c)?
        };

        tracing::trace!(token = %token.kind, start = token.span.start, end = token.span.end, "scanned token");
        Ok(token)
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    /// Consume everything up to the next delimiter, then classify it.
    ///
    /// Digits and any other non-delimiter characters are folded in, so `beginx` and `x1$` are single identifiers.
    fn alphabetic_token(&mut self, start: usize) -> Token {
        let mut text = String::new();
        while let Some(c) = self.source.peek() {
            if self.vocab.is_delimiter(c) {
                break;
            }
            text.push(c);
            self.source.consume();
        }

        let span = Span::new(start, self.source.offset());
        match self.vocab.reserved(&text) {
            Some(id) => Token::new(TokenKind::Keyword(id), span),
            None => Token::new(TokenKind::Ident(text), span),
        }
    }

    // ========================================================================
    // Operator helpers
    // ========================================================================

    /// Resolve a symbol whose first character `first` has already been consumed.
    ///
    /// A character that can start a two-character symbol is paired with the next character when the pair is a known
    /// symbol; otherwise it stands alone if it is a symbol by itself. A lone `.` is neither.
    fn operator_token(&mut self, start: usize, first: char) -> Result<Token, CompileError> {
        let vocab = self.vocab;

        if vocab.starts_double(first) {
            if let Some(kind) = self.source.peek().and_then(|second| vocab.double(first, second)) {
                self.source.consume();
                return Ok(Token::new(kind.clone(), Span::new(start, self.source.offset())));
            }
        }

        match vocab.single(first) {
            Some(kind) => Ok(Token::new(kind.clone(), Span::new(start, self.source.offset()))),
            None => Err(CompileError::lexical(
                format!("unexpected symbol '{first}'"),
                Span::new(start, self.source.offset()),
            )),
        }
    }
}

/// Yields tokens up to and including the first `Eof`, or up to the first lexical error.
impl<S: CharSource> Iterator for Lexer<'_, S> {
    type Item = Result<Token, CompileError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        match &result {
            Ok(token) if token.kind == TokenKind::Eof => self.finished = true,
            Err(_) => self.finished = true,
            Ok(_) => {}
        }
        Some(result)
    }
}

/// Convenience function to lex a whole source string.
///
/// The returned token stream always ends with an `Eof` token.
///
/// ## Errors
/// Returns the first lexical error; scanning stops there.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, CompileError> {
    Lexer::new(source).collect()
}

// ============================================================================
// TESTS
// ============================================================================

//! Token types for the TinyAda lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words (including the word operators `and`, `or`, `not`, `mod`)
//! - `Operator(OperatorId)` for symbol operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - Reserved words and symbols are fully identified by their ID; only identifiers and literals carry a lexeme.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::source::Span;
use tinyada_core::lang::keywords::{self, KeywordId};
use tinyada_core::lang::operators::{self, OperatorId};
use tinyada_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    /// Digit string, exactly as written.
    Int(String),
    /// Raw text including the enclosing quotes.
    String(String),

    // ========== Layout ==========
    Newline,

    // ========== Special ==========
    Eof,
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The raw text of an identifier or literal token; `None` for every other kind.
    pub fn lexeme(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(s) | TokenKind::Int(s) | TokenKind::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl TokenKind {
    /// Source spelling of the token, as echoed in discard reports.
    pub fn spelling(&self) -> &str {
        match self {
            TokenKind::Keyword(id) => keywords::as_str(*id),
            TokenKind::Operator(id) => operators::as_str(*id),
            TokenKind::Punctuation(id) => punctuation::as_str(*id),
            TokenKind::Ident(s) | TokenKind::Int(s) | TokenKind::String(s) => s.as_str(),
            TokenKind::Newline => "\\n",
            TokenKind::Eof => "",
        }
    }
}

/// Human-readable description, used as the “was detected” part of syntax errors.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(_) | TokenKind::Operator(_) | TokenKind::Punctuation(_) => {
                write!(f, "'{}'", self.spelling())
            }
            TokenKind::Ident(s) => write!(f, "identifier '{s}'"),
            TokenKind::Int(s) => write!(f, "integer literal {s}"),
            TokenKind::String(s) => write!(f, "string literal {s}"),
            TokenKind::Newline => write!(f, "newline"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

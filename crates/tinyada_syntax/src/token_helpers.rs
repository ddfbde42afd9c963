//! Small helper APIs for working with `TokenKind`.
//!
//! These helpers keep `matches!(...)` noise out of the recognizer and answer the set-membership questions it
//! dispatches on, using the `tinyada_core` registries as the source of truth.

use crate::lexer::TokenKind;
use tinyada_core::lang::keywords::{self, KeywordId};
use tinyada_core::lang::operators::{self, OperatorClass, OperatorId};
use tinyada_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id for symbol operators and for the word operators `and`, `or`, `not`, `mod`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            TokenKind::Keyword(id) => operators::from_str(keywords::as_str(*id)),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator (symbol or word).
    pub fn is_operator(&self, id: OperatorId) -> bool {
        self.operator_id() == Some(id)
    }

    /// Grammar class of the operator this token spells, if any.
    pub fn operator_class(&self) -> Option<OperatorClass> {
        self.operator_id().map(operators::class)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, TokenKind::Ident(_))
    }

    /// Can this token begin a basic declaration?
    pub fn starts_declaration(&self) -> bool {
        self.is_identifier() || self.keyword_id().is_some_and(|id| keywords::DECLARATION_HANDLES.contains(&id))
    }

    /// Can this token begin a compound statement?
    pub fn starts_compound_statement(&self) -> bool {
        self.keyword_id()
            .is_some_and(|id| keywords::COMPOUND_STATEMENT_HANDLES.contains(&id))
    }

    /// Does this token close a sequence of statements? End of input always does.
    pub fn ends_sequence(&self) -> bool {
        matches!(self, TokenKind::Eof) || self.keyword_id().is_some_and(|id| keywords::SEQUENCE_TERMINATORS.contains(&id))
    }
}

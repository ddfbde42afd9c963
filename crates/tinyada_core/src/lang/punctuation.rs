//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens: delimiters, separators and the two
//! compound markers `:=` and `..`.
//!
//! ## Examples
//! ```rust
//! use tinyada_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(":="), Some(PunctuationId::Assign));
//! assert_eq!(punctuation::as_str(PunctuationId::DotDot), "..");
//! ```

/// How a punctuation token is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// `(` and `)`.
    Delimiter,
    /// `,` `;` `:`.
    Separator,
    /// `:=` and `..`.
    Marker,
}

/// Punctuation token identity; the discriminant is the token's index in [`PUNCTUATION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    Comma,
    Semicolon,
    Colon,
    Assign,
    DotDot,
    LParen,
    RParen,
}

#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
}

/// Every punctuation token, indexed by [`PunctuationId`].
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator),
    info(PunctuationId::Assign, ":=", PunctuationCategory::Marker),
    info(PunctuationId::DotDot, "..", PunctuationCategory::Marker),
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
];

pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    &PUNCTUATION[id as usize]
}

/// Look up `:=`, `;` and friends by spelling.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}

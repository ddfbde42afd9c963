//! Lexer vocabulary: the lookup tables the scanner consults.
//!
//! A [`Vocabulary`] is an immutable value built from the `tinyada_core::lang` registries and handed to the
//! [`Lexer`](super::Lexer) at construction. Nothing in the lexer hard-codes a reserved word or a symbol spelling.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use super::tokens::TokenKind;
use tinyada_core::lang::keywords::{self, KeywordId};
use tinyada_core::lang::operators;
use tinyada_core::lang::punctuation;

/// Characters skipped between tokens. Newline is deliberately absent: it is a token.
pub const IGNORABLE: &[char] = &[' ', '\t', '\r', '\\'];

/// Opening (and closing) quote of a string literal.
pub const STRING_QUOTE: char = '"';

/// Lookup tables for one lexing session.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    reserved: HashMap<&'static str, KeywordId>,
    singles: HashMap<char, TokenKind>,
    doubles: HashMap<(char, char), TokenKind>,
    double_starts: HashSet<char>,
    delimiters: HashSet<char>,
    ignorable: HashSet<char>,
}

impl Vocabulary {
    /// Build the tables from the `tinyada_core` registries.
    pub fn from_registries() -> Self {
        let reserved = keywords::KEYWORDS.iter().map(|k| (k.canonical, k.id)).collect();

        let mut singles = HashMap::new();
        let mut doubles = HashMap::new();
        let mut double_starts = HashSet::new();

        let symbols = operators::symbols()
            .map(|o| (o.spelling, TokenKind::Operator(o.id)))
            .chain(
                punctuation::PUNCTUATION
                    .iter()
                    .map(|p| (p.canonical, TokenKind::Punctuation(p.id))),
            );

        for (spelling, kind) in symbols {
            let mut chars = spelling.chars();
            match (chars.next(), chars.next()) {
                (Some(first), None) => {
                    singles.insert(first, kind);
                }
                (Some(first), Some(second)) => {
                    double_starts.insert(first);
                    doubles.insert((first, second), kind);
                }
                _ => {}
            }
        }

        let ignorable: HashSet<char> = IGNORABLE.iter().copied().collect();

        // An identifier ends at whitespace, at a string quote, or at anything that can start a symbol.
        let mut delimiters: HashSet<char> = ignorable.clone();
        delimiters.insert('\n');
        delimiters.insert(STRING_QUOTE);
        delimiters.extend(singles.keys().copied());
        delimiters.extend(double_starts.iter().copied());

        Self {
            reserved,
            singles,
            doubles,
            double_starts,
            delimiters,
            ignorable,
        }
    }

    /// Shared instance built from the standard registries.
    pub fn standard() -> &'static Vocabulary {
        static STANDARD: OnceLock<Vocabulary> = OnceLock::new();
        STANDARD.get_or_init(Vocabulary::from_registries)
    }

    /// Resolve a spelling to a reserved word.
    pub fn reserved(&self, spelling: &str) -> Option<KeywordId> {
        self.reserved.get(spelling).copied()
    }

    /// Token for a one-character symbol.
    pub fn single(&self, c: char) -> Option<&TokenKind> {
        self.singles.get(&c)
    }

    /// Token for a two-character symbol.
    pub fn double(&self, first: char, second: char) -> Option<&TokenKind> {
        self.doubles.get(&(first, second))
    }

    /// `true` if `c` can begin a two-character symbol (`/ : < > * .`).
    pub fn starts_double(&self, c: char) -> bool {
        self.double_starts.contains(&c)
    }

    /// `true` if `c` ends an identifier or reserved word.
    pub fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }

    /// `true` if `c` is skipped between tokens.
    pub fn is_ignorable(&self, c: char) -> bool {
        self.ignorable.contains(&c)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::from_registries()
    }
}

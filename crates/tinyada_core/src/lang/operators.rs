//! Operator vocabulary.
//!
//! This module defines the canonical operator set (symbol operators like `+` and word operators like `and`) along
//! with the operator class the recognizer dispatches on.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Some operators are spelled using reserved words (e.g. `"mod"`). Those entries have
//!   [`OperatorInfo::is_keyword_spelling`] set to `true`, and the lexer produces keyword tokens for them.
//! - Classes mirror the grammar's operator nonterminals; there is no precedence table because precedence is encoded
//!   in the grammar (`expression` > `relation` > `simpleExpression` > `term` > `factor`).
//!
//! ## Examples
//! ```rust
//! use tinyada_core::lang::operators::{self, OperatorClass, OperatorId};
//!
//! assert_eq!(operators::from_str("/="), Some(OperatorId::NotEq));
//! assert_eq!(operators::class(OperatorId::Mod), OperatorClass::Multiplying);
//! ```

/// Grammar class of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    /// `=` `/=` `<` `<=` `>` `>=`
    Relational,
    /// `+` `-` (binary, or a single leading sign)
    Adding,
    /// `*` `/` `mod`
    Multiplying,
    /// `**`
    Power,
    /// `and` `or`
    Logical,
    /// `not`
    Negation,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Adding
    Plus,
    Minus,

    // Multiplying
    Star,
    Slash,
    Mod,

    // Power
    StarStar,

    // Relational
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Word operators
    And,
    Or,
    Not,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub class: OperatorClass,
    pub is_keyword_spelling: bool,
}

/// Registry of all operators, in [`OperatorId`] order.
pub const OPERATORS: &[OperatorInfo] = &[
    // Adding
    op(OperatorId::Plus, "+", OperatorClass::Adding, false),
    op(OperatorId::Minus, "-", OperatorClass::Adding, false),
    // Multiplying
    op(OperatorId::Star, "*", OperatorClass::Multiplying, false),
    op(OperatorId::Slash, "/", OperatorClass::Multiplying, false),
    op(OperatorId::Mod, "mod", OperatorClass::Multiplying, true),
    // Power
    op(OperatorId::StarStar, "**", OperatorClass::Power, false),
    // Relational
    op(OperatorId::Eq, "=", OperatorClass::Relational, false),
    op(OperatorId::NotEq, "/=", OperatorClass::Relational, false),
    op(OperatorId::Lt, "<", OperatorClass::Relational, false),
    op(OperatorId::LtEq, "<=", OperatorClass::Relational, false),
    op(OperatorId::Gt, ">", OperatorClass::Relational, false),
    op(OperatorId::GtEq, ">=", OperatorClass::Relational, false),
    // Word operators
    op(OperatorId::And, "and", OperatorClass::Logical, true),
    op(OperatorId::Or, "or", OperatorClass::Logical, true),
    op(OperatorId::Not, "not", OperatorClass::Negation, true),
];

/// Return the spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the grammar class for an operator.
pub fn class(id: OperatorId) -> OperatorClass {
    info_for(id).class
}

pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Resolve an operator spelling (symbol or word) to its identifier.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == s).map(|o| o.id)
}

/// Iterate over the operators spelled with symbols (the ones the lexer scans as operator tokens).
pub fn symbols() -> impl Iterator<Item = &'static OperatorInfo> {
    OPERATORS.iter().filter(|o| !o.is_keyword_spelling)
}

const fn op(id: OperatorId, spelling: &'static str, class: OperatorClass, is_keyword_spelling: bool) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        class,
        is_keyword_spelling,
    }
}

//! Define the reserved-word vocabulary for TinyAda.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `Begin` is an identifier, `begin` is reserved.
//! - Some reserved words are also “word operators” (`and`, `or`, `not`, `mod`). If you need the operator class, use
//!   [`crate::lang::operators`].
//!
//! ## Examples
//! ```rust
//! use tinyada_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("elsif"), Some(KeywordId::Elsif));
//! assert_eq!(keywords::from_str("beginx"), None);
//! ```

/// Stable identifier for every reserved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Subprogram structure
    Procedure,
    Is,
    Begin,
    End,

    // Declarations
    Type,
    Range,
    Array,
    Of,
    Constant,

    // Parameter modes
    In,
    Out,

    // Statements / control flow
    If,
    Then,
    Elsif,
    Else,
    While,
    Loop,
    Exit,
    When,
    Null,

    // Word operators
    Not,
    And,
    Or,
    Mod,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Structure,
    Declaration,
    Mode,
    ControlFlow,
    Operator,
}

/// Metadata for a reserved word.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub description: &'static str,
}

/// Registry of all reserved words.
///
/// ## Notes
/// - Entries follow the declaration order of [`KeywordId`], so an id indexes its own entry.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Subprogram structure
    info(KeywordId::Procedure, "procedure", KeywordCategory::Structure, "Introduces a subprogram specification."),
    info(KeywordId::Is, "is", KeywordCategory::Structure, "Separates a header from its body or definition."),
    info(KeywordId::Begin, "begin", KeywordCategory::Structure, "Opens the statement part of a subprogram body."),
    info(KeywordId::End, "end", KeywordCategory::Structure, "Closes a subprogram body, `if` or `loop`."),
    // Declarations
    info(KeywordId::Type, "type", KeywordCategory::Declaration, "Introduces a type declaration."),
    info(KeywordId::Range, "range", KeywordCategory::Declaration, "Introduces a `low .. high` range."),
    info(KeywordId::Array, "array", KeywordCategory::Declaration, "Introduces an array type definition."),
    info(KeywordId::Of, "of", KeywordCategory::Declaration, "Names the component type of an array."),
    info(KeywordId::Constant, "constant", KeywordCategory::Declaration, "Marks a number declaration."),
    // Parameter modes
    info(KeywordId::In, "in", KeywordCategory::Mode, "Input parameter mode."),
    info(KeywordId::Out, "out", KeywordCategory::Mode, "Output parameter mode."),
    // Statements / control flow
    info(KeywordId::If, "if", KeywordCategory::ControlFlow, "Opens a conditional statement."),
    info(KeywordId::Then, "then", KeywordCategory::ControlFlow, "Separates a condition from its branch."),
    info(KeywordId::Elsif, "elsif", KeywordCategory::ControlFlow, "Opens an additional conditional branch."),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow, "Opens the fallback branch."),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow, "Introduces a loop iteration scheme."),
    info(KeywordId::Loop, "loop", KeywordCategory::ControlFlow, "Opens (or with `end`, closes) a loop body."),
    info(KeywordId::Exit, "exit", KeywordCategory::ControlFlow, "Leaves the enclosing loop."),
    info(KeywordId::When, "when", KeywordCategory::ControlFlow, "Guards an `exit` statement."),
    info(KeywordId::Null, "null", KeywordCategory::ControlFlow, "The empty statement."),
    // Word operators
    info(KeywordId::Not, "not", KeywordCategory::Operator, "Logical negation."),
    info(KeywordId::And, "and", KeywordCategory::Operator, "Logical conjunction."),
    info(KeywordId::Or, "or", KeywordCategory::Operator, "Logical disjunction."),
    info(KeywordId::Mod, "mod", KeywordCategory::Operator, "Modulus (multiplying operator)."),
];

/// Reserved words that begin a basic declaration (an identifier also does; see the recognizer).
pub const DECLARATION_HANDLES: &[KeywordId] = &[KeywordId::Type, KeywordId::Procedure];

/// Reserved words that begin a compound statement.
pub const COMPOUND_STATEMENT_HANDLES: &[KeywordId] = &[KeywordId::If, KeywordId::While, KeywordId::Loop];

/// Reserved words that close a sequence of statements.
pub const SEQUENCE_TERMINATORS: &[KeywordId] = &[KeywordId::End, KeywordId::Elsif, KeywordId::Else];

/// Return the canonical spelling for a reserved word.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a reserved word.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return the full metadata entry for a reserved word.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Resolve a spelling to a reserved word, if it is one.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    description: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("loop"), Some(KeywordId::Loop));
        assert_eq!(from_str("Loop"), None);
        assert_eq!(from_str("LOOP"), None);
    }

    #[test]
    fn test_word_operators_are_operator_category() {
        for id in [KeywordId::Not, KeywordId::And, KeywordId::Or, KeywordId::Mod] {
            assert_eq!(category(id), KeywordCategory::Operator, "{id:?}");
        }
    }

    #[test]
    fn test_handle_sets_are_disjoint() {
        for id in DECLARATION_HANDLES {
            assert!(!COMPOUND_STATEMENT_HANDLES.contains(id));
            assert!(!SEQUENCE_TERMINATORS.contains(id));
        }
        for id in COMPOUND_STATEMENT_HANDLES {
            assert!(!SEQUENCE_TERMINATORS.contains(id));
        }
    }
}

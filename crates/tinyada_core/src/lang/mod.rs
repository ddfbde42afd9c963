//! TinyAda language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved words, operators and punctuation.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via registry
//! tables instead of comparing strings.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no IO, no side effects.
//! - The lexer/recognizer enforce syntax; registries only provide spellings, classes and membership sets.
//!
//! ## Examples
//! ```rust
//! use tinyada_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("begin"), Some(KeywordId::Begin));
//! assert_eq!(keywords::as_str(KeywordId::Begin), "begin");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;

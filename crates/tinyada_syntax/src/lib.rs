//! Syntax front end for TinyAda: character source, lexer, recognizer, diagnostics.
//!
//! The front end answers one question about a source text: does it conform to the TinyAda grammar for a
//! subprogram body? It reports every syntax error it can recover from along the way.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it builds no tree, resolves no names and checks no types.
//! - Vocabulary identity (reserved words/operators/punctuation) comes from `tinyada_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use tinyada_syntax::recognizer;
//!
//! let recognition = recognizer::recognize("procedure Foo is begin null; end Foo;");
//! assert!(recognition.is_accepted());
//! ```

pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod recognizer;
pub mod source;
pub mod token_helpers;

pub use config::RecognizerConfig;
pub use diagnostics::{Collector, CompileError, DiagnosticSink, ErrorKind, RecoveryNote, Resume};
pub use lexer::{Lexer, Token, TokenKind, Vocabulary, lex};
pub use recognizer::{Recognition, Verdict, recognize, recognize_with};
pub use source::{CharSource, SourceText, Span};

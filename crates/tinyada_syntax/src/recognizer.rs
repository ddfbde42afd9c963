//! Recognizer for TinyAda
//!
//! Checks a token stream against the TinyAda grammar with single-token-lookahead recursive descent. No tree is
//! built: each grammar rule either succeeds or fails with a [`CompileError`].
//!
//! Error recovery works at two granularities:
//! - **phrase level**: every syntax error discards the rest of the offending line;
//! - **phase level**: the subprogram body, the declarative part, statements and loops catch failures of their parts
//!   and resume at the next part.
//!
//! Nesting of bodies, statements and expressions is bounded by [`RecognizerConfig::max_nesting`]. A construct
//! nested past the bound is reported once and abandoned up to the next declaration or statement of the outermost
//! subprogram body.
//!
//! ## Examples
//!
//! ```rust
//! use tinyada_syntax::recognizer::{self, Verdict};
//!
//! let recognition = recognizer::recognize("procedure Foo is\nX : ;\nbegin null; end Foo;");
//! assert_eq!(recognition.verdict, Verdict::Rejected);
//! assert_eq!(recognition.errors.len(), 1);
//! ```

use std::fmt;

use crate::config::RecognizerConfig;
use crate::diagnostics::{Collector, CompileError, DiagnosticSink, RecoveryNote, Resume};
use crate::lexer::{Lexer, Token, TokenKind, Vocabulary};
use crate::source::{CharSource, SourceText, Span};
use tinyada_core::lang::keywords::{self, KeywordId};
use tinyada_core::lang::operators::{OperatorClass, OperatorId};
use tinyada_core::lang::punctuation::{self, PunctuationId};

// NOTE: This module is split across multiple files using `include!` to keep all recognizer
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("recognizer/core.rs");
include!("recognizer/helpers.rs");
include!("recognizer/decl.rs");
include!("recognizer/stmts.rs");
include!("recognizer/expr.rs");
include!("recognizer/api.rs");
include!("recognizer/tests.rs");

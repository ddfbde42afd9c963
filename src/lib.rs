#![forbid(unsafe_code)]
//! TinyAda syntax checker
//!
//! TinyAda is a small Pascal/Ada-style procedural language. This crate checks source files against its grammar:
//! the lexer and recursive-descent recognizer live in `tinyada_syntax`, the vocabulary registries in
//! `tinyada_core`, and the command-line driver here.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: registry lookups by id (`info_for`) panic only if a registry entry is missing, which is a
//!   programming error caught by the registry guardrail tests.

pub mod cli;

pub use tinyada_core::lang;
pub use tinyada_syntax::{config, diagnostics, lexer, recognizer, source};

pub use tinyada_syntax::{CompileError, Recognition, RecognizerConfig, Verdict, recognize, recognize_with};

//! Canonical language vocabulary for the TinyAda front end.
//!
//! This crate is intentionally small and dependency-free. It holds the token-category tables the lexer consults
//! and the membership sets the recognizer dispatches on.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no lexer/recognizer types.
//! - Tables are `const` so they can be shared freely between threads and sessions.

pub mod lang;

//! Diagnostics and error reporting for the TinyAda front end.
//!
//! Two error kinds exist. A **lexical** error (a character that begins no token) ends the session. A **syntax**
//! error (the lookahead does not fit the grammar) is reported, the rest of the offending line is discarded, and the
//! nearest enclosing recovery point decides whether parsing continues.
//!
//! Diagnostics are pushed into a [`DiagnosticSink`] as they happen, so a driver can print them in source order
//! without waiting for the session to end.

use std::fmt;

use miette::LabeledSpan;
use thiserror::Error;

use crate::source::Span;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// A positioned lexical or syntax error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub kind: ErrorKind,
    pub message: String,
    pub span: Span,
}

impl CompileError {
    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ErrorKind::Lexical,
            message: message.into(),
            span,
        }
    }

    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            span,
        }
    }

    /// Syntax errors can be recovered from; lexical errors cannot.
    pub fn is_recoverable(&self) -> bool {
        self.kind == ErrorKind::Syntax
    }
}

impl miette::Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.kind {
            ErrorKind::Lexical => "tinyada::lexical",
            ErrorKind::Syntax => "tinyada::syntax",
        };
        Some(Box::new(code))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = match self.kind {
            ErrorKind::Lexical => "not the start of any token",
            ErrorKind::Syntax => "detected here",
        };
        Some(Box::new(std::iter::once(LabeledSpan::at(
            self.span.start..self.span.end,
            label,
        ))))
    }
}

// ============================================================================
// Recovery notes
// ============================================================================

/// Where parsing resumed (or stopped) after a syntax error was caught.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resume {
    /// Subprogram specification or `is` failed.
    DeclarativePart,
    /// Declarative part failed.
    Begin,
    /// `begin` failed.
    Statements,
    /// Statement sequence failed.
    End,
    /// `end [identifier] ;` failed; nothing of the body is left to parse.
    StopBody,
    /// One basic declaration failed.
    NextDeclaration,
    /// One statement failed.
    NextStatement,
    /// `[while condition] loop` failed.
    LoopBody,
    /// `end loop ;` failed.
    StopLoop,
}

impl fmt::Display for Resume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Resume::DeclarativePart => "continue parsing from declarative part of subprogram body",
            Resume::Begin => "continue parsing from [begin] of subprogram body",
            Resume::Statements => "continue parsing from sequence of statements of subprogram body",
            Resume::End => "continue parsing from [end] of subprogram body",
            Resume::StopBody => "stop parsing subprogram body",
            Resume::NextDeclaration => "continue parsing basic declaration of declarative part",
            Resume::NextStatement => "continue parsing next statement",
            Resume::LoopBody => "continue parsing from sequence of statements of loop statement",
            Resume::StopLoop => "stop parsing loop statement",
        };
        f.write_str(text)
    }
}

/// Informational event emitted while recovering from a syntax error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryNote {
    /// Phrase-level discard threw away the rest of a line.
    Discarded { tokens: Vec<String>, span: Span },
    /// A recovery point caught an error.
    Resumed { at: Resume },
}

impl fmt::Display for RecoveryNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryNote::Discarded { tokens, .. } => {
                write!(f, "trailing tokens: {} were discarded", tokens.join(" "))
            }
            RecoveryNote::Resumed { at } => write!(f, "{at}"),
        }
    }
}

// ============================================================================
// Sinks
// ============================================================================

/// Receiver for diagnostics produced during a recognition session.
///
/// Reporting never changes parse state.
pub trait DiagnosticSink {
    fn error(&mut self, error: &CompileError);

    fn note(&mut self, _note: &RecoveryNote) {}
}

/// In-memory sink that keeps everything in report order.
#[derive(Debug, Clone, Default)]
pub struct Collector {
    pub errors: Vec<CompileError>,
    pub notes: Vec<RecoveryNote>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for Collector {
    fn error(&mut self, error: &CompileError) {
        self.errors.push(error.clone());
    }

    fn note(&mut self, note: &RecoveryNote) {
        self.notes.push(note.clone());
    }
}

// ============================================================================
// Plain-text rendering
// ============================================================================

/// Get 1-based line number, 1-based column and the line's text for a byte offset.
pub fn line_col(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let mut line_start = 0;
    let mut line_num = 1;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());
    let col = source[line_start..offset].chars().count() + 1;

    (line_num, col, &source[line_start..line_end])
}

/// Format an error as a single `file:line:col: kind: message` line.
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let (line, col, _) = line_col(source, error.span.start);
    format!("{file_name}:{line}:{col}: {error}\n")
}

//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::PathBuf;

use miette::{NamedSource, Report};
use tinyada_syntax::diagnostics::{self, CompileError, DiagnosticSink, RecoveryNote};
use tinyada_syntax::lexer::{self, Vocabulary};
use tinyada_syntax::recognizer::{self, Verdict};
use tinyada_syntax::RecognizerConfig;

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file, refusing files over [`MAX_SOURCE_SIZE`].
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

// ============================================================================
// Console output
// ============================================================================

/// Sink that renders errors as miette reports on stderr and notes as plain lines.
struct ConsoleSink<'a> {
    file_name: &'a str,
    source: &'a str,
}

impl DiagnosticSink for ConsoleSink<'_> {
    fn error(&mut self, error: &CompileError) {
        let report =
            Report::new(error.clone()).with_source_code(NamedSource::new(self.file_name, self.source.to_string()));
        eprintln!("{report:?}");
    }

    fn note(&mut self, note: &RecoveryNote) {
        eprintln!("  note: {note}");
    }
}

/// Source text with right-aligned line numbers.
pub fn render_listing(source: &str) -> String {
    let width = source.lines().count().max(1).to_string().len();
    let mut out = String::new();
    for (i, line) in source.lines().enumerate() {
        out.push_str(&format!("{:>width$} | {}\n", i + 1, line));
    }
    out
}

// ============================================================================
// Commands
// ============================================================================

/// Check each file against the grammar, printing diagnostics as they are found.
///
/// Returns `FAILURE` if any file is not accepted. A file that cannot be read stops the run.
pub fn check_files(files: &[PathBuf], config: &RecognizerConfig, listing: bool) -> CliResult<ExitCode> {
    let mut all_accepted = true;

    for path in files {
        let file_name = path.to_string_lossy();
        let source = read_source(&file_name)?;

        if listing {
            print!("{}", render_listing(&source));
        }

        let mut sink = ConsoleSink {
            file_name: &file_name,
            source: &source,
        };
        let verdict = recognizer::recognize_with(&source, config, Vocabulary::standard(), &mut sink);
        tracing::info!(file = %file_name, %verdict, "checked");

        match verdict {
            Verdict::Accepted => println!("✓ {file_name}: syntax check passed"),
            Verdict::Rejected => println!("✗ {file_name}: syntax errors found"),
            Verdict::Aborted => println!("✗ {file_name}: recognition aborted"),
        }
        all_accepted &= verdict.is_accepted();
    }

    Ok(if all_accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Tokenize and display tokens.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = match lexer::lex(&source) {
        Ok(toks) => toks,
        Err(err) => {
            let msg = diagnostics::format_error(file_path, &source, &err);
            return Err(CliError::failure(msg.trim_end()));
        }
    };

    for tok in &tokens {
        let (line, col, _) = diagnostics::line_col(&source, tok.span.start);
        println!("{line:>4}:{col:<4} {tok}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Everything one recognition session produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognition {
    pub verdict: Verdict,
    /// Lexical and syntax errors, in report order.
    pub errors: Vec<CompileError>,
    /// Discards and recovery points, in report order.
    pub notes: Vec<RecoveryNote>,
}

impl Recognition {
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }
}

/// Recognize a source string with the default configuration and vocabulary.
///
/// This is the main public entrypoint; diagnostics are collected into the returned [`Recognition`].
pub fn recognize(source: &str) -> Recognition {
    let mut sink = Collector::new();
    let verdict = recognize_with(source, &RecognizerConfig::default(), Vocabulary::standard(), &mut sink);
    Recognition {
        verdict,
        errors: sink.errors,
        notes: sink.notes,
    }
}

/// Recognize a source string, streaming diagnostics into `sink` as they are detected.
///
/// ## Parameters
/// - `config`: recovery behaviour (fail-fast, end-of-input check).
/// - `vocabulary`: lexer tables; usually [`Vocabulary::standard`].
/// - `sink`: receives every error and recovery note.
#[tracing::instrument(skip_all, fields(source_len = source.len(), fail_fast = config.fail_fast))]
pub fn recognize_with(
    source: &str,
    config: &RecognizerConfig,
    vocabulary: &Vocabulary,
    sink: &mut dyn DiagnosticSink,
) -> Verdict {
    let lexer = Lexer::with_vocabulary(SourceText::new(source), vocabulary);
    let verdict = Recognizer::new(lexer, *config, sink).run();
    tracing::debug!(%verdict, "recognition finished");
    verdict
}

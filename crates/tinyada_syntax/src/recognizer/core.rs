/// Recognizer core types and entrypoint.
///
/// This chunk defines the [`Recognizer`] type, the [`Verdict`] of a session and the
/// `Expected` labels used in mismatch diagnostics.
///
/// ## Notes
/// - This file is `include!`'d into `crate::recognizer` to keep all recognizer methods in a
///   single module while avoiding a single “god file”.
type Parsed = Result<(), CompileError>;

/// Outcome of one recognition session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The source conforms to the grammar; nothing was reported.
    Accepted,
    /// Syntax errors were reported and recovered from.
    Rejected,
    /// A lexical error, or the first syntax error in fail-fast mode, ended the session early.
    Aborted,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        self == Verdict::Accepted
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "accepted"),
            Verdict::Rejected => write!(f, "rejected"),
            Verdict::Aborted => write!(f, "aborted"),
        }
    }
}

/// What `accept` is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expected {
    Keyword(KeywordId),
    Punctuation(PunctuationId),
    Identifier,
    EndOfInput,
}

impl Expected {
    fn matches(self, kind: &TokenKind) -> bool {
        match self {
            Expected::Keyword(id) => kind.is_keyword(id),
            Expected::Punctuation(id) => kind.is_punctuation(id),
            Expected::Identifier => kind.is_identifier(),
            Expected::EndOfInput => matches!(kind, TokenKind::Eof),
        }
    }

    /// `is`, `loop` and `;` always end a line.
    fn is_line_terminating(self) -> bool {
        matches!(
            self,
            Expected::Keyword(KeywordId::Is | KeywordId::Loop) | Expected::Punctuation(PunctuationId::Semicolon)
        )
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Keyword(id) => f.write_str(keywords::as_str(*id)),
            Expected::Punctuation(id) => f.write_str(punctuation::as_str(*id)),
            Expected::Identifier => f.write_str("identifier"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Recognizer state.
///
/// ## Notes
/// - `token` is the single lookahead. It is only ever replaced through `advance`, so it can never
///   drift from the lexer's position.
/// - Every diagnostic goes to `sink` as soon as it is detected.
/// - `depth` counts the subprogram bodies, statements and expressions currently open. Once it reaches
///   `config.max_nesting` the construct is abandoned, and `unwinding` stays set until a recovery point of the
///   outermost body catches the error.
pub struct Recognizer<'v, 's, S> {
    lexer: Lexer<'v, S>,
    token: Token,
    sink: &'s mut dyn DiagnosticSink,
    config: RecognizerConfig,
    reported: usize,
    depth: usize,
    unwinding: bool,
}

impl<'v, 's, S: CharSource> Recognizer<'v, 's, S> {
    /// Create a recognizer that pulls tokens from `lexer` and reports into `sink`.
    pub fn new(lexer: Lexer<'v, S>, config: RecognizerConfig, sink: &'s mut dyn DiagnosticSink) -> Self {
        Self {
            lexer,
            token: Token::new(TokenKind::Eof, Span::point(0)),
            sink,
            config,
            reported: 0,
            depth: 0,
            unwinding: false,
        }
    }

    /// Recognize one compilation unit: a single subprogram body.
    pub fn run(mut self) -> Verdict {
        let outcome = self.advance().and_then(|()| self.compilation_unit());
        match outcome {
            Err(_) => Verdict::Aborted,
            Ok(()) if self.reported == 0 => Verdict::Accepted,
            Ok(()) => Verdict::Rejected,
        }
    }

    fn compilation_unit(&mut self) -> Parsed {
        self.subprogram_body()?;
        if !self.config.check_end_of_input {
            return Ok(());
        }
        match self.accept(Expected::EndOfInput) {
            Err(error) if error.is_recoverable() && !self.config.fail_fast => Ok(()),
            other => other,
        }
    }
}

/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout recognition:
/// - Moving the lookahead (`advance`, `skip_newlines`)
/// - Checking and accepting keywords, punctuation and identifiers
/// - Phrase-level discard (`fatal`, `discard_line`)
/// - Phase-level recovery points (`recover`)
/// - The nesting bound (`nested`)
impl<S: CharSource> Recognizer<'_, '_, S> {
    // ========================================================================
    // Lookahead
    // ========================================================================

    /// Replace the lookahead with the next token from the lexer.
    ///
    /// A lexical error is reported here, once, and then propagated unchanged.
    fn advance(&mut self) -> Parsed {
        match self.lexer.next_token() {
            Ok(token) => {
                self.token = token;
                Ok(())
            }
            Err(error) => {
                tracing::debug!(%error, "lexical error, aborting");
                self.report(&error);
                Err(error)
            }
        }
    }

    fn skip_newlines(&mut self) -> Parsed {
        while self.token.kind == TokenKind::Newline {
            self.advance()?;
        }
        Ok(())
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.token.kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.token.kind.is_punctuation(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.token.kind.is_operator(id)
    }

    fn check_class(&self, class: OperatorClass) -> bool {
        self.token.kind.operator_class() == Some(class)
    }

    // ========================================================================
    // Accept
    // ========================================================================

    /// Match the lookahead against `expected` and move past it.
    ///
    /// ## Notes
    /// - A newline standing where a line-terminating token (`is`, `loop`, `;`) belongs is a mismatch.
    ///   Skipping it would let the discard eat the next line.
    /// - Otherwise leading newlines are skipped before comparing.
    /// - After a line-terminating token, trailing newlines are skipped too.
    fn accept(&mut self, expected: Expected) -> Parsed {
        if self.token.kind == TokenKind::Newline && expected.is_line_terminating() {
            return Err(self.mismatch(expected));
        }
        self.skip_newlines()?;
        if !expected.matches(&self.token.kind) {
            return Err(self.mismatch(expected));
        }
        self.advance()?;
        if expected.is_line_terminating() {
            self.skip_newlines()?;
        }
        Ok(())
    }

    fn accept_keyword(&mut self, id: KeywordId) -> Parsed {
        self.accept(Expected::Keyword(id))
    }

    fn accept_punct(&mut self, id: PunctuationId) -> Parsed {
        self.accept(Expected::Punctuation(id))
    }

    fn accept_identifier(&mut self) -> Parsed {
        self.accept(Expected::Identifier)
    }

    // ========================================================================
    // Error recovery
    // ========================================================================

    fn mismatch(&mut self, expected: Expected) -> CompileError {
        let message = format!("expected [{expected}] but {} was detected", self.token);
        self.fatal(message)
    }

    /// Report a syntax error at the lookahead, then discard the rest of its line.
    ///
    /// Returns the error for the caller to propagate. If the discard runs into a lexical error, that error is
    /// returned instead so the session aborts.
    fn fatal(&mut self, message: String) -> CompileError {
        let error = CompileError::syntax(message, self.token.span);
        tracing::debug!(%error, "syntax error");
        self.report(&error);
        match self.discard_line() {
            Ok(()) => error,
            Err(lexical) => lexical,
        }
    }

    /// Phrase-level discard.
    ///
    /// Drops tokens up to and including the next newline, then skips blank lines. The lookahead ends on the first
    /// token of the next non-blank line, or on `Eof`.
    fn discard_line(&mut self) -> Parsed {
        let start = self.token.span;
        let mut end = start;
        let mut discarded = Vec::new();

        loop {
            if self.token.kind == TokenKind::Eof {
                break;
            }
            if self.token.kind == TokenKind::Newline {
                self.advance()?;
                break;
            }
            discarded.push(self.token.kind.spelling().to_string());
            end = self.token.span;
            self.advance()?;
        }
        self.skip_newlines()?;

        if !discarded.is_empty() {
            let note = RecoveryNote::Discarded {
                tokens: discarded,
                span: start.to(end),
            };
            tracing::debug!(%note, "phrase-level discard");
            self.sink.note(&note);
        }
        Ok(())
    }

    /// Recovery point: swallow a syntax error and continue at `resume`.
    ///
    /// Lexical errors always pass through, and so does everything in fail-fast mode. A nesting overflow passes
    /// through every recovery point inside the outermost subprogram body's parts.
    fn recover(&mut self, result: Parsed, resume: Resume) -> Parsed {
        match result {
            Err(error) if self.unwinding && self.depth > 1 => Err(error),
            Err(error) if error.is_recoverable() && !self.config.fail_fast => {
                self.unwinding = false;
                tracing::debug!(%resume, "recovered");
                self.sink.note(&RecoveryNote::Resumed { at: resume });
                Ok(())
            }
            other => other,
        }
    }

    /// Run `rule` one nesting level deeper.
    ///
    /// At the bound the lookahead's line is discarded and a syntax error unwinds to the outermost body.
    fn nested(&mut self, rule: impl FnOnce(&mut Self) -> Parsed) -> Parsed {
        if self.depth >= self.config.max_nesting {
            let message = format!(
                "nesting deeper than {} levels at {}",
                self.config.max_nesting, self.token
            );
            self.unwinding = true;
            return Err(self.fatal(message));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    fn report(&mut self, error: &CompileError) {
        self.reported += 1;
        self.sink.error(error);
    }
}

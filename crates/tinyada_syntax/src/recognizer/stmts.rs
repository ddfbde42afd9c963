/// Statement recognition.
///
/// `statement` is the finest recovery point: a failed statement is reported, its line is
/// discarded and recognition continues with the next statement. Loops add two more.
impl<S: CharSource> Recognizer<'_, '_, S> {
    // ========================================================================
    // Sequences
    // ========================================================================

    /// `statement {statement}`, up to `end`, `elsif`, `else` or end of input.
    fn sequence_of_statements(&mut self) -> Parsed {
        self.statement()?;
        loop {
            self.skip_newlines()?;
            if self.token.kind.ends_sequence() {
                return Ok(());
            }
            self.statement()?;
        }
    }

    fn statement(&mut self) -> Parsed {
        let result = self.statement_kind();
        self.recover(result, Resume::NextStatement)
    }

    fn statement_kind(&mut self) -> Parsed {
        self.nested(Self::statement_body)
    }

    fn statement_body(&mut self) -> Parsed {
        self.skip_newlines()?;
        if self.token.kind.starts_compound_statement() {
            self.compound_statement()
        } else {
            self.simple_statement()
        }
    }

    // ========================================================================
    // Simple statements
    // ========================================================================

    fn simple_statement(&mut self) -> Parsed {
        if self.check_keyword(KeywordId::Null) {
            self.null_statement()
        } else if self.check_keyword(KeywordId::Exit) {
            self.exit_statement()
        } else {
            self.name_statement()
        }
    }

    fn null_statement(&mut self) -> Parsed {
        self.accept_keyword(KeywordId::Null)?;
        self.accept_punct(PunctuationId::Semicolon)
    }

    /// `"exit" ["when" condition] ";"`; whether a loop encloses it is not checked here.
    fn exit_statement(&mut self) -> Parsed {
        self.accept_keyword(KeywordId::Exit)?;
        if self.check_keyword(KeywordId::When) {
            self.advance()?;
            self.condition()?;
        }
        self.accept_punct(PunctuationId::Semicolon)
    }

    /// Assignment or procedure call, told apart by `:=` after the name.
    fn name_statement(&mut self) -> Parsed {
        self.name()?;
        if self.check_punct(PunctuationId::Assign) {
            self.assignment_tail()
        } else {
            self.procedure_call_tail()
        }
    }

    fn assignment_tail(&mut self) -> Parsed {
        self.accept_punct(PunctuationId::Assign)?;
        self.expression()?;
        self.accept_punct(PunctuationId::Semicolon)
    }

    fn procedure_call_tail(&mut self) -> Parsed {
        if self.check_punct(PunctuationId::LParen) {
            self.actual_parameter_part()?;
        }
        self.accept_punct(PunctuationId::Semicolon)
    }

    fn actual_parameter_part(&mut self) -> Parsed {
        self.accept_punct(PunctuationId::LParen)?;
        self.expression_list()?;
        self.accept_punct(PunctuationId::RParen)
    }

    // ========================================================================
    // Compound statements
    // ========================================================================

    fn compound_statement(&mut self) -> Parsed {
        if self.check_keyword(KeywordId::If) {
            self.if_statement()
        } else {
            self.loop_statement()
        }
    }

    fn if_statement(&mut self) -> Parsed {
        self.accept_keyword(KeywordId::If)?;
        self.condition()?;
        self.accept_keyword(KeywordId::Then)?;
        self.sequence_of_statements()?;
        while self.check_keyword(KeywordId::Elsif) {
            self.advance()?;
            self.condition()?;
            self.accept_keyword(KeywordId::Then)?;
            self.sequence_of_statements()?;
        }
        if self.check_keyword(KeywordId::Else) {
            self.advance()?;
            self.sequence_of_statements()?;
        }
        self.accept_keyword(KeywordId::End)?;
        self.accept_keyword(KeywordId::If)?;
        self.accept_punct(PunctuationId::Semicolon)
    }

    /// A failed header resumes at the loop body; a failed `end loop ;` ends the loop statement.
    fn loop_statement(&mut self) -> Parsed {
        let result = self.loop_header();
        self.recover(result, Resume::LoopBody)?;

        self.sequence_of_statements()?;

        let result = self.loop_end();
        self.recover(result, Resume::StopLoop)
    }

    /// `["while" condition] "loop"`
    fn loop_header(&mut self) -> Parsed {
        if self.check_keyword(KeywordId::While) {
            self.advance()?;
            self.condition()?;
        }
        self.accept_keyword(KeywordId::Loop)
    }

    fn loop_end(&mut self) -> Parsed {
        self.accept_keyword(KeywordId::End)?;
        self.accept_keyword(KeywordId::Loop)?;
        self.accept_punct(PunctuationId::Semicolon)
    }
}

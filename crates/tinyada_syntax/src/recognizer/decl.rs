/// Subprogram bodies, declarations and type definitions.
///
/// ```text
/// subprogramBody     := subprogramSpec "is" declarativePart "begin" sequenceOfStatements "end" [identifier] ";"
/// subprogramSpec     := "procedure" identifier [formalPart]
/// declarativePart    := {basicDeclaration}
/// basicDeclaration   := numberOrObjectDecl | typeDecl | subprogramBody
/// typeDefinition     := enumerationTypeDef | arrayTypeDef | range | name
/// ```
impl<S: CharSource> Recognizer<'_, '_, S> {
    // ========================================================================
    // Subprograms
    // ========================================================================

    fn subprogram_body(&mut self) -> Parsed {
        self.nested(Self::subprogram_phases)
    }

    /// Each of the five phases is a recovery point; a failed phase resumes at the next one.
    fn subprogram_phases(&mut self) -> Parsed {
        let result = self
            .subprogram_specification()
            .and_then(|()| self.accept_keyword(KeywordId::Is));
        self.recover(result, Resume::DeclarativePart)?;

        let result = self.declarative_part();
        self.recover(result, Resume::Begin)?;

        let result = self.accept_keyword(KeywordId::Begin);
        self.recover(result, Resume::Statements)?;

        let result = self.sequence_of_statements();
        self.recover(result, Resume::End)?;

        let result = self.subprogram_end();
        self.recover(result, Resume::StopBody)
    }

    fn subprogram_specification(&mut self) -> Parsed {
        self.accept_keyword(KeywordId::Procedure)?;
        self.accept_identifier()?;
        if self.check_punct(PunctuationId::LParen) {
            self.formal_part()?;
        }
        Ok(())
    }

    fn subprogram_end(&mut self) -> Parsed {
        self.accept_keyword(KeywordId::End)?;
        // The closing name is optional and not checked against the header.
        if self.token.kind.is_identifier() {
            self.advance()?;
        }
        self.accept_punct(PunctuationId::Semicolon)
    }

    fn formal_part(&mut self) -> Parsed {
        self.accept_punct(PunctuationId::LParen)?;
        self.parameter_specification()?;
        while self.check_punct(PunctuationId::Semicolon) {
            self.advance()?;
            self.parameter_specification()?;
        }
        self.accept_punct(PunctuationId::RParen)
    }

    fn parameter_specification(&mut self) -> Parsed {
        self.identifier_list()?;
        self.accept_punct(PunctuationId::Colon)?;
        self.mode()?;
        self.name()
    }

    /// `["in"] ["out"]`
    fn mode(&mut self) -> Parsed {
        if self.check_keyword(KeywordId::In) {
            self.advance()?;
        }
        if self.check_keyword(KeywordId::Out) {
            self.advance()?;
        }
        Ok(())
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn declarative_part(&mut self) -> Parsed {
        loop {
            self.skip_newlines()?;
            if !self.token.kind.starts_declaration() {
                return Ok(());
            }
            let result = self.basic_declaration();
            self.recover(result, Resume::NextDeclaration)?;
        }
    }

    fn basic_declaration(&mut self) -> Parsed {
        if self.token.kind.is_identifier() {
            self.number_or_object_declaration()
        } else if self.check_keyword(KeywordId::Type) {
            self.type_declaration()
        } else {
            self.subprogram_body()
        }
    }

    fn number_or_object_declaration(&mut self) -> Parsed {
        self.identifier_list()?;
        self.accept_punct(PunctuationId::Colon)?;
        if self.check_keyword(KeywordId::Constant) {
            self.number_declaration()
        } else {
            self.object_declaration()
        }
    }

    fn number_declaration(&mut self) -> Parsed {
        self.accept_keyword(KeywordId::Constant)?;
        self.accept_punct(PunctuationId::Assign)?;
        self.expression()?;
        self.accept_punct(PunctuationId::Semicolon)
    }

    fn object_declaration(&mut self) -> Parsed {
        self.type_definition()?;
        self.accept_punct(PunctuationId::Semicolon)
    }

    fn type_declaration(&mut self) -> Parsed {
        self.accept_keyword(KeywordId::Type)?;
        self.accept_identifier()?;
        self.accept_keyword(KeywordId::Is)?;
        self.type_definition()?;
        self.accept_punct(PunctuationId::Semicolon)
    }

    fn identifier_list(&mut self) -> Parsed {
        self.accept_identifier()?;
        while self.check_punct(PunctuationId::Comma) {
            self.advance()?;
            self.accept_identifier()?;
        }
        Ok(())
    }

    // ========================================================================
    // Type definitions
    // ========================================================================

    fn type_definition(&mut self) -> Parsed {
        self.skip_newlines()?;
        if self.check_punct(PunctuationId::LParen) {
            self.enumeration_type_definition()
        } else if self.check_keyword(KeywordId::Array) {
            self.array_type_definition()
        } else if self.check_keyword(KeywordId::Range) {
            self.range()
        } else if self.token.kind.is_identifier() {
            self.name()
        } else {
            let message = format!(
                "expected [(], [array], [range] or [identifier] but {} was detected",
                self.token
            );
            Err(self.fatal(message))
        }
    }

    fn enumeration_type_definition(&mut self) -> Parsed {
        self.accept_punct(PunctuationId::LParen)?;
        self.identifier_list()?;
        self.accept_punct(PunctuationId::RParen)
    }

    fn array_type_definition(&mut self) -> Parsed {
        self.accept_keyword(KeywordId::Array)?;
        self.accept_punct(PunctuationId::LParen)?;
        self.index()?;
        while self.check_punct(PunctuationId::Comma) {
            self.advance()?;
            self.index()?;
        }
        self.accept_punct(PunctuationId::RParen)?;
        self.accept_keyword(KeywordId::Of)?;
        self.name()
    }

    fn index(&mut self) -> Parsed {
        self.skip_newlines()?;
        if self.check_keyword(KeywordId::Range) {
            self.range()
        } else if self.token.kind.is_identifier() {
            self.name()
        } else {
            let message = format!("expected [range] or [identifier] but {} was detected", self.token);
            Err(self.fatal(message))
        }
    }

    /// `"range" simpleExpression ".." simpleExpression`
    fn range(&mut self) -> Parsed {
        self.accept_keyword(KeywordId::Range)?;
        self.simple_expression()?;
        self.accept_punct(PunctuationId::DotDot)?;
        self.simple_expression()
    }
}

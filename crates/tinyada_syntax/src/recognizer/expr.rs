/// Expression recognition.
///
/// Precedence lives in the rule nesting, loosest first:
/// `expression` (and/or) > `relation` > `simpleExpression` (adding) > `term` (multiplying) > `factor` (not, **).
impl<S: CharSource> Recognizer<'_, '_, S> {
    fn condition(&mut self) -> Parsed {
        self.expression()
    }

    fn expression(&mut self) -> Parsed {
        self.nested(Self::logical_chain)
    }

    /// `relation {"and" relation}` or `relation {"or" relation}`.
    ///
    /// The first logical operator picks the chain. A different one after it is left in place, so
    /// `a and b or c` fails at whatever the enclosing rule expects next.
    fn logical_chain(&mut self) -> Parsed {
        self.relation()?;
        let chain = if self.check_keyword(KeywordId::And) {
            KeywordId::And
        } else if self.check_keyword(KeywordId::Or) {
            KeywordId::Or
        } else {
            return Ok(());
        };
        while self.check_keyword(chain) {
            self.advance()?;
            self.relation()?;
        }
        Ok(())
    }

    fn relation(&mut self) -> Parsed {
        self.simple_expression()?;
        if self.check_class(OperatorClass::Relational) {
            self.advance()?;
            self.simple_expression()?;
        }
        Ok(())
    }

    fn simple_expression(&mut self) -> Parsed {
        self.skip_newlines()?;
        if self.check_class(OperatorClass::Adding) {
            self.advance()?;
        }
        self.term()?;
        while self.check_class(OperatorClass::Adding) {
            self.advance()?;
            self.term()?;
        }
        Ok(())
    }

    fn term(&mut self) -> Parsed {
        self.factor()?;
        while self.check_class(OperatorClass::Multiplying) {
            self.advance()?;
            self.factor()?;
        }
        Ok(())
    }

    /// `["not"] primary ["**" primary]`
    fn factor(&mut self) -> Parsed {
        self.skip_newlines()?;
        if self.check_class(OperatorClass::Negation) {
            self.advance()?;
        }
        self.primary()?;
        if self.check_op(OperatorId::StarStar) {
            self.advance()?;
            self.primary()?;
        }
        Ok(())
    }

    fn primary(&mut self) -> Parsed {
        self.skip_newlines()?;
        match self.token.kind {
            TokenKind::Int(_) | TokenKind::String(_) => self.advance(),
            TokenKind::Ident(_) => self.name(),
            _ if self.check_punct(PunctuationId::LParen) => {
                self.advance()?;
                self.expression()?;
                self.accept_punct(PunctuationId::RParen)
            }
            _ => {
                let message = format!(
                    "expected a literal, [identifier] or [(] but {} was detected",
                    self.token
                );
                Err(self.fatal(message))
            }
        }
    }

    /// `identifier ["(" expression {"," expression} ")"]`
    fn name(&mut self) -> Parsed {
        self.accept_identifier()?;
        if self.check_punct(PunctuationId::LParen) {
            self.accept_punct(PunctuationId::LParen)?;
            self.expression_list()?;
            self.accept_punct(PunctuationId::RParen)?;
        }
        Ok(())
    }

    fn expression_list(&mut self) -> Parsed {
        self.expression()?;
        while self.check_punct(PunctuationId::Comma) {
            self.advance()?;
            self.expression()?;
        }
        Ok(())
    }
}

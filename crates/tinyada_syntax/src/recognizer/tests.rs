#[cfg(test)]
/// Recognizer unit tests.
///
/// These tests cover grammar acceptance and the recovery protocol: where the lookahead lands after
/// a discard, which recovery point catches a failure, and that cascades stay bounded.
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorKind, line_col};
    use insta::assert_snapshot;

    fn messages(source: &str) -> Vec<String> {
        recognize(source).errors.into_iter().map(|e| e.message).collect()
    }

    /// Sink that keeps errors and notes interleaved, the way a console would show them.
    #[derive(Default)]
    struct Transcript(Vec<String>);

    impl DiagnosticSink for Transcript {
        fn error(&mut self, error: &CompileError) {
            self.0.push(format!("error: {error}"));
        }

        fn note(&mut self, note: &RecoveryNote) {
            self.0.push(format!("note: {note}"));
        }
    }

    fn transcript(source: &str) -> String {
        transcript_with(source, &RecognizerConfig::default())
    }

    fn transcript_with(source: &str, config: &RecognizerConfig) -> String {
        let mut sink = Transcript::default();
        recognize_with(source, config, Vocabulary::standard(), &mut sink);
        sink.0.join("\n")
    }

    /// Assert one nesting error on `line`, caught by the outermost body at `resume`.
    fn assert_cut_off_once(source: &str, line: usize, resume: Resume) {
        let recognition = recognize(source);
        assert_eq!(recognition.verdict, Verdict::Rejected);
        assert_eq!(recognition.errors.len(), 1, "{:?}", recognition.errors);
        let error = &recognition.errors[0];
        assert!(
            error.message.starts_with("nesting deeper than 128 levels at "),
            "{}",
            error.message
        );
        assert_eq!(line_col(source, error.span.start).0, line);
        assert!(
            matches!(
                &recognition.notes[..],
                [RecoveryNote::Discarded { .. }, RecoveryNote::Resumed { at }] if *at == resume
            ),
            "{:?}",
            recognition.notes
        );
    }

    // ========================================================================
    // Acceptance
    // ========================================================================

    #[test]
    fn test_minimal_procedure_is_accepted() {
        let recognition = recognize("procedure Foo is begin null; end Foo;");
        assert_eq!(recognition.verdict, Verdict::Accepted);
        assert!(recognition.errors.is_empty());
        assert!(recognition.notes.is_empty());
    }

    #[test]
    fn test_exit_outside_loop_is_accepted() {
        assert!(recognize("procedure Foo is begin exit; end Foo;").is_accepted());
    }

    #[test]
    fn test_closing_name_is_optional() {
        assert!(recognize("procedure Foo is begin null; end;").is_accepted());
    }

    #[test]
    fn test_declarations_are_accepted() {
        let source = r#"procedure P(A, B : in out Integer; C : out Boolean) is
   type Color is (Red, Green, Blue);
   type Grid is array (range 1 .. 10, Index) of Color;
   Max : constant := 100;
   X, Y : Integer;
   Z : range 0 .. Max;
   procedure Inner is
   begin
      null;
   end Inner;
begin
   Inner;
   Put(X, "hi");
   Grid(1, 2) := Red;
end P;
"#;
        let recognition = recognize(source);
        assert!(recognition.is_accepted(), "{:?}", recognition.errors);
    }

    #[test]
    fn test_expressions_are_accepted() {
        let source = "procedure P is
begin
   X := -A + B * C mod 2 / D ** 2;
   Y := not Z;
   if A /= B and C <= D then null; elsif E = F then null; else null; end if;
   if (A and B) or C then null; end if;
end P;
";
        let recognition = recognize(source);
        assert!(recognition.is_accepted(), "{:?}", recognition.errors);
    }

    #[test]
    fn test_loops_are_accepted() {
        let source = "procedure P is
begin
   while X < 10 loop
      X := X + 1;
   end loop;
   loop
      exit when X >= 1;
   end loop;
end P;
";
        assert!(recognize(source).is_accepted());
    }

    #[test]
    fn test_newline_inside_expression_is_skipped() {
        assert!(recognize("procedure Foo is\nbegin\nX :=\n1;\nend Foo;").is_accepted());
    }

    // ========================================================================
    // Recovery
    // ========================================================================

    #[test]
    fn test_malformed_declaration_recovers_at_next_line() {
        let recognition = recognize("procedure Foo is\nX : ;\nbegin null; end Foo;");
        assert_eq!(recognition.verdict, Verdict::Rejected);
        assert_eq!(
            recognition.errors.len(),
            1,
            "expected exactly one error, got {:?}",
            recognition.errors
        );
        assert_eq!(recognition.errors[0].kind, ErrorKind::Syntax);
        assert_eq!(
            recognition.notes,
            vec![
                RecoveryNote::Discarded {
                    tokens: vec![";".to_string()],
                    span: Span::new(21, 22),
                },
                RecoveryNote::Resumed {
                    at: Resume::NextDeclaration
                },
            ]
        );
    }

    #[test]
    fn test_newline_is_not_skipped_for_is() {
        // The header line ends early; `begin` on the next line must survive.
        let errors = messages("procedure Foo\nbegin null; end Foo;");
        assert_eq!(errors, vec!["expected [is] but newline was detected".to_string()]);
    }

    #[test]
    fn test_discard_lands_on_next_line() {
        let recognition = recognize("procedure Foo is\nbegin\nX := ; Y Z\n\n\nnull;\nend Foo;");
        assert_eq!(recognition.errors.len(), 1);
        assert_eq!(
            recognition.notes[0],
            RecoveryNote::Discarded {
                tokens: vec![";".to_string(), "Y".to_string(), "Z".to_string()],
                span: Span::new(28, 33),
            }
        );
        assert_eq!(
            recognition.notes[1],
            RecoveryNote::Resumed {
                at: Resume::NextStatement
            }
        );
    }

    #[test]
    fn test_mixed_and_or_is_rejected() {
        let errors = messages("procedure Foo is\nbegin\nif A and B or C then null; end if;\nend Foo;");
        assert_eq!(errors, vec!["expected [then] but 'or' was detected".to_string()]);
    }

    #[test]
    fn test_bad_loop_header_resumes_at_body() {
        assert_snapshot!(transcript("procedure P is\nbegin\nwhile X > loop\nnull;\nend loop;\nend P;"), @r"
        error: syntax error: expected a literal, [identifier] or [(] but 'loop' was detected
        note: trailing tokens: loop were discarded
        note: continue parsing from sequence of statements of loop statement
        ");
    }

    #[test]
    fn test_missing_end_loop_stops_loop() {
        let recognition = recognize("procedure P is\nbegin\nloop\nnull;\nend;\nend P;");
        assert_eq!(recognition.errors.len(), 1);
        assert_eq!(recognition.errors[0].message, "expected [loop] but ';' was detected");
        assert!(recognition.notes.contains(&RecoveryNote::Resumed { at: Resume::StopLoop }));
    }

    #[test]
    fn test_missing_is_transcript() {
        assert_snapshot!(transcript("procedure Foo\nbegin null; end Foo;"), @r"
        error: syntax error: expected [is] but newline was detected
        note: continue parsing from declarative part of subprogram body
        ");
    }

    #[test]
    fn test_truncated_source_terminates() {
        let recognition = recognize("procedure Foo is begin X := ");
        assert_eq!(recognition.verdict, Verdict::Rejected);
        assert!(!recognition.errors.is_empty());
    }

    #[test]
    fn test_empty_source_is_rejected() {
        let recognition = recognize("");
        assert_eq!(recognition.verdict, Verdict::Rejected);
        assert_eq!(
            recognition.errors[0].message,
            "expected [procedure] but end of input was detected"
        );
    }

    // ========================================================================
    // End of input and configuration
    // ========================================================================

    #[test]
    fn test_trailing_tokens_are_reported() {
        let errors = messages("procedure Foo is begin null; end Foo; null;");
        assert_eq!(errors, vec!["expected [end of input] but 'null' was detected".to_string()]);
    }

    #[test]
    fn test_trailing_tokens_allowed_when_check_disabled() {
        let config = RecognizerConfig::new().with_end_of_input_check(false);
        let mut sink = Collector::new();
        let verdict = recognize_with(
            "procedure Foo is begin null; end Foo; null;",
            &config,
            Vocabulary::standard(),
            &mut sink,
        );
        assert_eq!(verdict, Verdict::Accepted);
        assert!(sink.errors.is_empty());
    }

    #[test]
    fn test_trailing_newlines_are_fine() {
        assert!(recognize("\n\nprocedure Foo is begin null; end Foo;\n\n").is_accepted());
    }

    #[test]
    fn test_fail_fast_stops_at_first_error() {
        let source = "procedure Foo is\nX : ;\nY : ;\nbegin null; end Foo;";
        assert_eq!(recognize(source).errors.len(), 2);

        let mut sink = Collector::new();
        let config = RecognizerConfig::new().with_fail_fast(true);
        let verdict = recognize_with(source, &config, Vocabulary::standard(), &mut sink);
        assert_eq!(verdict, Verdict::Aborted);
        assert_eq!(sink.errors.len(), 1);
        assert!(
            !sink
                .notes
                .iter()
                .any(|n| matches!(n, RecoveryNote::Resumed { .. }))
        );
    }

    // ========================================================================
    // Nesting bound
    // ========================================================================

    #[test]
    fn test_deep_parentheses_are_cut_off() {
        let depth = 100_000;
        let source = format!(
            "procedure P is\nbegin\nX := {}1{};\nY := 2;\nend P;\n",
            "(".repeat(depth),
            ")".repeat(depth)
        );
        assert_cut_off_once(&source, 3, Resume::NextStatement);
    }

    #[test]
    fn test_deep_compound_statements_are_cut_off() {
        let depth = 10_000;
        for (open, close) in [
            ("if X then ", " end if;"),
            ("while X loop ", " end loop;"),
            ("loop ", " end loop;"),
        ] {
            let source = format!(
                "procedure P is\nbegin\n{}null;{}\nY := 2;\nend P;\n",
                open.repeat(depth),
                close.repeat(depth)
            );
            assert_cut_off_once(&source, 3, Resume::NextStatement);
        }
    }

    #[test]
    fn test_deep_subprogram_bodies_are_cut_off() {
        let depth = 10_000;
        let source = format!(
            "procedure P is\n{}{}\nX : Integer;\nbegin\nnull;\nend P;\n",
            "procedure Q is ".repeat(depth),
            "begin null; end Q; ".repeat(depth)
        );
        assert_cut_off_once(&source, 2, Resume::NextDeclaration);
    }

    #[test]
    fn test_nesting_under_the_bound_is_accepted() {
        let source = format!(
            "procedure P is\nbegin\nX := {}1{};\nend P;\n",
            "(".repeat(100),
            ")".repeat(100)
        );
        assert!(recognize(&source).is_accepted());
    }

    #[test]
    fn test_nesting_depth_is_released_after_each_statement() {
        let config = RecognizerConfig::new().with_max_nesting(4);
        let source = format!("procedure P is\nbegin\n{}end P;\n", "X := (1);\n".repeat(50));
        let mut sink = Collector::new();
        let verdict = recognize_with(&source, &config, Vocabulary::standard(), &mut sink);
        assert_eq!(verdict, Verdict::Accepted, "{:?}", sink.errors);
    }

    #[test]
    fn test_recovery_resumes_normally_after_nesting_error() {
        let config = RecognizerConfig::new().with_max_nesting(4);
        assert_snapshot!(transcript_with("procedure P is\nbegin\nX := ((1));\nY := ;\nend P;", &config), @r"
        error: syntax error: nesting deeper than 4 levels at integer literal 1
        note: trailing tokens: 1 ) ) ; were discarded
        note: continue parsing next statement
        error: syntax error: expected a literal, [identifier] or [(] but ';' was detected
        note: trailing tokens: ; were discarded
        note: continue parsing next statement
        ");
    }

    #[test]
    fn test_nesting_error_aborts_in_fail_fast_mode() {
        let config = RecognizerConfig::new().with_fail_fast(true).with_max_nesting(4);
        let mut sink = Collector::new();
        let verdict = recognize_with(
            "procedure P is\nbegin\nX := ((1));\nend P;",
            &config,
            Vocabulary::standard(),
            &mut sink,
        );
        assert_eq!(verdict, Verdict::Aborted);
        assert_eq!(sink.errors.len(), 1);
    }

    // ========================================================================
    // Lexical errors
    // ========================================================================

    #[test]
    fn test_lexical_error_aborts() {
        let recognition = recognize("procedure Foo is\nbegin\nX := 1 & 2;\nend Foo;");
        assert_eq!(recognition.verdict, Verdict::Aborted);
        assert_eq!(recognition.errors.len(), 1);
        assert_eq!(recognition.errors[0].kind, ErrorKind::Lexical);
        assert_eq!(recognition.errors[0].message, "unexpected symbol '&'");
    }

    #[test]
    fn test_lexical_error_during_discard_aborts() {
        let recognition = recognize("procedure Foo is\nbegin\nX := ; $\nend Foo;");
        assert_eq!(recognition.verdict, Verdict::Aborted);
        let kinds: Vec<_> = recognition.errors.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![ErrorKind::Syntax, ErrorKind::Lexical]);
    }
}

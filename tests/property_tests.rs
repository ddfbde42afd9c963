//! Property-based tests for the TinyAda front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use tinyada::diagnostics::RecoveryNote;
use tinyada::lexer::{TokenKind, lex};
use tinyada::{Verdict, recognize};

/// Token spellings that always lex cleanly, used to build token soups.
const SOUP: &[&str] = &[
    "procedure", "is", "begin", "end", "null", "if", "then", "else", "loop", "while", "exit", "when", "type",
    "constant", "and", "or", "not", "mod", ";", ":", ":=", ",", "(", ")", "..", "+", "-", "*", "**", "=", "/=",
    "<", ">=", "X", "Y1", "42", "\"s\"", "\n",
];

fn soup() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(SOUP), 0..48).prop_map(|parts| parts.join(" "))
}

// =============================================================================
// Lexer Properties
// =============================================================================

#[cfg(test)]
mod lexer_tests {
    use super::*;

    proptest! {
        /// Property: a letter-led word ended by a delimiter is exactly one token
        #[test]
        fn maximal_munch_yields_one_token(word in "[a-zA-Z][a-zA-Z0-9_]{0,12}") {
            let tokens = lex(&format!("{word} ")).unwrap();
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind.spelling(), word.as_str());
            prop_assert_eq!(&tokens[1].kind, &TokenKind::Eof);
        }

        /// Property: an integer literal keeps exactly its digits
        #[test]
        fn integer_lexeme_is_the_digit_run(digits in "[0-9]{1,12}", word in "[a-z]{1,6}") {
            let tokens = lex(&format!("{digits}{word}")).unwrap();
            prop_assert_eq!(tokens[0].lexeme(), Some(digits.as_str()));
            prop_assert_eq!(tokens[1].kind.spelling(), word.as_str());
        }

        /// Property: spans are ordered and never overlap
        #[test]
        fn spans_are_monotonic(source in soup()) {
            let tokens = lex(&source).unwrap();
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].span.end <= pair[1].span.start);
            }
            prop_assert_eq!(tokens.last().map(|t| &t.kind), Some(&TokenKind::Eof));
        }

        /// Property: lexing arbitrary text never panics
        #[test]
        fn lex_never_panics(source in "\\PC{0,200}") {
            let _ = lex(&source);
        }
    }
}

// =============================================================================
// Recognizer Properties
// =============================================================================

#[cfg(test)]
mod recognizer_tests {
    use super::*;

    proptest! {
        /// Property: recognition always terminates and the verdict agrees with the diagnostics
        #[test]
        fn verdict_matches_errors(source in "\\PC{0,200}") {
            let recognition = recognize(&source);
            match recognition.verdict {
                Verdict::Accepted => prop_assert!(recognition.errors.is_empty()),
                Verdict::Rejected | Verdict::Aborted => prop_assert!(!recognition.errors.is_empty()),
            }
        }

        /// Property: a phrase-level discard always runs to the end of its line
        #[test]
        fn discard_stops_at_line_end(source in soup()) {
            let recognition = recognize(&source);
            prop_assume!(recognition.verdict != Verdict::Aborted);
            for note in &recognition.notes {
                if let RecoveryNote::Discarded { span, .. } = note {
                    let rest = &source[span.end..];
                    let line_rest = rest.split('\n').next().unwrap_or("");
                    prop_assert!(
                        line_rest.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\\')),
                        "discard ended mid-line: {:?}",
                        line_rest
                    );
                }
            }
        }

        /// Property: token soups never abort; only lexical errors do
        #[test]
        fn soup_is_never_aborted(source in soup()) {
            prop_assert_ne!(recognize(&source).verdict, Verdict::Aborted);
        }

        /// Property: nesting of any depth ends in a verdict, with at most one error for the over-deep line
        #[test]
        fn deep_nesting_is_bounded(depth in 0usize..5000) {
            let source = format!(
                "procedure P is\nbegin\nX := {}1{};\nend P;\n",
                "(".repeat(depth),
                ")".repeat(depth)
            );
            let recognition = recognize(&source);
            prop_assert_ne!(recognition.verdict, Verdict::Aborted);
            prop_assert!(recognition.errors.len() <= 1, "{:?}", recognition.errors);
            if depth <= 100 {
                prop_assert!(recognition.is_accepted());
            }
        }
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use tinyada::{Verdict, lexer, recognize};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the lexer on its own
        let lexed = lexer::lex(s);

        // Then the recognizer, which pulls tokens lazily
        let recognition = recognize(s);
        assert_eq!(recognition.is_accepted(), recognition.errors.is_empty());
        if lexed.is_ok() {
            assert_ne!(recognition.verdict, Verdict::Aborted);
        }
    }
});

//! Character source for the lexer.
//!
//! The lexer never touches a `&str` directly; it reads through the [`CharSource`] cursor, which only moves forward.

use std::iter::Peekable;
use std::str::CharIndices;

/// Byte range in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `offset`.
    pub fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Forward-only cursor over source characters.
///
/// ## Notes
/// - `peek` returning `None` is the end-of-input sentinel.
/// - `consume` past end-of-input returns `None` and does not move; the lexer never relies on that.
pub trait CharSource {
    /// Look at the next character without consuming it.
    fn peek(&mut self) -> Option<char>;

    /// Consume and return the next character.
    fn consume(&mut self) -> Option<char>;

    /// Byte offset of the next unconsumed character.
    fn offset(&self) -> usize;
}

/// In-memory [`CharSource`] over a string slice.
pub struct SourceText<'a> {
    chars: Peekable<CharIndices<'a>>,
    offset: usize,
}

impl<'a> SourceText<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.char_indices().peekable(),
            offset: 0,
        }
    }
}

impl CharSource for SourceText<'_> {
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn consume(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.offset = pos + c.len_utf8();
        Some(c)
    }

    fn offset(&self) -> usize {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_advance() {
        let mut src = SourceText::new("ab");
        assert_eq!(src.peek(), Some('a'));
        assert_eq!(src.peek(), Some('a'));
        assert_eq!(src.offset(), 0);
        assert_eq!(src.consume(), Some('a'));
        assert_eq!(src.offset(), 1);
        assert_eq!(src.peek(), Some('b'));
    }

    #[test]
    fn test_end_of_input_is_sticky() {
        let mut src = SourceText::new("é");
        assert_eq!(src.consume(), Some('é'));
        assert_eq!(src.offset(), 2);
        assert_eq!(src.peek(), None);
        assert_eq!(src.consume(), None);
        assert_eq!(src.offset(), 2);
    }

    #[test]
    fn test_span_to() {
        assert_eq!(Span::new(4, 6).to(Span::new(1, 2)), Span::new(1, 6));
        assert!(Span::point(3).is_empty());
    }
}

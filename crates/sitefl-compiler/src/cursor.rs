//! Byte cursor over the markup source.
//!
//! All bounds checks live here. Scanning code asks for the current byte
//! or a lookahead and gets `None` past the end instead of indexing.

use sitefl_core::Position;

/// A forward-only cursor over an immutable byte buffer.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// The byte under the cursor.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.peek(0)
    }

    /// The byte `n` positions ahead of the cursor; `peek(0)` is the current byte.
    #[inline]
    pub fn peek(&self, n: usize) -> Option<u8> {
        self.input.get(self.pos + n).copied()
    }

    /// The character starting at the cursor, decoded from UTF-8.
    ///
    /// Used for diagnostics only; scanning works on bytes.
    pub fn current_char(&self) -> Option<char> {
        let rest = self.rest();
        let head = &rest[..rest.len().min(4)];
        String::from_utf8_lossy(head).chars().next()
    }

    /// Check whether the byte `n` ahead equals `byte`.
    #[inline]
    pub fn peek_is(&self, n: usize, byte: u8) -> bool {
        self.peek(n) == Some(byte)
    }

    /// Check whether the input at the cursor starts with `pattern`.
    pub fn at(&self, pattern: &[u8]) -> bool {
        self.rest().starts_with(pattern)
    }

    /// Move one byte forward. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Move `n` bytes forward, stopping at end of input.
    #[inline]
    pub fn advance_by(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Return the current byte and move past it.
    #[inline]
    pub fn bump(&mut self) -> Option<u8> {
        let byte = self.current()?;
        self.pos += 1;
        Some(byte)
    }

    /// Count consecutive `byte`s starting at the cursor, up to `limit`.
    pub fn count_run(&self, byte: u8, limit: usize) -> usize {
        self.rest()
            .iter()
            .take(limit)
            .take_while(|&&b| b == byte)
            .count()
    }

    /// Consume bytes until `stop` matches or input ends, returning them.
    ///
    /// The stopping byte is left under the cursor.
    pub fn take_until(&mut self, stop: impl Fn(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        while let Some(byte) = self.current() {
            if stop(byte) {
                break;
            }
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    /// Check whether the cursor is at end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Byte offset of the cursor.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Line and column of the cursor.
    pub fn position(&self) -> Position {
        Position::locate(self.input, self.pos)
    }

    /// Line and column of an arbitrary offset in the same input.
    pub fn position_at(&self, offset: usize) -> Position {
        Position::locate(self.input, offset)
    }

    /// The unread remainder of the input.
    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// The input between two offsets already passed by the cursor.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.input[start.min(end)..end.min(self.input.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_and_peek() {
        let cursor = Cursor::new(b"abc");
        assert_eq!(cursor.current(), Some(b'a'));
        assert_eq!(cursor.peek(2), Some(b'c'));
        assert_eq!(cursor.peek(3), None);
        assert!(cursor.peek_is(1, b'b'));
    }

    #[test]
    fn test_advance_stops_at_end() {
        let mut cursor = Cursor::new(b"ab");
        cursor.advance_by(5);
        assert!(cursor.is_eof());
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.current(), None);
        cursor.advance();
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn test_bump() {
        let mut cursor = Cursor::new(b"x");
        assert_eq!(cursor.bump(), Some(b'x'));
        assert_eq!(cursor.bump(), None);
    }

    #[test]
    fn test_count_run() {
        let cursor = Cursor::new(b"########x");
        assert_eq!(cursor.count_run(b'#', 6), 6);
        assert_eq!(Cursor::new(b"##x").count_run(b'#', 6), 2);
        assert_eq!(Cursor::new(b"x").count_run(b'#', 6), 0);
    }

    #[test]
    fn test_take_until() {
        let mut cursor = Cursor::new(b"alt]rest");
        assert_eq!(cursor.take_until(|b| b == b']'), b"alt");
        assert_eq!(cursor.current(), Some(b']'));

        let mut cursor = Cursor::new(b"no stop");
        assert_eq!(cursor.take_until(|b| b == b']'), b"no stop");
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_at() {
        let mut cursor = Cursor::new(b"a::b");
        cursor.advance();
        assert!(cursor.at(b"::"));
        assert!(!cursor.at(b":::"));
    }

    #[test]
    fn test_current_char_decodes_utf8() {
        let mut cursor = Cursor::new("a\u{e9}b".as_bytes());
        cursor.advance();
        assert_eq!(cursor.current_char(), Some('\u{e9}'));
        cursor.advance_by(3);
        assert_eq!(cursor.current_char(), None);
    }

    #[test]
    fn test_slice() {
        let mut cursor = Cursor::new(b"hello world");
        cursor.advance_by(5);
        assert_eq!(cursor.slice(0, cursor.offset()), b"hello");
    }

    #[test]
    fn test_position() {
        let mut cursor = Cursor::new(b"one\ntwo");
        cursor.advance_by(5);
        let pos = cursor.position();
        assert_eq!((pos.line, pos.column, pos.offset), (1, 1, 5));
    }
}

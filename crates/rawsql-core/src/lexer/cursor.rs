//! Scan cursor shared by the token readers.

/// A byte position over the source text.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// The full source text.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// The current byte position.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Moves the cursor back (or forward) to a previously saved position.
    pub fn reset(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Returns true when the whole input has been consumed.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Returns the unread part of the input.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns the current character without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns the character `n` places ahead without advancing.
    #[must_use]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Advances past the current character and returns it.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advances while `pred` holds.
    pub fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Returns true if the unread input starts with `prefix`, ignoring ASCII case.
    #[must_use]
    pub fn starts_with_ignore_case(&self, prefix: &str) -> bool {
        let rest = self.rest().as_bytes();
        rest.len() >= prefix.len() && rest[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    }

    /// Returns the text between `start` and the current position.
    #[must_use]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_advance() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek_nth(1), Some('b'));
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), None);
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_prefix_ignores_case() {
        let cursor = Cursor::new("U&'x'");
        assert!(cursor.starts_with_ignore_case("u&'"));
        assert!(!cursor.starts_with_ignore_case("e'"));
    }
}

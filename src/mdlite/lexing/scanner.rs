//! Character cursor over the source text
//!
//! The scanner works on Unicode scalar values, so offsets are in characters, not bytes.

/// Cursor over the characters of a source string.
#[derive(Debug, Clone)]
pub struct Scanner {
    chars: Vec<char>,
    position: usize,
    last_char: Option<char>,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Scanner {
            chars: source.chars().collect(),
            position: 0,
            last_char: None,
        }
    }

    /// Current position, in characters.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// The most recently consumed character, `None` before the first poll or past the end.
    pub fn last_char(&self) -> Option<char> {
        self.last_char
    }

    /// Character at the current position.
    pub fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Character at `offset` from the current position; negative offsets look behind.
    pub fn peek_at(&self, offset: isize) -> Option<char> {
        self.position
            .checked_add_signed(offset)
            .and_then(|index| self.chars.get(index).copied())
    }

    /// Whether the upcoming characters spell out `expected`.
    pub fn next_is(&self, expected: &str) -> bool {
        expected
            .chars()
            .enumerate()
            .all(|(i, ch)| self.peek_at(i as isize) == Some(ch))
    }

    /// Consume one character.
    pub fn poll(&mut self) -> Option<char> {
        self.last_char = self.peek();
        if self.last_char.is_some() {
            self.position += 1;
        }
        self.last_char
    }

    /// Consume `expected`, which the caller has already matched with [`Scanner::next_is`].
    pub fn consume(&mut self, expected: &str) {
        for ch in expected.chars() {
            let polled = self.poll();
            debug_assert_eq!(
                polled,
                Some(ch),
                "delimiter mismatch at {}: expected {:?}",
                self.position,
                ch
            );
        }
    }
}

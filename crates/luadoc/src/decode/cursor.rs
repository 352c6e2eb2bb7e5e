use crate::error::{Error, Result};

/// Forward-only byte cursor over one source unit.
///
/// Positions are byte offsets into the original `&str`. `None` from
/// [`Cursor::peek`] is the end sentinel. Each parse owns a fresh cursor;
/// nothing is shared between invocations.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str, offset: usize) -> Result<Self> {
        if offset > src.len() || !src.is_char_boundary(offset) {
            return Err(Error::OutOfBounds {
                offset,
                len: src.len(),
            });
        }
        Ok(Self { src, pos: offset })
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Byte at the current position, `None` at end-of-input.
    pub fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    /// Move forward by `n` bytes. Landing exactly at end-of-input is
    /// allowed; landing past it is a contract violation.
    pub fn advance(&mut self, n: usize) -> Result<()> {
        if self.pos + n > self.src.len() {
            return Err(Error::OutOfBounds {
                offset: self.pos + n,
                len: self.src.len(),
            });
        }
        self.pos += n;
        Ok(())
    }

    /// Advance by one byte, clamping at end-of-input.
    pub fn bump(&mut self) {
        if self.pos < self.src.len() {
            self.pos += 1;
        }
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }

    pub fn tail(&self, start: usize) -> &'a str {
        &self.src[start..]
    }

    /// Skip whitespace and `--` line comments. Idempotent; safe to call
    /// at any position, including end-of-input.
    pub fn skip_trivia(&mut self) {
        let b = self.src.as_bytes();
        while self.pos < b.len() {
            match b[self.pos] {
                b' ' | b'\t' | b'\n' | b'\r' => self.pos += 1,
                b'-' if b.get(self.pos + 1) == Some(&b'-') => {
                    while self.pos < b.len() && b[self.pos] != b'\n' {
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
    }

    /// Consume the longest run of `[A-Za-z0-9_.]` at the cursor; empty
    /// when the next byte is not a word byte.
    pub fn scan_word(&mut self) -> &'a str {
        let b = self.src.as_bytes();
        let start = self.pos;
        while self.pos < b.len() && is_word_byte(b[self.pos]) {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    /// Non-destructive lookahead for `bareword =`: returns the key and
    /// the offset just past the `=` without moving the committed
    /// position. Keys match `[A-Za-z_][A-Za-z0-9_]*`, so numeric-looking
    /// barewords never read as map keys.
    pub fn peek_map_key(&self) -> Option<(&'a str, usize)> {
        let b = self.src.as_bytes();
        let start = self.pos;
        let mut i = start;
        if i >= b.len() || !(b[i].is_ascii_alphabetic() || b[i] == b'_') {
            return None;
        }
        while i < b.len() && (b[i].is_ascii_alphanumeric() || b[i] == b'_') {
            i += 1;
        }
        let key = &self.src[start..i];
        let mut probe = Cursor { src: self.src, pos: i };
        probe.skip_trivia();
        if probe.peek() == Some(b'=') {
            Some((key, probe.pos() + 1))
        } else {
            None
        }
    }

    /// Committing twin of [`Cursor::peek_map_key`]: on a match, the
    /// cursor lands just past the `=`.
    pub fn take_map_key(&mut self) -> Option<&'a str> {
        let (key, after_eq) = self.peek_map_key()?;
        self.pos = after_eq;
        Some(key)
    }
}

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'.'
}

//! Character cursor over the scanned text.
//!
//! Positions are byte offsets into a `&str` and always sit on a character
//! boundary. Besides the read position the cursor keeps a lookahead
//! position, always at or past the read position, that handlers use to
//! inspect upcoming characters before deciding how much to consume.

/// Cursor over borrowed source text.
///
/// The cursor is [`Copy`], enabling cheap state snapshots.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    /// Read position (byte offset).
    pos: usize,
    /// Lookahead position (byte offset), `>= pos`.
    lookahead: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            lookahead: 0,
        }
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Unread remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// The character at the read position.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character after the current one.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.peek_nth(1)
    }

    /// The `n`th character from the read position (`0` is the current one).
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// The character immediately before the read position.
    #[inline]
    pub fn previous(&self) -> Option<char> {
        self.src[..self.pos].chars().next_back()
    }

    /// Consume one character and return it.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        self.lookahead = self.pos;
        Some(c)
    }

    /// Consume `c` if it is the current character.
    #[inline]
    pub fn eat(&mut self, c: char) -> bool {
        if self.current() == Some(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds. Returns the number of bytes eaten.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let start = self.pos;
        let len = self
            .rest()
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(self.src.len() - start, |(i, _)| i);
        self.pos += len;
        self.lookahead = self.pos;
        len
    }

    /// Move the read position forward to `pos`, clamped to the end of input.
    ///
    /// `pos` must be on a character boundary.
    #[inline]
    pub fn seek(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos, "cursor never moves backward");
        debug_assert!(
            self.src.is_char_boundary(pos.min(self.src.len())),
            "seek target {pos} is not a character boundary"
        );
        self.pos = pos.min(self.src.len());
        self.lookahead = self.pos;
    }

    /// Move to the end of input.
    #[inline]
    pub fn seek_eof(&mut self) {
        self.seek(self.src.len());
    }

    /// Source text from `start` to the read position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.src[start..self.pos]
    }

    // ─── Lookahead ──────────────────────────────────────────────────────

    /// Pull the lookahead position back to the read position.
    #[inline]
    pub fn reset_lookahead(&mut self) {
        self.lookahead = self.pos;
    }

    /// Return the character at the lookahead position and step past it.
    #[inline]
    pub fn look_ahead(&mut self) -> Option<char> {
        let c = self.src[self.lookahead..].chars().next()?;
        self.lookahead += c.len_utf8();
        Some(c)
    }


    // ─── Fast Skips ─────────────────────────────────────────────────────

    /// Advance to the next `\n` or `\r`, or to EOF if neither occurs.
    ///
    /// The terminator itself is not consumed.
    pub fn eat_until_line_end(&mut self) {
        match memchr::memchr2(b'\n', b'\r', self.rest().as_bytes()) {
            Some(offset) => self.seek(self.pos + offset),
            None => self.seek_eof(),
        }
    }

    /// Advance past the first occurrence of `needle`.
    ///
    /// Returns `false`, leaving the cursor untouched, if `needle` does not occur.
    pub fn eat_through(&mut self, needle: &str) -> bool {
        match memchr::memmem::find(self.rest().as_bytes(), needle.as_bytes()) {
            Some(offset) => {
                self.seek(self.pos + offset + needle.len());
                true
            }
            None => false,
        }
    }

    /// Advance to the next occurrence of either ASCII byte, or to EOF.
    ///
    /// Both needles must be ASCII so the landing position is a character
    /// boundary. Returns `true` if a needle was found.
    pub fn eat_until_either(&mut self, a: u8, b: u8) -> bool {
        debug_assert!(a.is_ascii() && b.is_ascii());
        match memchr::memchr2(a, b, self.rest().as_bytes()) {
            Some(offset) => {
                self.seek(self.pos + offset);
                true
            }
            None => {
                self.seek_eof();
                false
            }
        }
    }
}

#[cfg(test)]
mod tests;

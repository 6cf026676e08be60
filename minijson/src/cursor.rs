// SPDX-License-Identifier: Apache-2.0

/// A read-only view over the input and the current parsing position.
///
/// End of input is reported as `None` from [`Cursor::peek`]; the input does not
/// need a terminator byte.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new Cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// The byte at the current position, or `None` at end of input.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// The byte `offset` positions ahead of the current one, without consuming.
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.data.get(self.pos.checked_add(offset)?).copied()
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Moves the position forward by `count` bytes, clamped to the end of input.
    pub fn advance(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count).min(self.data.len());
    }

    /// Skips JSON insignificant whitespace: space, tab, newline and carriage return.
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    /// The unconsumed input from the current position to the end.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or_default()
    }
}

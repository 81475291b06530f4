//! Cursor over decoded scalar values
//!
//!     The cursor never hands out a forbidden character: [`Cursor::peek`] reports it as an
//!     error instead, which is how forbidden characters abort lexing wherever they occur.
//!     Raw lookahead ([`Cursor::lookahead`]) skips that check and is only used to compare
//!     against known-good characters.

use std::ops::Range;

use super::classify::is_forbidden;
use super::error::LexError;

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a [u32],
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    /// A cursor over `src[range]`. Offsets reported by the cursor stay relative to `src`.
    pub fn new(src: &'a [u32], range: Range<usize>) -> Self {
        Cursor {
            src,
            pos: range.start,
            end: range.end,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The current character, `None` at the end of input.
    pub fn peek(&self) -> Result<Option<char>, LexError> {
        match self.lookahead(0) {
            None => Ok(None),
            Some(cp) if is_forbidden(cp) => Err(LexError::Forbidden {
                code_point: cp,
                offset: self.pos,
            }),
            Some(cp) => Ok(char::from_u32(cp)),
        }
    }

    /// The raw code point `n` positions ahead, without the forbidden check.
    pub fn lookahead(&self, n: usize) -> Option<u32> {
        let at = self.pos + n;
        if at < self.end {
            Some(self.src[at])
        } else {
            None
        }
    }

    /// Whether the character `n` positions ahead is `c`.
    pub fn is_at(&self, n: usize, c: char) -> bool {
        self.lookahead(n) == Some(u32::from(c))
    }

    /// Whether the input at the cursor begins with `chars`.
    pub fn starts_with(&self, chars: &[char]) -> bool {
        chars.iter().enumerate().all(|(n, &c)| self.is_at(n, c))
    }

    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    pub fn advance_by(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.end);
    }

    /// The text of an already-consumed range.
    pub fn text(&self, range: Range<usize>) -> String {
        self.src[range].iter().filter_map(|&cp| char::from_u32(cp)).collect()
    }
}

//! Source decoding
//!
//!     Turns raw bytes into scalar values. The decoder is deliberately more permissive than
//!     `std::str::from_utf8`: an encoded surrogate or a four-byte sequence above U+10FFFF is
//!     structurally well formed, so it is decoded into its code point and left for the
//!     forbidden-character check to reject with a precise `U+XXXX` message. Anything that is
//!     not structurally UTF-8 (stray continuation bytes, truncated or overlong sequences) is an
//!     encoding error.

use super::error::LexError;

/// Decodes `bytes` into code points.
pub fn decode(bytes: &[u8]) -> Result<Vec<u32>, LexError> {
    // Fast path: most input is plain UTF-8.
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.chars().map(u32::from).collect());
    }

    let mut scalars = Vec::with_capacity(bytes.len());
    let mut pos = 0;
    while pos < bytes.len() {
        let (cp, width) = decode_one(bytes, pos).ok_or(LexError::Encoding { offset: pos })?;
        scalars.push(cp);
        pos += width;
    }
    Ok(scalars)
}

/// Decodes the sequence starting at `pos`, returning the code point and its byte width.
fn decode_one(bytes: &[u8], pos: usize) -> Option<(u32, usize)> {
    let lead = bytes[pos];
    let (width, initial, min) = match lead {
        0x00..=0x7F => return Some((u32::from(lead), 1)),
        0xC2..=0xDF => (2, u32::from(lead & 0x1F), 0x80),
        0xE0..=0xEF => (3, u32::from(lead & 0x0F), 0x800),
        0xF0..=0xF7 => (4, u32::from(lead & 0x07), 0x10000),
        // continuation bytes, overlong two-byte leads, and five/six-byte leads
        _ => return None,
    };

    let tail = bytes.get(pos + 1..pos + width)?;
    let mut cp = initial;
    for &byte in tail {
        if byte & 0xC0 != 0x80 {
            return None;
        }
        cp = (cp << 6) | u32::from(byte & 0x3F);
    }

    if cp < min {
        return None;
    }
    Some((cp, width))
}

//! Character classification
//!
//!     Pure predicates over a single scalar value. Everything the lexer decides about a
//!     character goes through here, so the character sets of the format live in one place.
//!
//!     Forbidden checks take a raw `u32` because the decoder lets surrogates and values past
//!     U+10FFFF through; they must be reported, not silently replaced. The other predicates
//!     only ever see characters that already passed the forbidden check.

use crate::extensions::{Extension, Extensions};

/// Line terminators. CR and LF are separate terminators, CRLF is never merged here.
pub const LINE_TERMINATORS: [char; 7] = [
    '\u{000A}', '\u{000B}', '\u{000C}', '\u{000D}', '\u{0085}', '\u{2028}', '\u{2029}',
];

/// Characters that can never appear literally inside an unquoted argument.
pub const RESERVED_PUNCTUATORS: [char; 5] = ['"', '#', ';', '{', '}'];

/// Reserved in addition to [`RESERVED_PUNCTUATORS`] while expression arguments are active.
pub const EXPRESSION_OPEN: char = '(';

pub fn is_line_terminator(c: char) -> bool {
    LINE_TERMINATORS.contains(&c)
}

/// Unicode `White_Space`, minus the line terminators.
pub fn is_whitespace(c: char) -> bool {
    !is_line_terminator(c) && c.is_whitespace()
}

/// The supplementary planes U+40000..=U+EFFFF have no assigned characters.
fn is_unassigned(cp: u32) -> bool {
    (0x40000..=0xEFFFF).contains(&cp)
}

fn is_surrogate(cp: u32) -> bool {
    (0xD800..=0xDFFF).contains(&cp)
}

/// Forbidden characters abort lexing wherever they occur.
pub fn is_forbidden(cp: u32) -> bool {
    if cp > 0x10FFFF || is_surrogate(cp) || is_unassigned(cp) {
        return true;
    }
    match char::from_u32(cp) {
        Some(c) => c.is_control() && !is_line_terminator(c) && !is_whitespace(c),
        None => true,
    }
}

pub fn is_reserved(c: char, extensions: &Extensions) -> bool {
    RESERVED_PUNCTUATORS.contains(&c)
        || (c == EXPRESSION_OPEN && extensions.has(Extension::ExpressionArguments))
}

/// Renders a code point as `U+XXXX`, widening past four digits only when needed.
pub fn format_code_point(cp: u32) -> String {
    if cp < 0x10000 {
        format!("U+{:04X}", cp)
    } else {
        format!("U+{:X}", cp)
    }
}

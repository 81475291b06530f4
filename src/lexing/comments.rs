//! Comment scanners
//!
//!     `#` line comments are part of the base grammar; `//` and `/* */` only exist with the
//!     C-style comments extension. Both scanners return the comment text without its markers.
//!     A line comment stops before the line terminator, which still lexes as a newline.

use super::classify::is_line_terminator;
use super::cursor::Cursor;
use super::error::LexError;

/// Skips a `marker_len` long marker and reads to the end of the line.
pub fn line_comment(cursor: &mut Cursor<'_>, marker_len: usize) -> Result<String, LexError> {
    cursor.advance_by(marker_len);
    let start = cursor.pos();
    while let Some(c) = cursor.peek()? {
        if is_line_terminator(c) {
            break;
        }
        cursor.advance();
    }
    Ok(cursor.text(start..cursor.pos()))
}

/// Reads a `/* ... */` comment. Block comments do not nest.
pub fn block_comment(cursor: &mut Cursor<'_>) -> Result<String, LexError> {
    let open = cursor.pos();
    cursor.advance_by(2);
    let start = cursor.pos();
    loop {
        match cursor.peek()? {
            None => return Err(LexError::UnterminatedComment { offset: open }),
            Some('*') if cursor.is_at(1, '/') => {
                let content = cursor.text(start..cursor.pos());
                cursor.advance_by(2);
                return Ok(content);
            }
            Some(_) => cursor.advance(),
        }
    }
}

//! Escape sequences
//!
//!     A backslash escapes the character after it to itself, in every quoting dialect. What
//!     differs between the dialects is which characters may not be escaped:
//!
//!         Unquoted:      whitespace and line terminators are illegal.
//!         Quoted:        a line terminator is allowed and decodes to nothing, so a quoted
//!                        argument can be broken across physical lines. Other whitespace is
//!                        illegal.
//!         TripleQuoted:  line terminators need no escaping there, so escaping one is an
//!                        incomplete escape. Other whitespace is illegal.
//!
//!     A backslash at the end of input is an incomplete escape inside quotes and an illegal
//!     one outside them.

use super::classify::{is_line_terminator, is_whitespace};
use super::cursor::Cursor;
use super::error::LexError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteMode {
    Unquoted,
    Quoted,
    TripleQuoted,
}

/// Consumes a backslash and the character it escapes.
///
/// Returns the decoded character, or `None` for an escaped line terminator in a quoted
/// argument.
pub fn escape(cursor: &mut Cursor<'_>, mode: QuoteMode) -> Result<Option<char>, LexError> {
    let offset = cursor.pos();
    cursor.advance();

    let c = match cursor.peek() {
        Ok(Some(c)) => c,
        Ok(None) if mode != QuoteMode::Unquoted => {
            return Err(LexError::IncompleteEscape { offset })
        }
        Ok(None) | Err(_) => return Err(LexError::IllegalEscape { offset }),
    };

    if is_line_terminator(c) {
        return match mode {
            QuoteMode::Quoted => {
                cursor.advance();
                Ok(None)
            }
            QuoteMode::TripleQuoted => Err(LexError::IncompleteEscape { offset }),
            QuoteMode::Unquoted => Err(LexError::IllegalEscape { offset }),
        };
    }
    if is_whitespace(c) {
        return Err(LexError::IllegalEscape { offset });
    }

    cursor.advance();
    Ok(Some(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(src: &str, mode: QuoteMode) -> (Result<Option<char>, LexError>, usize) {
        let scalars: Vec<u32> = src.chars().map(u32::from).collect();
        let mut cursor = Cursor::new(&scalars, 0..scalars.len());
        let result = escape(&mut cursor, mode);
        (result, cursor.pos())
    }

    #[test]
    fn test_escapes_to_itself() {
        for mode in [QuoteMode::Unquoted, QuoteMode::Quoted, QuoteMode::TripleQuoted] {
            assert_eq!(run("\\\"", mode), (Ok(Some('"')), 2));
            assert_eq!(run("\\\\", mode), (Ok(Some('\\')), 2));
        }
    }

    #[test]
    fn test_escaped_whitespace_is_illegal() {
        for mode in [QuoteMode::Unquoted, QuoteMode::Quoted, QuoteMode::TripleQuoted] {
            assert_eq!(run("\\ ", mode).0, Err(LexError::IllegalEscape { offset: 0 }));
        }
    }

    #[test]
    fn test_escaped_line_terminator() {
        assert_eq!(
            run("\\\n", QuoteMode::Unquoted).0,
            Err(LexError::IllegalEscape { offset: 0 })
        );
        assert_eq!(run("\\\n", QuoteMode::Quoted), (Ok(None), 2));
        assert_eq!(
            run("\\\n", QuoteMode::TripleQuoted).0,
            Err(LexError::IncompleteEscape { offset: 0 })
        );
    }

    #[test]
    fn test_end_of_input() {
        assert_eq!(
            run("\\", QuoteMode::Unquoted).0,
            Err(LexError::IllegalEscape { offset: 0 })
        );
        assert_eq!(
            run("\\", QuoteMode::Quoted).0,
            Err(LexError::IncompleteEscape { offset: 0 })
        );
        assert_eq!(
            run("\\", QuoteMode::TripleQuoted).0,
            Err(LexError::IncompleteEscape { offset: 0 })
        );
    }

    #[test]
    fn test_escaped_forbidden_character() {
        assert_eq!(
            run("\\\u{7}", QuoteMode::Quoted).0,
            Err(LexError::IllegalEscape { offset: 0 })
        );
    }
}

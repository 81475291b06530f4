//! Argument scanners
//!
//!     One scanner per argument form. Each is entered with the cursor past any opening
//!     delimiter and returns the decoded content, leaving the cursor past the closing one. The
//!     caller owns token construction, since it knows where the token started.

use super::classify::{is_line_terminator, is_reserved, is_whitespace};
use super::cursor::Cursor;
use super::error::LexError;
use super::escape::{escape, QuoteMode};
use crate::extensions::Extensions;

/// Length of the longest configured punctuator starting at the cursor, if any.
pub fn match_punctuator(cursor: &Cursor<'_>, extensions: &Extensions) -> Option<usize> {
    extensions
        .punctuators()
        .iter()
        .find(|punctuator| cursor.starts_with(punctuator))
        .map(Vec::len)
}

/// A bare argument. Stops before whitespace, a line terminator, a reserved punctuator, or
/// the first position where a configured punctuator starts.
pub fn unquoted(cursor: &mut Cursor<'_>, extensions: &Extensions) -> Result<String, LexError> {
    let mut arg = String::new();
    while let Some(c) = cursor.peek()? {
        if is_whitespace(c)
            || is_line_terminator(c)
            || is_reserved(c, extensions)
            || match_punctuator(cursor, extensions).is_some()
        {
            break;
        }

        if c == '\\' {
            arg.extend(escape(cursor, QuoteMode::Unquoted)?);
        } else {
            arg.push(c);
            cursor.advance();
        }
    }
    Ok(arg)
}

/// A `"..."` argument. `open` is the offset of the opening quote.
pub fn quoted(cursor: &mut Cursor<'_>, open: usize) -> Result<String, LexError> {
    let mut arg = String::new();
    loop {
        match cursor.peek()? {
            Some('"') => {
                cursor.advance();
                return Ok(arg);
            }
            Some('\\') => arg.extend(escape(cursor, QuoteMode::Quoted)?),
            Some(c) if !is_line_terminator(c) => {
                arg.push(c);
                cursor.advance();
            }
            _ => return Err(LexError::UnclosedQuoted { offset: open }),
        }
    }
}

/// A `"""..."""` argument. `open` is the offset of the opening delimiter.
///
/// One or two quotes that do not complete a closing delimiter are content.
pub fn triple_quoted(cursor: &mut Cursor<'_>, open: usize) -> Result<String, LexError> {
    let mut arg = String::new();
    let mut quotes = 0;
    loop {
        let c = cursor
            .peek()?
            .ok_or(LexError::UnclosedQuoted { offset: open })?;

        if c == '"' {
            cursor.advance();
            quotes += 1;
            if quotes == 3 {
                return Ok(arg);
            }
            continue;
        }

        arg.extend(std::iter::repeat('"').take(quotes));
        quotes = 0;

        if c == '\\' {
            arg.extend(escape(cursor, QuoteMode::TripleQuoted)?);
        } else {
            arg.push(c);
            cursor.advance();
        }
    }
}

/// A balanced `(...)` argument; the content is the interior, verbatim. `open` is the offset
/// of the opening parenthesis.
pub fn expression(cursor: &mut Cursor<'_>, open: usize) -> Result<String, LexError> {
    let start = cursor.pos();
    let mut depth = 0usize;
    loop {
        match cursor.peek()? {
            Some(')') if depth == 0 => {
                let content = cursor.text(start..cursor.pos());
                cursor.advance();
                return Ok(content);
            }
            Some(')') => depth -= 1,
            Some('(') => depth += 1,
            Some(c) if !is_line_terminator(c) => {}
            _ => return Err(LexError::IncompleteExpression { offset: open }),
        }
        cursor.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extensions::Extension;

    fn scan<T>(src: &str, skip: usize, f: impl FnOnce(&mut Cursor<'_>) -> T) -> (T, usize) {
        let scalars: Vec<u32> = src.chars().map(u32::from).collect();
        let mut cursor = Cursor::new(&scalars, 0..scalars.len());
        cursor.advance_by(skip);
        let result = f(&mut cursor);
        (result, cursor.pos())
    }

    #[test]
    fn test_unquoted_stops_at_boundaries() {
        let none = Extensions::new();
        assert_eq!(scan("foo bar", 0, |c| unquoted(c, &none)), (Ok("foo".into()), 3));
        assert_eq!(scan("foo;", 0, |c| unquoted(c, &none)), (Ok("foo".into()), 3));
        assert_eq!(scan("foo{", 0, |c| unquoted(c, &none)), (Ok("foo".into()), 3));
        assert_eq!(scan("foo\"x\"", 0, |c| unquoted(c, &none)), (Ok("foo".into()), 3));
        assert_eq!(scan("f(o)o", 0, |c| unquoted(c, &none)), (Ok("f(o)o".into()), 5));
    }

    #[test]
    fn test_unquoted_escapes() {
        let none = Extensions::new();
        assert_eq!(
            scan(r"a\;b\{", 0, |c| unquoted(c, &none)),
            (Ok("a;b{".into()), 6)
        );
        assert_eq!(
            scan("a\\ b", 0, |c| unquoted(c, &none)).0,
            Err(LexError::IllegalEscape { offset: 1 })
        );
    }

    #[test]
    fn test_unquoted_stops_at_punctuator() {
        let exts = Extensions::new().with(Extension::PunctuatorArguments, "=\n:=");
        assert_eq!(scan("x:=1", 0, |c| unquoted(c, &exts)), (Ok("x".into()), 1));
        assert_eq!(scan("a:b", 0, |c| unquoted(c, &exts)), (Ok("a:b".into()), 3));
    }

    #[test]
    fn test_match_punctuator_longest_wins() {
        let exts = Extensions::new().with(Extension::PunctuatorArguments, "=\n:=\n:");
        assert_eq!(scan(":=1", 0, |c| match_punctuator(c, &exts)).0, Some(2));
        assert_eq!(scan(":1", 0, |c| match_punctuator(c, &exts)).0, Some(1));
        assert_eq!(scan("1", 0, |c| match_punctuator(c, &exts)).0, None);
    }

    #[test]
    fn test_quoted() {
        assert_eq!(scan("\"a b\" c", 1, |c| quoted(c, 0)), (Ok("a b".into()), 5));
        assert_eq!(scan("\"a\\\"b\"", 1, |c| quoted(c, 0)), (Ok("a\"b".into()), 6));
        assert_eq!(scan("\"a\\\nb\"", 1, |c| quoted(c, 0)), (Ok("ab".into()), 6));
        assert_eq!(
            scan("\"a\nb\"", 1, |c| quoted(c, 0)).0,
            Err(LexError::UnclosedQuoted { offset: 0 })
        );
        assert_eq!(
            scan("\"abc", 1, |c| quoted(c, 0)).0,
            Err(LexError::UnclosedQuoted { offset: 0 })
        );
    }

    #[test]
    fn test_triple_quoted() {
        assert_eq!(
            scan("\"\"\"a\n\"b\"\"c\"\"\"", 3, |c| triple_quoted(c, 0)),
            (Ok("a\n\"b\"\"c".into()), 13)
        );
        assert_eq!(
            scan("\"\"\"a\\\"\"\"\"", 3, |c| triple_quoted(c, 0)),
            (Ok("a\"".into()), 9)
        );
        assert_eq!(
            scan("\"\"\"a\"\"", 3, |c| triple_quoted(c, 0)).0,
            Err(LexError::UnclosedQuoted { offset: 0 })
        );
        assert_eq!(
            scan("\"\"\"a\\\n\"\"\"", 3, |c| triple_quoted(c, 0)).0,
            Err(LexError::IncompleteEscape { offset: 4 })
        );
    }

    #[test]
    fn test_expression() {
        assert_eq!(
            scan("(a (b) c) d", 1, |c| expression(c, 0)),
            (Ok("a (b) c".into()), 9)
        );
        assert_eq!(scan("()", 1, |c| expression(c, 0)), (Ok("".into()), 2));
        assert_eq!(
            scan("(a (b)", 1, |c| expression(c, 0)).0,
            Err(LexError::IncompleteExpression { offset: 0 })
        );
        assert_eq!(
            scan("(a\n)", 1, |c| expression(c, 0)).0,
            Err(LexError::IncompleteExpression { offset: 0 })
        );
    }
}

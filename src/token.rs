//! Tokens
//!
//!     The lexer produces a flat sequence of [`Token`]s, strictly in source order. Every
//!     character of the input belongs to exactly one token, including whitespace, comments and
//!     the byte order mark, which is what makes the token stream lossless: concatenating the
//!     `source` of every token gives back the input (see
//!     [detokenizer](crate::formats::detokenizer)).
//!
//!     `content` is what the parser sees: the decoded argument with escapes resolved and quote
//!     delimiters stripped, or the text of a comment without its markers. `source` is the exact
//!     slice of input the token came from. The two differ whenever quoting or escaping was
//!     involved.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// A leading byte order mark (U+FEFF or U+FFFE).
    LeadingMarker,
    /// A trailing SUB (U+001A).
    TrailingMarker,
    /// Bare argument text, also used for expression and punctuator arguments.
    UnquotedArgument,
    QuotedArgument,
    TripleQuotedArgument,
    Newline,
    /// A backslash immediately followed by a line terminator.
    LineContinuation,
    /// A single whitespace character; runs are consecutive tokens.
    Whitespace,
    Comment,
    Semicolon,
    OpenBrace,
    CloseBrace,
}

impl TokenKind {
    pub fn is_argument(&self) -> bool {
        matches!(
            self,
            TokenKind::UnquotedArgument
                | TokenKind::QuotedArgument
                | TokenKind::TripleQuotedArgument
        )
    }

    /// Tokens the parser looks through when it needs the previous significant token.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Comment
                | TokenKind::LeadingMarker
                | TokenKind::TrailingMarker
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Decoded text.
    pub content: String,
    /// Exact source text, delimiters included.
    pub source: String,
    /// Scalar-value offsets of `source` in the decoded input.
    pub span: Range<usize>,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        content: impl Into<String>,
        source: impl Into<String>,
        span: Range<usize>,
    ) -> Self {
        Token {
            kind,
            content: content.into(),
            source: source.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.content)
    }
}

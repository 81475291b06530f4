//! Lexer
//!
//!     Turns Confetti source into a flat, lossless token stream. The lexer owns all the hard
//!     character-level work: quoting dialects, escapes, comments and the grammar extensions.
//!     That keeps the parser down to grouping tokens into directives.
//!
//! Preprocessing
//!
//!     Input is decoded into scalar values first (see [decode]). A single leading byte order
//!     mark (U+FEFF, or its swapped form U+FFFE) and a single trailing SUB (U+001A) are cut
//!     off and kept as marker tokens, so that the token stream still covers every character
//!     of the input.
//!
//! Dispatch
//!
//!     One decision per position, first match wins:
//!         1. line terminator           Newline
//!         2. whitespace                Whitespace, one character each
//!         3. `//`  (c-style comments)  Comment to end of line
//!         4. `#`                       Comment to end of line
//!         5. `/*`  (c-style comments)  Comment to `*/`
//!         6. `;` `{` `}`               punctuation
//!         7. `\` + line terminator     LineContinuation
//!         8. `(`   (expressions)       balanced expression argument
//!         9. configured punctuator     the punctuator as an argument, longest match
//!        10. `"""`                     triple-quoted argument
//!        11. `"`                       quoted argument
//!        12. anything else             unquoted argument
//!
//!     See [arguments] and [comments] for the individual scanners and [escape] for the
//!     escape rules they share.

pub mod arguments;
pub mod classify;
pub mod comments;
pub mod cursor;
pub mod decode;
pub mod error;
pub mod escape;

pub use error::LexError;

use tracing::{debug, trace};

use crate::extensions::{Extension, Extensions};
use crate::token::{Token, TokenKind};
use classify::{is_line_terminator, is_whitespace};
use cursor::Cursor;

const BYTE_ORDER_MARKS: [char; 2] = ['\u{FEFF}', '\u{FFFE}'];
const SUBSTITUTE: char = '\u{1A}';

/// Lexes `source` into tokens.
pub fn lex(source: &str, extensions: &Extensions) -> Result<Vec<Token>, LexError> {
    let scalars: Vec<u32> = source.chars().map(u32::from).collect();
    Lexer::new(&scalars, extensions).run()
}

/// Lexes raw bytes, failing with [`LexError::Encoding`] if they are not UTF-8.
///
/// Encoded surrogates and code points past U+10FFFF decode far enough to be reported as
/// forbidden characters.
pub fn lex_bytes(source: &[u8], extensions: &Extensions) -> Result<Vec<Token>, LexError> {
    let scalars = decode::decode(source)?;
    Lexer::new(&scalars, extensions).run()
}

pub struct Lexer<'a> {
    scalars: &'a [u32],
    extensions: &'a Extensions,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(scalars: &'a [u32], extensions: &'a Extensions) -> Self {
        Lexer {
            scalars,
            extensions,
            tokens: Vec::new(),
        }
    }

    pub fn run(mut self) -> Result<Vec<Token>, LexError> {
        let mut start = 0;
        let mut end = self.scalars.len();

        if let Some(mark) = self.marker_at(0, &BYTE_ORDER_MARKS) {
            self.tokens
                .push(Token::new(TokenKind::LeadingMarker, mark.clone(), mark, 0..1));
            start = 1;
        }
        let trailing = if end > start {
            self.marker_at(end - 1, &[SUBSTITUTE])
        } else {
            None
        };
        if trailing.is_some() {
            end -= 1;
        }

        let mut cursor = Cursor::new(self.scalars, start..end);
        while let Some(c) = cursor.peek()? {
            self.dispatch(&mut cursor, c)?;
        }

        if let Some(mark) = trailing {
            self.tokens
                .push(Token::new(TokenKind::TrailingMarker, mark.clone(), mark, end..end + 1));
        }

        debug!(
            tokens = self.tokens.len(),
            extensions = ?self.extensions.iter().map(|(ext, _)| ext).collect::<Vec<_>>(),
            "lexed source"
        );
        Ok(self.tokens)
    }

    fn marker_at(&self, index: usize, markers: &[char]) -> Option<String> {
        let c = char::from_u32(*self.scalars.get(index)?)?;
        markers.contains(&c).then(|| c.to_string())
    }

    fn dispatch(&mut self, cursor: &mut Cursor<'_>, c: char) -> Result<(), LexError> {
        let start = cursor.pos();
        let c_comments = self.extensions.has(Extension::CStyleComments);

        let (kind, content) = if is_line_terminator(c) {
            cursor.advance();
            (TokenKind::Newline, c.to_string())
        } else if is_whitespace(c) {
            cursor.advance();
            (TokenKind::Whitespace, c.to_string())
        } else if c_comments && cursor.starts_with(&['/', '/']) {
            (TokenKind::Comment, comments::line_comment(cursor, 2)?)
        } else if c == '#' {
            (TokenKind::Comment, comments::line_comment(cursor, 1)?)
        } else if c_comments && cursor.starts_with(&['/', '*']) {
            (TokenKind::Comment, comments::block_comment(cursor)?)
        } else if let Some(kind) = punctuation(c) {
            cursor.advance();
            (kind, String::new())
        } else if c == '\\' && self.line_terminator_follows(cursor) {
            cursor.advance_by(2);
            (TokenKind::LineContinuation, String::new())
        } else if c == '(' && self.extensions.has(Extension::ExpressionArguments) {
            cursor.advance();
            (
                TokenKind::UnquotedArgument,
                arguments::expression(cursor, start)?,
            )
        } else if let Some(len) = arguments::match_punctuator(cursor, self.extensions) {
            cursor.advance_by(len);
            (TokenKind::UnquotedArgument, cursor.text(start..cursor.pos()))
        } else if cursor.starts_with(&['"', '"', '"']) {
            cursor.advance_by(3);
            (
                TokenKind::TripleQuotedArgument,
                arguments::triple_quoted(cursor, start)?,
            )
        } else if c == '"' {
            cursor.advance();
            (TokenKind::QuotedArgument, arguments::quoted(cursor, start)?)
        } else {
            (
                TokenKind::UnquotedArgument,
                arguments::unquoted(cursor, self.extensions)?,
            )
        };

        let token = Token::new(kind, content, cursor.text(start..cursor.pos()), start..cursor.pos());
        trace!(%token, "token");
        self.tokens.push(token);
        Ok(())
    }

    fn line_terminator_follows(&self, cursor: &Cursor<'_>) -> bool {
        cursor
            .lookahead(1)
            .and_then(char::from_u32)
            .is_some_and(is_line_terminator)
    }
}

fn punctuation(c: char) -> Option<TokenKind> {
    match c {
        ';' => Some(TokenKind::Semicolon),
        '{' => Some(TokenKind::OpenBrace),
        '}' => Some(TokenKind::CloseBrace),
        _ => None,
    }
}

//! Parser
//!
//!     Groups the token stream into a tree of [`Directive`]s. Since the lexer already resolved
//!     quoting and escapes, parsing is a single left-to-right pass with one accumulator for
//!     the arguments of the directive being built.
//!
//! Directive Boundaries
//!
//!     Argument tokens append to the accumulator. A newline or a `;` closes the directive; an
//!     accumulator with no arguments is dropped, which is how blank lines disappear. A `;` needs
//!     a directive body in front of it: directly after another `;`, a newline, a line
//!     continuation, or at the start of a document or block it is an error.
//!
//! Blocks
//!
//!     On `{` the matching `}` is found by counting braces, and the tokens in between are
//!     parsed as a document of their own. Recursion works on index ranges over the one token
//!     slice, nothing is copied. The block belongs to the accumulated directive, which it then
//!     closes. With nothing accumulated it belongs to the previous directive at the same level
//!     instead, so that
//!
//!         server
//!         {
//!             port 80
//!         }
//!
//!     reads the same as `server { port 80 }`. A later standalone block replaces the one the
//!     previous directive already had.
//!
//!     Whitespace, comments and marker tokens are invisible to the parser except when it looks
//!     back for the previous significant token.

pub mod directive;
pub mod error;

pub use directive::Directive;
pub use error::ParseError;

use std::ops::Range;
use tracing::{debug, trace};

use crate::token::{Token, TokenKind};

/// Default limit on how deeply blocks may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parses a token stream with the default [`Parser`].
pub fn parse(tokens: &[Token]) -> Result<Vec<Directive>, ParseError> {
    Parser::new().parse(tokens)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    max_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Parser {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn parse(&self, tokens: &[Token]) -> Result<Vec<Directive>, ParseError> {
        let directives = self.parse_range(tokens, 0..tokens.len(), 0)?;
        debug!(
            tokens = tokens.len(),
            directives = directives.len(),
            "parsed document"
        );
        Ok(directives)
    }

    fn parse_range(
        &self,
        tokens: &[Token],
        range: Range<usize>,
        depth: usize,
    ) -> Result<Vec<Directive>, ParseError> {
        let mut directives: Vec<Directive> = Vec::new();
        let mut arguments: Vec<String> = Vec::new();

        let mut i = range.start;
        while i < range.end {
            let token = &tokens[i];
            let offset = token.span.start;

            match token.kind {
                kind if kind.is_argument() => arguments.push(token.content.clone()),

                TokenKind::Semicolon => {
                    match previous_significant(tokens, range.start, i) {
                        None
                        | Some(TokenKind::Semicolon)
                        | Some(TokenKind::Newline)
                        | Some(TokenKind::LineContinuation) => {
                            return Err(ParseError::UnexpectedSemicolon { offset })
                        }
                        Some(_) => {}
                    }
                    close_directive(&mut directives, &mut arguments);
                }

                TokenKind::Newline => close_directive(&mut directives, &mut arguments),

                TokenKind::OpenBrace => {
                    if previous_significant(tokens, range.start, i) == Some(TokenKind::Semicolon) {
                        return Err(ParseError::UnexpectedOpenBrace { offset });
                    }
                    let continues_previous = arguments.is_empty();
                    if continues_previous && directives.is_empty() {
                        return Err(ParseError::UnexpectedOpenBrace { offset });
                    }

                    let close = matching_close(tokens, i + 1, range.end)
                        .ok_or(ParseError::MissingCloseBrace { offset })?;
                    if depth >= self.max_depth {
                        return Err(ParseError::NestingTooDeep {
                            limit: self.max_depth,
                            offset,
                        });
                    }

                    trace!(depth = depth + 1, start = i + 1, end = close, "block");
                    let block = self.parse_range(tokens, i + 1..close, depth + 1)?;

                    if continues_previous {
                        match directives.last_mut() {
                            Some(previous) => previous.subdirectives = Some(block),
                            None => return Err(ParseError::UnexpectedOpenBrace { offset }),
                        }
                    } else {
                        directives.push(Directive {
                            arguments: std::mem::take(&mut arguments),
                            subdirectives: Some(block),
                        });
                    }
                    i = close;
                }

                TokenKind::CloseBrace => return Err(ParseError::UnmatchedCloseBrace { offset }),

                TokenKind::LineContinuation if arguments.is_empty() => {
                    return Err(ParseError::UnexpectedLineContinuation { offset })
                }

                _ => {}
            }
            i += 1;
        }

        close_directive(&mut directives, &mut arguments);
        Ok(directives)
    }
}

/// Moves the accumulated arguments into a finished directive, if there are any.
fn close_directive(directives: &mut Vec<Directive>, arguments: &mut Vec<String>) {
    if !arguments.is_empty() {
        directives.push(Directive {
            arguments: std::mem::take(arguments),
            subdirectives: None,
        });
    }
}

/// Kind of the last non-trivia token in `tokens[start..before]`.
fn previous_significant(tokens: &[Token], start: usize, before: usize) -> Option<TokenKind> {
    tokens[start..before]
        .iter()
        .rev()
        .map(|token| token.kind)
        .find(|kind| !kind.is_trivia())
}

/// Index of the `}` closing the block whose contents start at `from`.
fn matching_close(tokens: &[Token], from: usize, end: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().take(end).skip(from) {
        match token.kind {
            TokenKind::OpenBrace => depth += 1,
            TokenKind::CloseBrace if depth == 0 => return Some(i),
            TokenKind::CloseBrace => depth -= 1,
            _ => {}
        }
    }
    None
}

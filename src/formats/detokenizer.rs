//! Detokenizer
//!
//!     Converts a token stream back into source text. The lexer assigns every scalar value of
//!     its input to exactly one token, so for any input that lexes cleanly
//!
//!         detokenize(&lex(source, &extensions)?) == source
//!
//!     This is the whole of the reformatter: formatting-preserving edits are done on the token
//!     stream and written back out with [`detokenize`].

use crate::token::{Token, TokenKind};

/// Trait for converting a token to the text it was lexed from
pub trait ToSourceString {
    fn to_source_string(&self) -> String;
}

impl ToSourceString for Token {
    fn to_source_string(&self) -> String {
        match self.kind {
            TokenKind::Semicolon => ";".to_string(),
            TokenKind::OpenBrace => "{".to_string(),
            TokenKind::CloseBrace => "}".to_string(),
            _ => self.source.clone(),
        }
    }
}

pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(ToSourceString::to_source_string).collect()
}

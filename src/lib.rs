//! # confetti
//!
//! A lossless lexer and parser for the Confetti configuration language.
//!
//! A Confetti document is a list of directives. A directive is one or more arguments, ended by
//! a newline or `;`, optionally followed by a `{ }` block of subdirectives:
//!
//!     server web {
//!         listen 80; root "/srv/www"
//!         note """multi
//!     line"""
//!     }
//!
//! Arguments are opaque strings; giving them meaning is up to the application.
//!
//! Pipeline
//!
//!     bytes or text ─ [lexing] ─▶ Vec<Token> ─ [parsing] ─▶ Vec<Directive>
//!                                     │
//!                                     └─ [formats::detokenize] ─▶ the original source
//!
//!     The token stream keeps every character of the input, whitespace and comments included,
//!     so tools that edit a document can do so without disturbing its formatting. Grammar
//!     [extensions] change what the lexer recognizes; the parser is unaffected by them.
//!
//! Entry Points
//!
//!     - [`load`] / [`load_bytes`]: source to directives in one call
//!     - [`loader::DocumentLoader`]: the same with configuration, file loading and rendering
//!     - [`lexing::lex`] and [`parsing::Parser`] for the individual stages
//!
//! For the conformance fixtures and how tests use them, see the [testing module](testing).

pub mod config;
pub mod error;
pub mod extensions;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod testing;
pub mod token;

pub use error::Error;
pub use extensions::{Extension, ExtensionError, Extensions};
pub use lexing::{lex, lex_bytes, LexError};
pub use parsing::{parse, Directive, ParseError, Parser};
pub use token::{Token, TokenKind};

/// Lexes and parses `source`.
pub fn load(source: &str, extensions: &Extensions) -> Result<Vec<Directive>, Error> {
    let tokens = lex(source, extensions)?;
    Ok(parse(&tokens)?)
}

/// Lexes and parses raw bytes; malformed UTF-8 is a lexing error.
pub fn load_bytes(source: &[u8], extensions: &Extensions) -> Result<Vec<Directive>, Error> {
    let tokens = lex_bytes(source, extensions)?;
    Ok(parse(&tokens)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_c_like_program() {
        let extensions = Extensions::new()
            .with(Extension::CStyleComments, "")
            .with(Extension::ExpressionArguments, "")
            .with(Extension::PunctuatorArguments, "=\n:=");
        let source = "// This is a simple, C-like program.\nmsg:=\"Hello, World!\"\nif(isEmpty(msg)){\nmsg=\"(nil message)\"\n}\necho msg\n";

        assert_eq!(
            load(source, &extensions).unwrap(),
            vec![
                Directive::new(["msg", ":=", "Hello, World!"]),
                Directive::with_block(
                    ["if", "isEmpty(msg)"],
                    vec![Directive::new(["msg", "=", "(nil message)"])]
                ),
                Directive::new(["echo", "msg"]),
            ]
        );
    }

    #[test]
    fn test_load_reports_first_error() {
        let err = load("a \"open\n", &Extensions::new()).unwrap_err();
        assert!(matches!(err, Error::Lex(LexError::UnclosedQuoted { .. })));
        assert_eq!(err.to_string(), "unclosed quoted");
    }

    #[test]
    fn test_load_bytes_rejects_surrogates() {
        // U+D800 in generalized UTF-8
        let err = load_bytes(b"a \xED\xA0\x80", &Extensions::new()).unwrap_err();
        assert_eq!(err.to_string(), "illegal character U+D800");
        assert_eq!(err.offset(), Some(2));
    }
}

//! Crate level error
//!
//!     Each stage has its own error enum; [`Error`] wraps them for entry points such as
//!     [`load`](crate::load) and the [`DocumentLoader`](crate::loader::DocumentLoader) that run
//!     more than one stage. Display is forwarded unchanged so that `error.to_string()` is the
//!     bare stage message, e.g. `unexpected ';'`.

use crate::extensions::ExtensionError;
use crate::formats::FormatError;
use crate::lexing::LexError;
use crate::parsing::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Extension(#[from] ExtensionError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

impl Error {
    /// Scalar-value offset of the failure in the source, for lexing and parsing errors.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Lex(err) => Some(err.offset()),
            Error::Parse(err) => Some(err.offset()),
            _ => None,
        }
    }
}

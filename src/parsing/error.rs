//! Structural errors
//!
//!     Offsets are the scalar-value position of the offending token.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected ';'")]
    UnexpectedSemicolon { offset: usize },

    #[error("unexpected '{{'")]
    UnexpectedOpenBrace { offset: usize },

    #[error("expected '}}'")]
    MissingCloseBrace { offset: usize },

    #[error("found '}}' without matching '{{'")]
    UnmatchedCloseBrace { offset: usize },

    #[error("unexpected line continuation")]
    UnexpectedLineContinuation { offset: usize },

    #[error("blocks nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize, offset: usize },
}

impl ParseError {
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedSemicolon { offset }
            | ParseError::UnexpectedOpenBrace { offset }
            | ParseError::MissingCloseBrace { offset }
            | ParseError::UnmatchedCloseBrace { offset }
            | ParseError::UnexpectedLineContinuation { offset }
            | ParseError::NestingTooDeep { offset, .. } => *offset,
        }
    }
}

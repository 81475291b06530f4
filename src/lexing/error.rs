//! Lexing errors
//!
//!     Every lexing failure is fatal. Offsets are scalar-value positions in the decoded input,
//!     except for [`LexError::Encoding`], which points at the offending byte. Messages leave
//!     the position out so rendered errors stay stable across edits that shift text around.

use super::classify::format_code_point;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("malformed UTF-8")]
    Encoding { offset: usize },

    #[error("illegal character {}", format_code_point(*code_point))]
    Forbidden { code_point: u32, offset: usize },

    #[error("illegal escape character")]
    IllegalEscape { offset: usize },

    #[error("incomplete escape sequence")]
    IncompleteEscape { offset: usize },

    #[error("unclosed quoted")]
    UnclosedQuoted { offset: usize },

    #[error("unterminated multi-line comment")]
    UnterminatedComment { offset: usize },

    #[error("incomplete expression")]
    IncompleteExpression { offset: usize },
}

impl LexError {
    /// Where the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            LexError::Encoding { offset }
            | LexError::Forbidden { offset, .. }
            | LexError::IllegalEscape { offset }
            | LexError::IncompleteEscape { offset }
            | LexError::UnclosedQuoted { offset }
            | LexError::UnterminatedComment { offset }
            | LexError::IncompleteExpression { offset } => *offset,
        }
    }
}

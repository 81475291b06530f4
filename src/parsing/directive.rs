//! The directive tree
//!
//!     The whole AST of Confetti is one type. A directive has one or more arguments and may
//!     own a block of subdirectives. `subdirectives` keeps two states apart: `None` when no
//!     `{ }` followed the arguments and `Some(vec![])` for an empty `{ }`. The parser never
//!     builds a directive without arguments.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    pub arguments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdirectives: Option<Vec<Directive>>,
}

impl Directive {
    /// A directive without a block.
    pub fn new<I, S>(arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Directive {
            arguments: arguments.into_iter().map(Into::into).collect(),
            subdirectives: None,
        }
    }

    /// A directive followed by a (possibly empty) block.
    pub fn with_block<I, S>(arguments: I, subdirectives: Vec<Directive>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Directive {
            subdirectives: Some(subdirectives),
            ..Directive::new(arguments)
        }
    }

    pub fn has_block(&self) -> bool {
        self.subdirectives.is_some()
    }

    /// The block's directives; empty when there is no block.
    pub fn children(&self) -> &[Directive] {
        self.subdirectives.as_deref().unwrap_or_default()
    }

    /// The first argument, which usually names the directive.
    pub fn name(&self) -> Option<&str> {
        self.arguments.first().map(String::as_str)
    }
}

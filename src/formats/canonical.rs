//! Canonical debug format
//!
//!     A rendering of the directive tree that makes block structure and argument boundaries
//!     visible. Arguments are wrapped in `<>` and separated by one space. A directive with a
//!     block, even an empty one, is followed by ` [`, its subdirectives one level deeper, and a
//!     closing `]` on its own line:
//!
//!         <server> <web> [
//!             <port> <80>
//!         ]
//!         <empty> [
//!         ]
//!
//!     Each level indents by four spaces. Every directive line ends with a newline.

use super::registry::{FormatError, Formatter};
use crate::parsing::Directive;

const INDENT: &str = "    ";

pub fn to_canonical(directives: &[Directive]) -> String {
    let mut out = String::new();
    write_level(&mut out, directives, 0);
    out
}

fn write_level(out: &mut String, directives: &[Directive], depth: usize) {
    let indent = INDENT.repeat(depth);
    for directive in directives {
        out.push_str(&indent);
        for (i, argument) in directive.arguments.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push('<');
            out.push_str(argument);
            out.push('>');
        }
        match &directive.subdirectives {
            None => out.push('\n'),
            Some(block) => {
                out.push_str(" [\n");
                write_level(out, block, depth + 1);
                out.push_str(&indent);
                out.push_str("]\n");
            }
        }
    }
}

pub struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn name(&self) -> &str {
        "canonical"
    }

    fn serialize(&self, directives: &[Directive]) -> Result<String, FormatError> {
        Ok(to_canonical(directives))
    }

    fn description(&self) -> &str {
        "Bracketed directive tree with <argument> markers"
    }
}

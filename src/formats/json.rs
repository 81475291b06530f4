//! JSON dumps of tokens and directive trees

use super::registry::{FormatError, Formatter};
use crate::parsing::Directive;
use crate::token::Token;

pub fn tokens_to_json(tokens: &[Token]) -> Result<String, FormatError> {
    serde_json::to_string_pretty(tokens)
        .map_err(|e| FormatError::SerializationError(e.to_string()))
}

pub fn directives_to_json(directives: &[Directive]) -> Result<String, FormatError> {
    serde_json::to_string_pretty(directives)
        .map_err(|e| FormatError::SerializationError(e.to_string()))
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, directives: &[Directive]) -> Result<String, FormatError> {
        directives_to_json(directives)
    }

    fn description(&self) -> &str {
        "Directive tree as pretty-printed JSON"
    }
}

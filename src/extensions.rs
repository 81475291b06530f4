//! Grammar extensions
//!
//!     Extensions are opt-in changes to what the lexer recognizes. Each one is keyed by an
//!     [`Extension`] and carries a raw configuration string; a missing key means the extension
//!     is off. Only the punctuator extension reads its value, the other two are switched on by
//!     presence alone.
//!
//!         c_style_comments       `// line` and `/* block */` comments.
//!         expression_arguments   a balanced `( ... )` span is one argument, `(` is reserved.
//!         punctuator_arguments   newline separated list of punctuators that always lex as
//!                                arguments of their own, e.g. `=` and `:=`.
//!
//!     The punctuator list is normalized once, when the extension is set: CRLF and CR become
//!     LF, the whole string is trimmed, split on LF, and sorted longest first so that `:=`
//!     wins over `:`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtensionError {
    #[error("unknown extension {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Extension {
    CStyleComments,
    ExpressionArguments,
    PunctuatorArguments,
}

impl Extension {
    pub const ALL: [Extension; 3] = [
        Extension::CStyleComments,
        Extension::ExpressionArguments,
        Extension::PunctuatorArguments,
    ];

    /// The identifier used in configuration files and fixture names.
    pub fn identifier(&self) -> &'static str {
        match self {
            Extension::CStyleComments => "c_style_comments",
            Extension::ExpressionArguments => "expression_arguments",
            Extension::PunctuatorArguments => "punctuator_arguments",
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Extension {
    type Err = ExtensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Extension::ALL
            .into_iter()
            .find(|ext| ext.identifier() == s)
            .ok_or_else(|| ExtensionError::Unknown(s.to_string()))
    }
}

/// The set of active extensions and their configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct Extensions {
    values: BTreeMap<Extension, String>,
    punctuators: Vec<Vec<char>>,
}

impl Extensions {
    /// No extensions active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Extensions::insert`].
    pub fn with(mut self, extension: Extension, value: impl Into<String>) -> Self {
        self.insert(extension, value);
        self
    }

    pub fn insert(&mut self, extension: Extension, value: impl Into<String>) {
        let value = value.into();
        if extension == Extension::PunctuatorArguments {
            self.punctuators = normalize_punctuators(&value);
        }
        self.values.insert(extension, value);
    }

    pub fn remove(&mut self, extension: Extension) -> Option<String> {
        if extension == Extension::PunctuatorArguments {
            self.punctuators.clear();
        }
        self.values.remove(&extension)
    }

    pub fn has(&self, extension: Extension) -> bool {
        self.values.contains_key(&extension)
    }

    pub fn get(&self, extension: Extension) -> Option<&str> {
        self.values.get(&extension).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Extension, &str)> {
        self.values.iter().map(|(ext, value)| (*ext, value.as_str()))
    }

    /// Configured punctuators, longest first. Empty unless punctuator arguments are active.
    pub fn punctuators(&self) -> &[Vec<char>] {
        &self.punctuators
    }

    /// Builds extensions from `(identifier, value)` pairs, rejecting unknown identifiers.
    pub fn from_identifiers<I, K, V>(pairs: I) -> Result<Self, ExtensionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut extensions = Extensions::new();
        for (identifier, value) in pairs {
            extensions.insert(identifier.as_ref().parse()?, value);
        }
        Ok(extensions)
    }
}

impl TryFrom<BTreeMap<String, String>> for Extensions {
    type Error = ExtensionError;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        Extensions::from_identifiers(map)
    }
}

impl From<Extensions> for BTreeMap<String, String> {
    fn from(extensions: Extensions) -> Self {
        extensions
            .values
            .into_iter()
            .map(|(ext, value)| (ext.identifier().to_string(), value))
            .collect()
    }
}

fn normalize_punctuators(raw: &str) -> Vec<Vec<char>> {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    let mut punctuators: Vec<Vec<char>> = normalized
        .trim()
        .split('\n')
        .filter(|p| !p.is_empty())
        .map(|p| p.chars().collect())
        .collect();
    // stable, so equal-length entries keep their configured order
    punctuators.sort_by(|a, b| b.len().cmp(&a.len()));
    punctuators
}

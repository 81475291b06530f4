//! Configuration loading
//!
//!     `defaults/confetti.default.toml` is embedded into the library so that documented and
//!     runtime defaults cannot drift apart. Applications layer their own TOML files and single
//!     key overrides on top via [`ConfigLoader`] before deserializing into [`ConfettiConfig`].
//!
//!     Extensions are a table of identifier to value, the same shape the fixtures use:
//!
//!         [extensions]
//!         c_style_comments = ""
//!         punctuator_arguments = "=\n:="
//!
//!     An unknown identifier fails deserialization.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::extensions::Extensions;
use crate::parsing::Parser;

const DEFAULT_TOML: &str = include_str!("../defaults/confetti.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct ConfettiConfig {
    #[serde(default)]
    pub extensions: Extensions,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    pub max_nesting_depth: usize,
}

impl ConfettiConfig {
    /// A parser honoring the configured limits.
    pub fn parser(&self) -> Parser {
        Parser::new().with_max_depth(self.limits.max_nesting_depth)
    }
}

/// Builds a [`ConfettiConfig`] from the embedded defaults plus whatever the caller layers on.
///
/// Later layers win key by key, so a file that only sets `[extensions]` keeps the default
/// nesting limit.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        ConfigLoader {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layers a TOML file; `build` fails if it does not exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), true)
    }

    /// Layers a TOML file that may be absent, such as a per-user `confetti.toml`.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), false)
    }

    /// Layers TOML text that did not come from a file.
    pub fn with_toml(mut self, toml: &str) -> Self {
        self.builder = self.builder.add_source(File::from_str(toml, FileFormat::Toml));
        self
    }

    /// Sets one dotted key, e.g. `("limits.max_nesting_depth", 64i64)` or
    /// `("extensions.expression_arguments", "")`.
    pub fn set_override<I>(self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        let builder = self.builder.set_override(key, value)?;
        Ok(ConfigLoader { builder })
    }

    /// Merges the layers. Unknown extension identifiers and ill-typed limits fail here.
    pub fn build(self) -> Result<ConfettiConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer_file(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        ConfigLoader::new()
    }
}

/// The built-in configuration: no extensions and a nesting limit of
/// [`DEFAULT_MAX_DEPTH`](crate::parsing::DEFAULT_MAX_DEPTH).
pub fn load_defaults() -> Result<ConfettiConfig, ConfigError> {
    ConfigLoader::new().build()
}

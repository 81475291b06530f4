//! Document loading utilities
//!
//!     `DocumentLoader` bundles a source with the extensions and parser settings it should be
//!     read with, and offers one shortcut per stage: tokens, directives, and the formatted
//!     renderings. Sources are kept as bytes; text is decoded by the lexer so that malformed
//!     UTF-8 and encoded surrogates are reported like any other lexing error.
//!
//!         let directives = DocumentLoader::from_path("app.conf")?
//!             .with_config(&config)
//!             .parse()?;

use std::fs;
use std::path::Path;

use crate::config::{ConfettiConfig, ConfigLoader};
use crate::error::Error;
use crate::extensions::Extensions;
use crate::formats::{detokenize, to_canonical, FormatRegistry};
use crate::lexing::lex_bytes;
use crate::parsing::{Directive, Parser};
use crate::token::Token;

#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: Vec<u8>,
    extensions: Extensions,
    parser: Parser,
}

impl DocumentLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Ok(Self::from_bytes(fs::read(path)?))
    }

    pub fn from_bytes<B: Into<Vec<u8>>>(source: B) -> Self {
        DocumentLoader {
            source: source.into(),
            extensions: Extensions::new(),
            parser: Parser::new(),
        }
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        Self::from_bytes(source.into().into_bytes())
    }

    pub fn with_extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_parser(mut self, parser: Parser) -> Self {
        self.parser = parser;
        self
    }

    /// Takes both the extensions and the parser limits from `config`.
    pub fn with_config(self, config: &ConfettiConfig) -> Self {
        self.with_extensions(config.extensions.clone())
            .with_parser(config.parser())
    }

    /// Layers the TOML file at `path` over the built-in defaults and applies the result.
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, Error> {
        let config = ConfigLoader::new().with_file(path).build()?;
        Ok(self.with_config(&config))
    }

    /// Extensions by identifier, e.g. `[("c_style_comments", "")]`.
    pub fn with_extension_identifiers<I, K, V>(self, pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Ok(self.with_extensions(Extensions::from_identifiers(pairs)?))
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }

    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    pub fn tokenize(&self) -> Result<Vec<Token>, Error> {
        Ok(lex_bytes(&self.source, &self.extensions)?)
    }

    pub fn parse(&self) -> Result<Vec<Directive>, Error> {
        let tokens = self.tokenize()?;
        Ok(self.parser.parse(&tokens)?)
    }

    /// The source rebuilt from its tokens.
    pub fn reformat(&self) -> Result<String, Error> {
        Ok(detokenize(&self.tokenize()?))
    }

    pub fn canonical(&self) -> Result<String, Error> {
        Ok(to_canonical(&self.parse()?))
    }

    /// Parse and render with a named format from the default [`FormatRegistry`].
    pub fn render(&self, format: &str) -> Result<String, Error> {
        let directives = self.parse()?;
        Ok(FormatRegistry::default().serialize(&directives, format)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extensions::{Extension, ExtensionError};
    use crate::formats::FormatError;
    use crate::lexing::LexError;
    use crate::parsing::ParseError;
    use std::io::Write;

    #[test]
    fn test_from_string() {
        let loader = DocumentLoader::from_string("a b\nc { d }\n");
        assert_eq!(
            loader.parse().unwrap(),
            vec![
                Directive::new(["a", "b"]),
                Directive::with_block(["c"], vec![Directive::new(["d"])]),
            ]
        );
        assert_eq!(loader.canonical().unwrap(), "<a> <b>\n<c> [\n    <d>\n]\n");
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFkey value\r\n").unwrap();

        let loader = DocumentLoader::from_path(file.path()).unwrap();
        assert_eq!(loader.parse().unwrap(), vec![Directive::new(["key", "value"])]);
        assert_eq!(loader.reformat().unwrap().as_bytes(), loader.source());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = DocumentLoader::from_path(dir.path().join("nope.conf"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_malformed_bytes() {
        let loader = DocumentLoader::from_bytes(b"ok \xFF".to_vec());
        assert!(matches!(
            loader.tokenize(),
            Err(Error::Lex(LexError::Encoding { offset: 3 }))
        ));
    }

    #[test]
    fn test_extensions_change_the_result() {
        let source = "x:=1 // note\n";
        let plain = DocumentLoader::from_string(source);
        assert_eq!(
            plain.parse().unwrap(),
            vec![Directive::new(["x:=1", "//", "note"])]
        );

        let extended = plain.clone().with_extensions(
            Extensions::new()
                .with(Extension::CStyleComments, "")
                .with(Extension::PunctuatorArguments, ":="),
        );
        assert_eq!(
            extended.parse().unwrap(),
            vec![Directive::new(["x", ":=", "1"])]
        );
    }

    #[test]
    fn test_with_config() {
        let config = ConfigLoader::new()
            .set_override("limits.max_nesting_depth", 1i64)
            .unwrap()
            .build()
            .unwrap();
        let loader = DocumentLoader::from_string("a { b { c } }").with_config(&config);
        let err = loader.parse().unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::NestingTooDeep { limit: 1, .. })
        ));
        assert_eq!(err.offset(), Some(6));
    }

    #[test]
    fn test_with_config_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[extensions]\nc_style_comments = \"\"").unwrap();

        let loader = DocumentLoader::from_string("a /* b */ c")
            .with_config_file(file.path())
            .unwrap();
        assert!(loader.extensions().has(Extension::CStyleComments));
        assert_eq!(loader.parse().unwrap(), vec![Directive::new(["a", "c"])]);

        let dir = tempfile::tempdir().unwrap();
        let missing =
            DocumentLoader::from_string("a").with_config_file(dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(Error::Config(_))));
    }

    #[test]
    fn test_with_extension_identifiers() {
        let loader = DocumentLoader::from_string("x=1")
            .with_extension_identifiers([("punctuator_arguments", "=")])
            .unwrap();
        assert_eq!(loader.parse().unwrap(), vec![Directive::new(["x", "=", "1"])]);

        let unknown = DocumentLoader::from_string("a").with_extension_identifiers([("tabs", "")]);
        assert!(matches!(
            unknown,
            Err(Error::Extension(ExtensionError::Unknown(id))) if id == "tabs"
        ));
    }

    #[test]
    fn test_render() {
        let loader = DocumentLoader::from_string("a");
        assert_eq!(loader.render("canonical").unwrap(), "<a>\n");
        assert!(loader.render("json").unwrap().contains("\"arguments\""));
        assert!(matches!(
            loader.render("xml"),
            Err(Error::Format(FormatError::FormatNotFound(_)))
        ));
    }
}

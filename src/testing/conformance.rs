//! Conformance fixture discovery and rendering
//!
//!     - `discover(dir)` groups the files of a fixture directory into [`ConformanceCase`]s
//!     - `discover_default()` does the same for the crate's own `tests/conformance/`
//!     - `render_outcome(result)` turns a load result into the text a fixture expects
//!
//!     Inputs are kept as bytes. Some fixtures hold malformed UTF-8 or encoded surrogates on
//!     purpose, and those must reach the lexer unchanged.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::extensions::{Extension, ExtensionError, Extensions};
use crate::formats::to_canonical;
use crate::parsing::Directive;

const FIXTURES_DIR: &str = "tests/conformance";

/// The crate's own fixture directory.
pub static FIXTURE_ROOT: Lazy<PathBuf> =
    Lazy::new(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(FIXTURES_DIR));

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown file type {0}")]
    UnknownFileType(String),
    #[error(transparent)]
    Extension(#[from] ExtensionError),
    #[error("fixture {0} is not valid UTF-8")]
    NotUtf8(String),
    #[error("test case {0} is missing input")]
    MissingInput(String),
    #[error("test case {0} is missing output")]
    MissingOutput(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConformanceCase {
    pub name: String,
    pub input: Vec<u8>,
    pub expected: String,
    /// Whether the expectation came from a `.fail` file.
    pub expects_error: bool,
    pub extensions: Extensions,
}

impl ConformanceCase {
    /// What this implementation produces for the case.
    pub fn actual(&self) -> String {
        render_outcome(crate::load_bytes(&self.input, &self.extensions))
    }

    pub fn passes(&self) -> bool {
        self.actual() == self.expected
    }
}

/// Canonical output on success, `error: <message>` on failure; both end in a newline.
pub fn render_outcome(result: Result<Vec<Directive>, Error>) -> String {
    match result {
        Ok(directives) => to_canonical(&directives),
        Err(err) => format!("error: {err}\n"),
    }
}

#[derive(Default)]
struct PartialCase {
    input: Option<Vec<u8>>,
    expected: Option<(String, bool)>,
    extensions: Extensions,
}

/// Reads every fixture group in `dir`, sorted by name.
pub fn discover(dir: &Path) -> Result<Vec<ConformanceCase>, FixtureError> {
    let mut partials: BTreeMap<String, PartialCase> = BTreeMap::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let Some((name, kind)) = file_name.split_once('.') else {
            return Err(FixtureError::UnknownFileType(file_name));
        };

        let data = normalize_newlines(&fs::read(&path)?);
        let partial = partials.entry(name.to_string()).or_default();
        match kind {
            "conf" => partial.input = Some(data),
            "pass" | "fail" => {
                let text = into_text(data, &file_name)?;
                partial.expected = Some((text, kind == "fail"));
            }
            _ => {
                let identifier = kind
                    .strip_prefix("ext_")
                    .ok_or_else(|| FixtureError::UnknownFileType(kind.to_string()))?;
                let extension: Extension = identifier.parse()?;
                partial
                    .extensions
                    .insert(extension, into_text(data, &file_name)?);
            }
        }
    }

    partials
        .into_iter()
        .map(|(name, partial)| {
            let input = partial
                .input
                .ok_or_else(|| FixtureError::MissingInput(name.clone()))?;
            let (expected, expects_error) = partial
                .expected
                .ok_or_else(|| FixtureError::MissingOutput(name.clone()))?;
            Ok(ConformanceCase {
                name,
                input,
                expected,
                expects_error,
                extensions: partial.extensions,
            })
        })
        .collect()
}

pub fn discover_default() -> Result<Vec<ConformanceCase>, FixtureError> {
    discover(&FIXTURE_ROOT)
}

fn normalize_newlines(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut i = 0;
    while i < data.len() {
        if data[i] == b'\r' && data.get(i + 1) == Some(&b'\n') {
            i += 1;
            continue;
        }
        out.push(data[i]);
        i += 1;
    }
    out
}

fn into_text(data: Vec<u8>, file_name: &str) -> Result<String, FixtureError> {
    String::from_utf8(data).map_err(|_| FixtureError::NotUtf8(file_name.to_string()))
}

//! Output formats for token streams and directive trees
//!
//!     - detokenizer: token streams back to the exact source text
//!     - canonical: the bracketed debug rendering used by the conformance fixtures
//!     - json: pretty JSON dumps of tokens and directives
//!
//!     Directive formats implement [`Formatter`] and are reachable by name through the
//!     [`FormatRegistry`]. The detokenizer works on tokens rather than directives and sits
//!     outside the registry.

pub mod canonical;
pub mod detokenizer;
pub mod json;
pub mod registry;

pub use canonical::{to_canonical, CanonicalFormatter};
pub use detokenizer::{detokenize, ToSourceString};
pub use json::{directives_to_json, tokens_to_json, JsonFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};

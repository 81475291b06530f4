//! Testing utilities
//!
//!     Confetti comes with a language-neutral conformance suite: small input documents paired
//!     with the exact output a conforming reader must produce. Tests should prefer adding a
//!     fixture over inventing ad-hoc strings, since the fixtures are shared with every other
//!     implementation of the language and are what a change in the grammar gets checked
//!     against.
//!
//! Fixture Layout
//!
//!     Fixtures live in `tests/conformance/`. A case is the group of files sharing a base name:
//!
//!         <name>.conf         the input document
//!         <name>.pass         expected canonical output
//!         <name>.fail         expected error output, `error: <message>` plus newline
//!         <name>.ext_<id>     enables extension <id>, the file content is its value
//!
//!     CRLF is normalized to LF in every file before use, so fixtures survive checkouts that
//!     rewrite line endings.
//!
//!     See [conformance] for discovery and rendering.

pub mod conformance;

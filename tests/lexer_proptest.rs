//! Property-based tests for the lexer and parser
//!
//! Inputs are stitched together from fragments that exercise every lexer branch, so a good
//! share of them fail to lex. Properties about token streams only apply to inputs that lex
//! cleanly; the rest must still fail without panicking.

use confetti::formats::detokenize;
use confetti::{lex, load, Directive, Extension, Extensions, Token};
use proptest::prelude::*;

const FRAGMENTS: &[&str] = &[
    "a", "key", "42", "é", "中", " ", "\t", "\u{3000}", "\n", "\r", "\r\n", "\u{2028}", "\u{85}",
    "\"", "\"\"\"", "\\", ";", "{", "}", "#", "//", "/*", "*/", "(", ")", "=", ":=", "\u{FEFF}",
    "\u{1A}", "\u{7}",
];

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..48)
        .prop_map(|fragments| fragments.concat())
}

/// Inputs built only from fragments that always lex, with balanced braces.
fn well_formed_strategy() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec!["a", "key", "42", "\"q u\"", "x\\;y"]);
    let directive = prop::collection::vec(word, 1..4).prop_map(|words| words.join(" "));
    let leaf = prop::collection::vec(directive, 0..4).prop_map(|lines| lines.join("\n"));
    leaf.prop_recursive(4, 32, 3, |inner| {
        (inner.clone(), "[a-z]{1,3}", inner)
            .prop_map(|(before, name, body)| format!("{before}\n{name} {{\n{body}\n}}\n"))
    })
}

fn all_extensions() -> Extensions {
    Extensions::new()
        .with(Extension::CStyleComments, "")
        .with(Extension::ExpressionArguments, "")
        .with(Extension::PunctuatorArguments, "=\n:=")
}

fn assert_contiguous(tokens: &[Token], source: &str) {
    let mut expected_start = 0;
    for token in tokens {
        assert_eq!(token.span.start, expected_start, "gap before {token}");
        expected_start = token.span.end;
    }
    assert_eq!(expected_start, source.chars().count());
}

fn assert_no_empty_directives(directives: &[Directive]) {
    for directive in directives {
        assert!(!directive.arguments.is_empty());
        assert_no_empty_directives(directive.children());
    }
}

proptest! {
    #[test]
    fn test_round_trip(input in document_strategy()) {
        for extensions in [Extensions::new(), all_extensions()] {
            if let Ok(tokens) = lex(&input, &extensions) {
                prop_assert_eq!(detokenize(&tokens), input.clone());
                assert_contiguous(&tokens, &input);
            }
        }
    }

    #[test]
    fn test_lexing_is_deterministic(input in document_strategy()) {
        let extensions = all_extensions();
        prop_assert_eq!(lex(&input, &extensions), lex(&input, &extensions));
    }

    #[test]
    fn test_directives_never_empty(input in document_strategy()) {
        for extensions in [Extensions::new(), all_extensions()] {
            if let Ok(directives) = load(&input, &extensions) {
                assert_no_empty_directives(&directives);
            }
        }
    }

    #[test]
    fn test_well_formed_documents_load(input in well_formed_strategy()) {
        let directives = load(&input, &Extensions::new());
        prop_assert!(directives.is_ok(), "{:?} failed: {:?}", input, directives);
        let tokens = lex(&input, &Extensions::new()).unwrap();
        prop_assert_eq!(detokenize(&tokens), input);
    }
}

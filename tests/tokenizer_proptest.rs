//! Property-based tests for the tokenizers
//!
//! These pin the contract-level invariants for arbitrary input: every call
//! terminates without panicking, covers the input exactly, emits no empty
//! token, and is idempotent. The generators mix realistic snippet shapes
//! with free-form text so the catch-all paths get exercised too.

use proptest::prelude::*;
use tint::highlight::{tokenize, SUPPORTED_LANGUAGES};

/// Generate code-shaped lines: identifiers, strings, comments, punctuation.
fn code_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Assignments and calls
        "[a-z_]{1,8} = [a-z_]{1,8}\\([0-9]{1,3}\\)",
        // Definition-like lines
        "def [a-z_]{1,8}\\(\\):",
        "class [A-Z][a-z]{1,8}:",
        // Shell-like lines
        "echo \\$[A-Z]{1,6}",
        "grep -[a-z]{1,2} [a-z./]{1,10}",
        // YAML-like lines
        "[a-z-]{1,10}: [a-z0-9]{1,8}",
        "- [a-z]{1,8}",
        // Comments and strings
        "# [ a-z]{0,20}",
        "\"[ a-z]{0,12}\"",
        "'[ a-z]{0,12}'",
        // Stray punctuation and quotes
        "[-+*/=<>|&;(){}\\[\\]\"'@$~]{1,6}",
    ]
}

/// Multi-line documents assembled from code-shaped lines.
fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(code_line_strategy(), 0..12).prop_map(|lines| lines.join("\n"))
}

/// A language tag that is always supported.
fn language_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(SUPPORTED_LANGUAGES.to_vec())
}

proptest! {
    #[test]
    fn test_tokenize_never_panics_on_arbitrary_input(
        language in language_strategy(),
        input in ".{0,200}",
    ) {
        let _ = tokenize(language, &input);
    }

    #[test]
    fn test_coverage_holds_for_arbitrary_input(
        language in language_strategy(),
        input in ".{0,200}",
    ) {
        let tokens = tokenize(language, &input).expect("supported language");
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_coverage_holds_for_code_shaped_documents(
        language in language_strategy(),
        input in document_strategy(),
    ) {
        let tokens = tokenize(language, &input).expect("supported language");
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_no_token_is_empty(
        language in language_strategy(),
        input in document_strategy(),
    ) {
        let tokens = tokenize(language, &input).expect("supported language");
        for token in &tokens {
            prop_assert!(!token.text.is_empty());
        }
    }

    #[test]
    fn test_tokenizing_twice_is_identical(
        language in language_strategy(),
        input in document_strategy(),
    ) {
        let first = tokenize(language, &input);
        // An interleaved call on different input must not disturb the next one
        let _ = tokenize(language, "unrelated()");
        let second = tokenize(language, &input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_unsupported_language_is_always_none(input in ".{0,80}") {
        prop_assert_eq!(tokenize("cobol", &input), None);
    }
}

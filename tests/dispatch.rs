//! Dispatcher boundary tests
//!
//! The dispatcher either routes to a tokenizer or reports "no coverage";
//! it must never panic, and unsupported is a normal outcome.

use rstest::rstest;
use tint::highlight::testing::assert_coverage;
use tint::highlight::{is_supported, tokenize, SUPPORTED_LANGUAGES};

#[rstest(language => ["python", "yaml", "bash", "shell"])]
fn test_supported_language_produces_tokens(language: &str) {
    let code = "value: 1";
    let tokens = tokenize(language, code).expect("language is supported");
    assert_coverage(code, &tokens);
}

#[rstest(language => ["python", "yaml", "bash", "shell"])]
fn test_empty_input_yields_empty_sequence(language: &str) {
    assert_eq!(tokenize(language, ""), Some(vec![]));
}

#[rstest(language => ["cobol", "rust", "Python", "SHELL", "", "py"])]
fn test_unsupported_language_is_none(language: &str) {
    assert_eq!(tokenize(language, "print('hi')"), None);
    assert!(!is_supported(language));
}

#[test]
fn test_supported_list_matches_dispatch() {
    for language in SUPPORTED_LANGUAGES {
        assert!(tokenize(language, "x").is_some());
    }
}

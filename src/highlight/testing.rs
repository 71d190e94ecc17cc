//! Testing utilities for token-sequence assertions
//!
//! Tokenizer tests assert on two things: the classification of the
//! interesting tokens, and the coverage invariant. These helpers keep both
//! assertions short and uniform across the unit and integration tests.

use crate::highlight::token::{Token, TokenKind};

/// Concatenate the token texts in order.
pub fn concat(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// The kind of every token, in order.
pub fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

/// `(kind, text)` pairs for compact full-sequence assertions.
pub fn pairs(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
}

/// The kinds of the non-whitespace tokens only, for tests that don't care
/// about exact whitespace splits.
pub fn visible_kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens
        .iter()
        .filter(|t| !t.is_whitespace())
        .map(|t| t.kind)
        .collect()
}

/// Assert the coverage and non-degeneracy invariants: concatenated token
/// texts reproduce `source` exactly, and no token is empty.
pub fn assert_coverage(source: &str, tokens: &[Token]) {
    assert_eq!(
        concat(tokens),
        source,
        "token texts must concatenate back to the source"
    );
    for (i, token) in tokens.iter().enumerate() {
        assert!(!token.text.is_empty(), "token {} has empty text", i);
    }
}

/// Find the first token with the given text, panicking when absent.
pub fn token_with_text<'a>(tokens: &'a [Token], text: &str) -> &'a Token {
    tokens
        .iter()
        .find(|t| t.text == text)
        .unwrap_or_else(|| panic!("no token with text {:?} in {:?}", text, tokens))
}

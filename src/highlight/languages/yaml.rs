//! YAML tokenizer
//!
//! Rule order: comment, double-quoted scalar, single-quoted scalar,
//! key-terminating colon, list-indicator dash, anchor/alias marker,
//! number, word, null tilde, punctuation run, whitespace. Anchors (`&id`)
//! and aliases (`*id`) are substitution markers, so they share the
//! `Decorator` kind with Python's `@name` and Bash's `$NAME`. YAML has no
//! reserved words; a word is either one of the boolean/null scalar
//! spellings or plain text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::highlight::scanner::{self, Rule};
use crate::highlight::token::{Token, TokenKind};

/// Boolean and null scalar spellings (lower, Title and UPPER case).
static CONSTANTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "true", "false", "null", "yes", "no", "on", "off", "True", "False", "Null", "Yes", "No",
        "On", "Off", "TRUE", "FALSE", "NULL", "YES", "NO", "ON", "OFF",
    ]
    .into_iter()
    .collect()
});

static ANCHOR_ALIAS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[&*]\w+").unwrap());
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+)?").unwrap());
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][\w-]*").unwrap());
// Quotes are excluded so a flow-collection bracket never swallows the
// opening quote of the scalar that follows it.
static PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^[^\w\s"']+"#).unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+").unwrap());

const RULES: &[Rule] = &[
    comment,
    double_string,
    single_string,
    colon,
    dash,
    anchor_alias,
    number,
    word,
    tilde,
    punct,
    whitespace,
];

/// Tokenize YAML source.
pub fn tokenize(source: &str) -> Vec<Token> {
    scanner::scan(source, RULES)
}

fn comment(rest: &str) -> Option<(TokenKind, usize)> {
    scanner::line_comment(rest, '#').map(|len| (TokenKind::Comment, len))
}

fn double_string(rest: &str) -> Option<(TokenKind, usize)> {
    scanner::quoted(rest, '"').map(|len| (TokenKind::Str, len))
}

fn single_string(rest: &str) -> Option<(TokenKind, usize)> {
    scanner::quoted(rest, '\'').map(|len| (TokenKind::Str, len))
}

/// The colon terminating a mapping key.
fn colon(rest: &str) -> Option<(TokenKind, usize)> {
    rest.starts_with(':').then_some((TokenKind::Punct, 1))
}

/// The dash introducing a sequence item.
fn dash(rest: &str) -> Option<(TokenKind, usize)> {
    rest.starts_with('-').then_some((TokenKind::Punct, 1))
}

fn anchor_alias(rest: &str) -> Option<(TokenKind, usize)> {
    ANCHOR_ALIAS
        .find(rest)
        .map(|m| (TokenKind::Decorator, m.end()))
}

fn number(rest: &str) -> Option<(TokenKind, usize)> {
    NUMBER.find(rest).map(|m| (TokenKind::Number, m.end()))
}

fn word(rest: &str) -> Option<(TokenKind, usize)> {
    WORD.find(rest)
        .map(|m| (classify_word(m.as_str()), m.end()))
}

/// The `~` null scalar.
fn tilde(rest: &str) -> Option<(TokenKind, usize)> {
    rest.starts_with('~').then_some((TokenKind::BuiltinConst, 1))
}

fn punct(rest: &str) -> Option<(TokenKind, usize)> {
    PUNCT.find(rest).map(|m| (TokenKind::Punct, m.end()))
}

fn whitespace(rest: &str) -> Option<(TokenKind, usize)> {
    WHITESPACE.find(rest).map(|m| (TokenKind::Plain, m.end()))
}

fn classify_word(text: &str) -> TokenKind {
    if CONSTANTS.contains(text) {
        TokenKind::BuiltinConst
    } else {
        TokenKind::Plain
    }
}

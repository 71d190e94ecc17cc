//! Python tokenizer
//!
//! Rule order (highest priority first): comment, triple-quoted string,
//! single-line string, decorator, number, word, punctuation run,
//! whitespace run. Strings sit above the word rule so that keywords inside
//! string bodies are never reclassified; the triple-quoted rule sits above
//! the single-line rule so that `"""` opens a docstring instead of reading
//! as an empty string plus a stray quote.
//!
//! After the scan a second linear pass retags the identifier following a
//! `def` or `class` keyword to a name token. Only tokens still classified
//! `Plain` are eligible: a builtin or constant in name position (e.g.
//! `def True():`) keeps its classification. That asymmetry is longstanding
//! behavior and is kept as-is.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::highlight::scanner::{self, Rule};
use crate::highlight::token::{Token, TokenKind};

/// Reserved words. `True`/`False`/`None` are deliberately absent: they
/// resolve in the literal-constant tier instead, which the retagging pass
/// relies on.
static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del",
        "elif", "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is",
        "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with",
        "yield",
    ]
    .into_iter()
    .collect()
});

static BUILTINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "abs", "all", "any", "bin", "bool", "bytearray", "bytes", "callable", "chr",
        "classmethod", "dict", "dir", "divmod", "enumerate", "filter", "float", "format",
        "frozenset", "getattr", "hasattr", "hash", "hex", "id", "input", "int", "isinstance",
        "issubclass", "iter", "len", "list", "map", "max", "min", "next", "object", "oct", "open",
        "ord", "pow", "print", "property", "range", "repr", "reversed", "round", "set", "setattr",
        "slice", "sorted", "staticmethod", "str", "sum", "super", "tuple", "type", "vars", "zip",
        "Exception", "ValueError", "TypeError", "KeyError", "IndexError", "AttributeError",
        "RuntimeError", "StopIteration", "NotImplementedError",
    ]
    .into_iter()
    .collect()
});

static DECORATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@\w+").unwrap());
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+)?").unwrap());
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+").unwrap());
// Quote characters stay out of the punctuation run so an opening quote
// right after `(` or `=` is still seen by the string rule; a quote that
// opens no string is consumed by the driver's residual catch-all.
static PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^[^\w\s"']+"#).unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+").unwrap());

const RULES: &[Rule] = &[
    comment, triple_string, string, decorator, number, word, punct, whitespace,
];

/// Tokenize Python source.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = scanner::scan(source, RULES);
    retag_definition_names(&mut tokens);
    tokens
}

fn comment(rest: &str) -> Option<(TokenKind, usize)> {
    scanner::line_comment(rest, '#').map(|len| (TokenKind::Comment, len))
}

fn triple_string(rest: &str) -> Option<(TokenKind, usize)> {
    scanner::triple_quoted(rest).map(|len| (TokenKind::Str, len))
}

fn string(rest: &str) -> Option<(TokenKind, usize)> {
    scanner::quoted(rest, '"')
        .or_else(|| scanner::quoted(rest, '\''))
        .map(|len| (TokenKind::Str, len))
}

fn decorator(rest: &str) -> Option<(TokenKind, usize)> {
    DECORATOR.find(rest).map(|m| (TokenKind::Decorator, m.end()))
}

fn number(rest: &str) -> Option<(TokenKind, usize)> {
    NUMBER.find(rest).map(|m| (TokenKind::Number, m.end()))
}

fn word(rest: &str) -> Option<(TokenKind, usize)> {
    WORD.find(rest)
        .map(|m| (classify_word(m.as_str()), m.end()))
}

fn punct(rest: &str) -> Option<(TokenKind, usize)> {
    PUNCT.find(rest).map(|m| (TokenKind::Punct, m.end()))
}

fn whitespace(rest: &str) -> Option<(TokenKind, usize)> {
    WHITESPACE.find(rest).map(|m| (TokenKind::Plain, m.end()))
}

/// Classify a word, first matching tier wins.
fn classify_word(text: &str) -> TokenKind {
    if KEYWORDS.contains(text) {
        TokenKind::Keyword
    } else if text == "self" || text == "cls" {
        TokenKind::SelfName
    } else if matches!(text, "True" | "False" | "None") {
        TokenKind::BuiltinConst
    } else if BUILTINS.contains(text) {
        TokenKind::Builtin
    } else {
        TokenKind::Plain
    }
}

/// Retag the first non-whitespace token after a `def`/`class` keyword to
/// `FuncName`/`ClassName`, but only when it is still `Plain`. The forward
/// walk stops at the first non-whitespace token whether or not it retags.
fn retag_definition_names(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        if tokens[i].kind != TokenKind::Keyword {
            continue;
        }
        let name_kind = match tokens[i].text.as_str() {
            "def" => TokenKind::FuncName,
            "class" => TokenKind::ClassName,
            _ => continue,
        };
        for j in i + 1..tokens.len() {
            if tokens[j].is_whitespace() {
                continue;
            }
            if tokens[j].kind == TokenKind::Plain {
                tokens[j].kind = name_kind;
            }
            break;
        }
    }
}

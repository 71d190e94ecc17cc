//! Bash/Shell tokenizer
//!
//! Rule order: comment, double-quoted string, single-quoted string,
//! variable expansion, number, word, metacharacter run, residual
//! punctuation, lone quote, whitespace. The word character class includes
//! `.`, `+` and `-` so that hyphenated flags (`--force`) and dotted paths
//! (`./run.sh`) tokenize as single words. A quote that never closes its
//! string falls past the string rules down to the lone-quote rule; the
//! residual rule above it deliberately excludes quotes so it cannot
//! swallow them first.
//!
//! Word classification has only two tiers (keywords, then builtins and
//! common commands); the shell has no `self` or literal-constant names.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::highlight::scanner::{self, Rule};
use crate::highlight::token::{Token, TokenKind};

/// Shell reserved words.
static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "case", "do", "done", "elif", "else", "esac", "fi", "for", "function", "if", "in",
        "select", "then", "time", "until", "while",
    ]
    .into_iter()
    .collect()
});

/// Shell builtins plus the everyday commands a documentation snippet is
/// likely to show.
static BUILTINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "alias", "awk", "cargo", "cat", "cd", "chmod", "chown", "cp", "curl", "cut", "declare",
        "docker", "echo", "env", "eval", "exec", "exit", "export", "find", "git", "grep", "head",
        "kill", "local", "ls", "make", "mkdir", "mv", "node", "npm", "pip", "printf", "ps",
        "pwd", "python", "python3", "read", "return", "rm", "sed", "set", "shift", "sort",
        "source", "ssh", "sudo", "tail", "tar", "test", "touch", "tr", "trap", "uniq", "unset",
        "wc", "wget", "which", "xargs",
    ]
    .into_iter()
    .collect()
});

static VARIABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\$\w+|\$\{[^}]*\})").unwrap());
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+)?").unwrap());
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.+-]+").unwrap());
static METACHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[|&;<>(){}\[\]]+").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+").unwrap());

const RULES: &[Rule] = &[
    comment,
    double_string,
    single_string,
    variable,
    number,
    word,
    metachars,
    residual,
    lone_quote,
    whitespace,
];

/// Tokenize Bash/Shell source.
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

/// `$NAME` or `${...}` expansion, tagged as a substitution marker.
fn variable(rest: &str) -> Option<(TokenKind, usize)> {
    VARIABLE.find(rest).map(|m| (TokenKind::Decorator, m.end()))
}

fn number(rest: &str) -> Option<(TokenKind, usize)> {
    NUMBER.find(rest).map(|m| (TokenKind::Number, m.end()))
}

fn word(rest: &str) -> Option<(TokenKind, usize)> {
    WORD.find(rest)
        .map(|m| (classify_word(m.as_str()), m.end()))
}

fn metachars(rest: &str) -> Option<(TokenKind, usize)> {
    METACHARS.find(rest).map(|m| (TokenKind::Punct, m.end()))
}

/// Any other single non-word, non-space character except a quote, which
/// must stay visible to the lone-quote rule below.
fn residual(rest: &str) -> Option<(TokenKind, usize)> {
    let c = rest.chars().next()?;
    if c.is_whitespace() || is_word_char(c) || c == '"' || c == '\'' {
        return None;
    }
    Some((TokenKind::Punct, c.len_utf8()))
}

/// An unterminated quote character that did not open a string.
fn lone_quote(rest: &str) -> Option<(TokenKind, usize)> {
    match rest.chars().next() {
        Some(c @ ('"' | '\'')) => Some((TokenKind::Punct, c.len_utf8())),
        _ => None,
    }
}

fn whitespace(rest: &str) -> Option<(TokenKind, usize)> {
    WHITESPACE.find(rest).map(|m| (TokenKind::Plain, m.end()))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '+' | '-')
}

fn classify_word(text: &str) -> TokenKind {
    if KEYWORDS.contains(text) {
        TokenKind::Keyword
    } else if BUILTINS.contains(text) {
        TokenKind::Builtin
    } else {
        TokenKind::Plain
    }
}

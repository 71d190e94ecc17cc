//! Priority-ordered scan driver shared by all tokenizers
//!
//! A tokenizer is a single left-to-right scan over the input using a fixed,
//! ordered slice of [rules](Rule). At each position the rules are tried in
//! slice order and the first one that matches wins; the matched substring
//! becomes one token and the scan advances past it. Rule order therefore
//! encodes classification priority: comments and strings must sit above the
//! word rule so that a `def` inside a string never becomes a keyword.
//!
//! The driver itself carries the progress guarantee: when no rule matches,
//! exactly one character is consumed as punctuation, so the scan can never
//! stall and the coverage invariant (concatenated token texts == input)
//! holds for arbitrary input.
//!
//! The scan cursor is a local constructed inside [scan] on every call.
//! Nothing is retained between invocations, which keeps tokenizers safe to
//! call repeatedly and from multiple threads.

use crate::highlight::token::{Token, TokenKind};

/// One lexical alternative: inspect the remaining input (which always
/// starts at the current scan position) and either claim a prefix of
/// `len > 0` bytes with a kind, or decline.
///
/// A returned length must lie on a UTF-8 boundary of the input; matchers
/// built from `char_indices` or anchored regexes satisfy this by
/// construction.
pub type Rule = fn(&str) -> Option<(TokenKind, usize)>;

/// Run the ordered rule set over `source` and collect the token sequence.
pub fn scan(source: &str, rules: &[Rule]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < source.len() {
        let rest = &source[pos..];
        let (kind, len) = match_at(rest, rules);
        tokens.push(Token::new(kind, &rest[..len]));
        pos += len;
    }

    tokens
}

/// Try each rule in order; fall back to consuming one character as `Punct`.
fn match_at(rest: &str, rules: &[Rule]) -> (TokenKind, usize) {
    for rule in rules {
        if let Some((kind, len)) = rule(rest) {
            debug_assert!(len > 0, "rules must consume at least one byte");
            debug_assert!(rest.is_char_boundary(len));
            return (kind, len);
        }
    }
    // Residual catch-all: one character, so the scan always advances
    let len = rest.chars().next().map(char::len_utf8).unwrap_or(1);
    (TokenKind::Punct, len)
}

/// Match a line comment starting with `marker`, up to but excluding the
/// next newline.
pub(crate) fn line_comment(rest: &str, marker: char) -> Option<usize> {
    if !rest.starts_with(marker) {
        return None;
    }
    Some(rest.find('\n').unwrap_or(rest.len()))
}

/// Match a single-line quoted string delimited by `quote`, allowing
/// backslash-escaped characters in the body. Declines when the string is
/// not terminated before a newline or the end of input, leaving the stray
/// quote to a lower-priority rule.
pub(crate) fn quoted(rest: &str, quote: char) -> Option<usize> {
    let mut chars = rest.char_indices();
    match chars.next() {
        Some((_, c)) if c == quote => {}
        _ => return None,
    }

    let mut escaped = false;
    for (idx, c) in chars {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '\n' => return None,
            c if c == quote => return Some(idx + c.len_utf8()),
            _ => {}
        }
    }
    None
}

/// Match a Python triple-quoted string (`"""` or `'''`). The body may span
/// newlines and is taken non-greedily up to the next occurrence of the same
/// delimiter. Declines when unterminated, so the opening quotes fall
/// through to the single-line string rule.
pub(crate) fn triple_quoted(rest: &str) -> Option<usize> {
    let delim = if rest.starts_with("\"\"\"") {
        "\"\"\""
    } else if rest.starts_with("'''") {
        "'''"
    } else {
        return None;
    };
    let body = &rest[delim.len()..];
    body.find(delim)
        .map(|end| delim.len() + end + delim.len())
}

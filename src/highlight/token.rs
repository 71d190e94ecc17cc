//! Token definitions shared by every tokenizer
//!
//! A token is a classified, non-empty contiguous substring of the source
//! text. The kind vocabulary is closed and shared across languages; a
//! language simply never emits the kinds that do not apply to it (Bash has
//! no `SelfName`, YAML has no `Keyword`).

use serde::{Deserialize, Serialize};

/// Semantic category of a token, used to drive presentation styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Comment,
    #[serde(rename = "string")]
    Str,
    Number,
    Keyword,
    /// Standard-library / builtin identifier
    Builtin,
    /// Literal constant such as a boolean or null
    BuiltinConst,
    /// Lexical marker introducing metadata or substitution
    /// (Python `@name`, Bash `$NAME`/`${...}`, YAML `&name`/`*name`)
    Decorator,
    /// Run of operator/punctuation characters
    Punct,
    /// Identifier with no special classification, or whitespace
    Plain,
    /// The first-parameter convention names `self`/`cls` (Python)
    #[serde(rename = "self")]
    SelfName,
    /// Identifier immediately following `def` (Python)
    FuncName,
    /// Identifier immediately following `class` (Python)
    ClassName,
}

/// Every kind a tokenizer can emit, in presentation-listing order
pub const TOKEN_KINDS: &[TokenKind] = &[
    TokenKind::Comment,
    TokenKind::Str,
    TokenKind::Number,
    TokenKind::Keyword,
    TokenKind::Builtin,
    TokenKind::BuiltinConst,
    TokenKind::Decorator,
    TokenKind::Punct,
    TokenKind::Plain,
    TokenKind::SelfName,
    TokenKind::FuncName,
    TokenKind::ClassName,
];

impl TokenKind {
    /// The stable tag name for this kind (kebab-case, matches serde output)
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::Str => "string",
            TokenKind::Number => "number",
            TokenKind::Keyword => "keyword",
            TokenKind::Builtin => "builtin",
            TokenKind::BuiltinConst => "builtin-const",
            TokenKind::Decorator => "decorator",
            TokenKind::Punct => "punct",
            TokenKind::Plain => "plain",
            TokenKind::SelfName => "self",
            TokenKind::FuncName => "func-name",
            TokenKind::ClassName => "class-name",
        }
    }

    /// Look up a kind by its tag name (inverse of [as_str](Self::as_str))
    pub fn from_tag(tag: &str) -> Option<TokenKind> {
        TOKEN_KINDS.iter().copied().find(|k| k.as_str() == tag)
    }

    /// The style hook used by HTML renderers, of the form `sh-<kind>`
    pub fn css_class(self) -> String {
        format!("sh-{}", self.as_str())
    }

    /// Plain tokens render as unwrapped text runs
    pub fn is_plain(self) -> bool {
        matches!(self, TokenKind::Plain)
    }
}

/// A classified substring of the source text
///
/// The full ordered sequence produced by a tokenizer covers the input
/// exactly: concatenating `text` across the sequence reproduces the source
/// with no gaps, overlaps or reordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    /// Whether the token text is nothing but whitespace
    pub fn is_whitespace(&self) -> bool {
        self.text.trim().is_empty()
    }
}

//! JSON token dump
//!
//! Serializes the token sequence for tooling and tests. Unsupported
//! languages still produce a well-formed envelope, with `supported: false`
//! and the raw code in place of tokens.

use serde::Serialize;

use tint::highlight::{tokenize, Token};

use crate::error::RenderError;
use crate::renderer::Renderer;
use crate::theme::Theme;

#[derive(Serialize)]
struct Envelope<'a> {
    language: &'a str,
    supported: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<Vec<Token>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
}

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON dump of the token sequence"
    }

    fn render(&self, code: &str, language: &str, _theme: &Theme) -> Result<String, RenderError> {
        let envelope = match tokenize(language, code) {
            Some(tokens) => Envelope {
                language,
                supported: true,
                tokens: Some(tokens),
                code: None,
            },
            None => Envelope {
                language,
                supported: false,
                tokens: None,
                code: Some(code),
            },
        };
        serde_json::to_string_pretty(&envelope)
            .map_err(|e| RenderError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_language_dumps_kind_tags() {
        let out = JsonRenderer
            .render("echo hi", "bash", &Theme::default())
            .expect("renders");
        assert!(out.contains("\"supported\": true"));
        assert!(out.contains("\"kind\": \"builtin\""));
        assert!(out.contains("\"text\": \"echo\""));
    }

    #[test]
    fn test_unsupported_language_keeps_raw_code() {
        let out = JsonRenderer
            .render("DISPLAY 'HI'.", "cobol", &Theme::default())
            .expect("renders");
        assert!(out.contains("\"supported\": false"));
        assert!(out.contains("DISPLAY 'HI'."));
        assert!(!out.contains("\"tokens\""));
    }
}

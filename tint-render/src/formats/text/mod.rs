//! Plain-text rendering
//!
//! Concatenates the token texts back into the source. By the coverage
//! invariant the output always equals the input, supported language or
//! not. Useful as a smoke check in pipelines and tests.

use tint::highlight::tokenize;

use crate::error::RenderError;
use crate::renderer::Renderer;
use crate::theme::Theme;

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "unstyled text (token texts concatenated)"
    }

    fn render(&self, code: &str, language: &str, _theme: &Theme) -> Result<String, RenderError> {
        match tokenize(language, code) {
            Some(tokens) => Ok(tokens.iter().map(|t| t.text.as_str()).collect()),
            None => Ok(code.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_equals_input_for_any_language() {
        let code = "def f():\n    return {\"k\": [1, 2]}\n";
        for language in ["python", "yaml", "bash", "shell", "cobol"] {
            let out = TextRenderer
                .render(code, language, &Theme::default())
                .expect("renders");
            assert_eq!(out, code, "language {}", language);
        }
    }
}

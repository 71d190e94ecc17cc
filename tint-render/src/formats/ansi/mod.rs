//! ANSI terminal rendering
//!
//! Colors each non-`Plain` token with its theme color using crossterm's
//! styling types; `Plain` tokens pass through unstyled. The output is a
//! plain `String` carrying escape sequences; nothing here touches the
//! terminal, so the renderer stays usable from any host.

use crossterm::style::{Color as TermColor, Stylize};

use tint::highlight::tokenize;

use crate::error::RenderError;
use crate::renderer::Renderer;
use crate::theme::{Color, Theme};

pub struct AnsiRenderer;

impl Renderer for AnsiRenderer {
    fn name(&self) -> &str {
        "ansi"
    }

    fn description(&self) -> &str {
        "ANSI-colored text for terminals"
    }

    fn render(&self, code: &str, language: &str, theme: &Theme) -> Result<String, RenderError> {
        let tokens = match tokenize(language, code) {
            Some(tokens) => tokens,
            // No coverage: verbatim, unstyled
            None => return Ok(code.to_string()),
        };

        let mut out = String::with_capacity(code.len());
        for token in &tokens {
            if token.kind.is_plain() {
                out.push_str(&token.text);
            } else {
                let styled = token.text.as_str().with(term_color(theme.color(token.kind)));
                out.push_str(&styled.to_string());
            }
        }
        Ok(out)
    }
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

//! HTML rendering (token sequence → styled markup)
//!
//! Two registered variants share one implementation:
//!
//! - `html`: the bare fragment, which a site template splices into its own
//!   `<pre><code>` block.
//! - `html-doc`: the fragment wrapped in `<pre class="sh"><code>` with a
//!   `<style>` block generated from the theme, for standalone previews.
//!
//! `Plain` tokens are emitted as unwrapped escaped text so copy/paste from
//! the rendered block stays byte-faithful and the markup stays small;
//! every other kind becomes `<span class="sh-<kind>">…</span>`. On an
//! unrecognized language the escaped code passes through with no spans at
//! all.

use tint::highlight::{tokenize, Token, TokenKind};

use crate::error::RenderError;
use crate::renderer::Renderer;
use crate::theme::Theme;

/// HTML renderer; `embed_styles` selects the `html-doc` variant.
pub struct HtmlRenderer {
    embed_styles: bool,
}

impl HtmlRenderer {
    /// The bare-fragment variant.
    pub fn fragment() -> Self {
        HtmlRenderer {
            embed_styles: false,
        }
    }

    /// The standalone variant with an embedded stylesheet.
    pub fn document() -> Self {
        HtmlRenderer { embed_styles: true }
    }
}

impl Renderer for HtmlRenderer {
    fn name(&self) -> &str {
        if self.embed_styles {
            "html-doc"
        } else {
            "html"
        }
    }

    fn description(&self) -> &str {
        if self.embed_styles {
            "HTML block with an embedded theme stylesheet"
        } else {
            "HTML fragment of sh-<kind> spans"
        }
    }

    fn render(&self, code: &str, language: &str, theme: &Theme) -> Result<String, RenderError> {
        let fragment = render_fragment(code, language);
        if !self.embed_styles {
            return Ok(fragment);
        }
        Ok(format!(
            "<style>\n{}</style>\n<pre class=\"sh\"><code>{}</code></pre>\n",
            stylesheet(theme),
            fragment
        ))
    }
}

/// Render the span fragment for `code`, falling back to escaped verbatim
/// text when `language` has no tokenizer.
pub fn render_fragment(code: &str, language: &str) -> String {
    match tokenize(language, code) {
        Some(tokens) => tokens.iter().map(render_token).collect(),
        None => escape(code),
    }
}

fn render_token(token: &Token) -> String {
    if token.kind.is_plain() {
        escape(&token.text)
    } else {
        format!(
            "<span class=\"{}\">{}</span>",
            token.kind.css_class(),
            escape(&token.text)
        )
    }
}

/// Generate the `.sh-<kind>` rules for `theme`. `Plain` gets no rule; it
/// renders unwrapped.
pub fn stylesheet(theme: &Theme) -> String {
    let mut css = String::new();
    for (kind, color) in theme.entries() {
        if kind == TokenKind::Plain {
            continue;
        }
        css.push_str(&format!(
            ".{} {{ color: {}; }}\n",
            kind.css_class(),
            color.to_hex()
        ));
    }
    css
}

/// Escape text for an HTML text node (quotes included, so the same escape
/// is safe inside attribute values).
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_plain_tokens_are_unwrapped() {
        let html = render_fragment("x = y", "python");
        assert_eq!(html, "x <span class=\"sh-punct\">=</span> y");
    }

    #[test]
    fn test_unsupported_language_renders_escaped_verbatim() {
        let code = "MOVE <A> TO B.\n  NEXT";
        assert_eq!(render_fragment(code, "cobol"), escape(code));
    }

    #[test]
    fn test_string_contents_are_escaped_inside_span() {
        let html = render_fragment("x = \"<b>\"", "python");
        assert!(html.contains("<span class=\"sh-string\">&quot;&lt;b&gt;&quot;</span>"));
    }

    #[test]
    fn test_document_variant_embeds_stylesheet() {
        let out = HtmlRenderer::document()
            .render("ls", "shell", &Theme::default())
            .expect("renders");
        assert!(out.starts_with("<style>"));
        assert!(out.contains(".sh-keyword { color: "));
        assert!(out.contains("<pre class=\"sh\"><code>"));
        assert!(!out.contains(".sh-plain"));
    }
}

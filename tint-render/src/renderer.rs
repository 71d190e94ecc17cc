//! Renderer trait definition
//!
//! All output formats implement this one trait so the registry and the CLI
//! can treat them uniformly.

use crate::error::RenderError;
use crate::theme::Theme;

/// Trait for token-sequence renderers
///
/// A renderer receives the original code string and the language tag, runs
/// the dispatcher itself, and produces one output string. Keeping dispatch
/// inside the renderer lets each format own its verbatim fallback for
/// unrecognized languages.
pub trait Renderer: Send + Sync {
    /// The name of this renderer (e.g., "html", "ansi", "json")
    fn name(&self) -> &str;

    /// Optional description of this renderer
    fn description(&self) -> &str {
        ""
    }

    /// Render `code` as `language` using `theme`.
    ///
    /// When the language is not covered by a tokenizer, the output must
    /// carry `code` verbatim with no token-level styling.
    fn render(&self, code: &str, language: &str, theme: &Theme) -> Result<String, RenderError>;
}

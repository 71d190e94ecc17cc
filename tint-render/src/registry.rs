//! Renderer registry for discovery and selection
//!
//! Centralized registry of all available renderers, keyed by name. The CLI
//! resolves its `--format` argument here; library callers can register
//! their own renderers alongside the defaults.

use std::collections::HashMap;

use crate::error::RenderError;
use crate::formats::ansi::AnsiRenderer;
use crate::formats::html::HtmlRenderer;
use crate::formats::json::JsonRenderer;
use crate::formats::text::TextRenderer;
use crate::renderer::Renderer;
use crate::theme::Theme;

/// Registry of renderers
pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn Renderer>>,
}

impl RendererRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        RendererRegistry {
            renderers: HashMap::new(),
        }
    }

    /// A registry with every built-in renderer registered
    pub fn with_defaults() -> Self {
        let mut registry = RendererRegistry::new();
        registry.register(HtmlRenderer::fragment());
        registry.register(HtmlRenderer::document());
        registry.register(AnsiRenderer);
        registry.register(JsonRenderer);
        registry.register(TextRenderer);
        registry
    }

    /// Register a renderer
    ///
    /// If a renderer with the same name already exists, it will be replaced.
    pub fn register<R: Renderer + 'static>(&mut self, renderer: R) {
        self.renderers
            .insert(renderer.name().to_string(), Box::new(renderer));
    }

    /// Get a renderer by name
    pub fn get(&self, name: &str) -> Result<&dyn Renderer, RenderError> {
        self.renderers
            .get(name)
            .map(|r| r.as_ref())
            .ok_or_else(|| {
                RenderError::Serialization(format!("no renderer named {:?}", name))
            })
    }

    /// Check if a renderer exists
    pub fn has(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    /// List all available renderer names (sorted)
    pub fn list_renderers(&self) -> Vec<String> {
        let mut names: Vec<_> = self.renderers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Render `code` with the named renderer
    pub fn render(
        &self,
        code: &str,
        language: &str,
        renderer: &str,
        theme: &Theme,
    ) -> Result<String, RenderError> {
        self.get(renderer)?.render(code, language, theme)
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        RendererRegistry::new()
    }
}

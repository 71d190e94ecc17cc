//! Rendering boundary for tint token sequences
//!
//!     This crate turns the token sequences produced by the `tint` core
//!     into styled output strings. It is a pure library: no code here may
//!     assume a shell environment (std print, env vars, terminal probing);
//!     renderers build and return strings, and the caller decides where
//!     they go.
//!
//! Architecture
//!
//!     - Renderer trait: uniform interface for all output formats
//!     - RendererRegistry: centralized discovery and selection by name
//!     - Renderer implementations: one module per format under formats/
//!     - Theme: kind → color mapping shared by the HTML stylesheet and the
//!       ANSI renderer, loadable from a YAML file
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── renderer.rs             # Renderer trait definition
//!     ├── registry.rs             # RendererRegistry for discovery and selection
//!     ├── theme.rs
//!     ├── formats
//!     │   ├── html
//!     │   ├── ansi
//!     │   ├── json
//!     │   └── text
//!     └── lib.rs
//!
//! Fallback contract
//!
//!     Every renderer must honor the dispatcher's "no coverage" outcome:
//!     when the language is unrecognized the original code passes through
//!     verbatim (escaped where the output medium demands it, but with no
//!     token-level styling). Styling is presentation only: a host that
//!     copies code to the clipboard must copy the original string, which
//!     the coverage invariant keeps recoverable from any token sequence.

pub mod error;
pub mod formats;
pub mod registry;
pub mod renderer;
pub mod theme;

pub use error::RenderError;
pub use registry::RendererRegistry;
pub use renderer::Renderer;
pub use theme::{Color, Theme};

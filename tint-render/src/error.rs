//! Error type for the rendering boundary
//!
//! An unrecognized language is not an error anywhere in this crate; it is
//! handled by the verbatim fallback. Errors are limited to genuinely
//! exceptional conditions: a serializer failure or a malformed theme.

use std::fmt;

/// Errors that can occur while rendering
#[derive(Debug, Clone)]
pub enum RenderError {
    /// Error serializing tokens to an output encoding
    Serialization(String),
    /// Malformed theme definition
    Theme(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            RenderError::Theme(msg) => write!(f, "Theme error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<RenderError> for String {
    fn from(err: RenderError) -> Self {
        err.to_string()
    }
}

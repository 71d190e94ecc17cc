//! Color theme for renderers
//!
//! A theme maps token kinds to RGB colors. The built-in default is a dark
//! palette in the style documentation sites use for code blocks; a theme
//! file (YAML mapping of kind tags to `#rrggbb` strings) overrides it per
//! kind, so a partial file is fine.

use std::collections::HashMap;

use tint::highlight::{TokenKind, TOKEN_KINDS};

use crate::error::RenderError;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parse a `#rrggbb` string.
    pub fn from_hex(hex: &str) -> Result<Color, RenderError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| RenderError::Theme(format!("color {:?} must start with '#'", hex)))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RenderError::Theme(format!("color {:?} must be #rrggbb", hex)));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| RenderError::Theme(e.to_string()))
        };
        Ok(Color {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Token kind → color mapping
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    colors: HashMap<TokenKind, Color>,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color { r, g, b }
}

impl Default for Theme {
    fn default() -> Self {
        let colors = [
            (TokenKind::Comment, rgb(0x5c, 0x63, 0x70)),
            (TokenKind::Str, rgb(0x98, 0xc3, 0x79)),
            (TokenKind::Number, rgb(0xd1, 0x9a, 0x66)),
            (TokenKind::Keyword, rgb(0xc6, 0x78, 0xdd)),
            (TokenKind::Builtin, rgb(0x61, 0xaf, 0xef)),
            (TokenKind::BuiltinConst, rgb(0xd1, 0x9a, 0x66)),
            (TokenKind::Decorator, rgb(0x56, 0xb6, 0xc2)),
            (TokenKind::Punct, rgb(0xab, 0xb2, 0xbf)),
            (TokenKind::Plain, rgb(0xab, 0xb2, 0xbf)),
            (TokenKind::SelfName, rgb(0xe0, 0x6c, 0x75)),
            (TokenKind::FuncName, rgb(0xe5, 0xc0, 0x7b)),
            (TokenKind::ClassName, rgb(0xe5, 0xc0, 0x7b)),
        ]
        .into_iter()
        .collect();
        Theme { colors }
    }
}

impl Theme {
    /// Load a theme from a YAML mapping of kind tags to `#rrggbb` strings.
    /// Kinds absent from the file keep their default color; an unknown
    /// kind tag is an error.
    pub fn from_yaml(source: &str) -> Result<Theme, RenderError> {
        let raw: HashMap<String, String> =
            serde_yaml::from_str(source).map_err(|e| RenderError::Theme(e.to_string()))?;

        let mut theme = Theme::default();
        for (tag, hex) in raw {
            let kind = TokenKind::from_tag(&tag)
                .ok_or_else(|| RenderError::Theme(format!("unknown token kind {:?}", tag)))?;
            theme.colors.insert(kind, Color::from_hex(&hex)?);
        }
        Ok(theme)
    }

    /// The color for `kind`, falling back to the `Plain` color.
    pub fn color(&self, kind: TokenKind) -> Color {
        self.colors
            .get(&kind)
            .or_else(|| self.colors.get(&TokenKind::Plain))
            .copied()
            .unwrap_or(rgb(0xab, 0xb2, 0xbf))
    }

    /// All `(kind, color)` entries in stable listing order.
    pub fn entries(&self) -> impl Iterator<Item = (TokenKind, Color)> + '_ {
        TOKEN_KINDS.iter().map(|kind| (*kind, self.color(*kind)))
    }
}

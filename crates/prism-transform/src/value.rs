//! Value transforms.
//!
//! A value transform is a pure function of (value, token type, attributes).
//! Transforms that match a token chain in group order; a non-matching
//! transform is a no-op for that token, never an error.

use std::fmt;

use prism_core::{Color, Token, TokenType, TokenValue};

use crate::error::TransformError;

/// A per-token value transform.
///
/// Object-safe so transforms can be stored in `Box<dyn ValueTransform>`.
pub trait ValueTransform: fmt::Debug + Send + Sync {
    /// Registry name, e.g. `color/hex`.
    fn name(&self) -> &str;

    /// Whether this transform applies to the token.
    fn matches(&self, token: &Token) -> bool;

    /// Transform the (possibly already chained) value.
    fn apply(&self, value: &TokenValue, token: &Token) -> Result<TokenValue, TransformError>;
}

/// The textual form a color transform produces.
#[derive(Debug, Clone, Copy)]
enum ColorForm {
    /// Lowercase `#rrggbb` / `#rrggbbaa`.
    CssHex,
    /// Android `#aarrggbb`.
    Hex8Argb,
    /// Flutter `0xAARRGGBB`.
    Hex8Flutter,
}

/// Renders color tokens into one platform's hex convention.
#[derive(Debug)]
pub struct ColorTransform {
    name: &'static str,
    form: ColorForm,
}

impl ColorTransform {
    pub fn css_hex() -> Self {
        Self {
            name: "color/hex",
            form: ColorForm::CssHex,
        }
    }

    pub fn hex8_android() -> Self {
        Self {
            name: "color/hex8-android",
            form: ColorForm::Hex8Argb,
        }
    }

    pub fn hex8_flutter() -> Self {
        Self {
            name: "color/hex8-flutter",
            form: ColorForm::Hex8Flutter,
        }
    }

    fn format(&self, color: Color) -> String {
        match self.form {
            ColorForm::CssHex => color.to_css_hex(),
            ColorForm::Hex8Argb => color.to_hex8_argb(),
            ColorForm::Hex8Flutter => color.to_hex8_flutter(),
        }
    }
}

impl ValueTransform for ColorTransform {
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, token: &Token) -> bool {
        token.token_type == TokenType::Color
    }

    fn apply(&self, value: &TokenValue, token: &Token) -> Result<TokenValue, TransformError> {
        let color = match value {
            TokenValue::Color(color) => *color,
            TokenValue::Str(raw) => {
                Color::parse(raw).ok_or_else(|| TransformError::Value {
                    transform: self.name.to_string(),
                    token: token.path.to_string(),
                    message: format!("'{raw}' is not a color"),
                })?
            }
            other => {
                return Err(TransformError::Value {
                    transform: self.name.to_string(),
                    token: token.path.to_string(),
                    message: format!("cannot read a color from a {} value", other.kind()),
                });
            }
        };
        Ok(TokenValue::Str(self.format(color)))
    }
}

/// Suffixes bare numeric sizes with a platform unit (`16` → `16px`).
///
/// String values pass through unchanged, so trees whose sizes already carry
/// units survive the transform.
#[derive(Debug)]
pub struct SizeSuffix {
    name: &'static str,
    unit: &'static str,
    types: &'static [TokenType],
}

impl SizeSuffix {
    pub fn px() -> Self {
        Self {
            name: "size/px",
            unit: "px",
            types: &[TokenType::Dimension, TokenType::FontSize],
        }
    }

    pub fn rem() -> Self {
        Self {
            name: "size/rem",
            unit: "rem",
            types: &[TokenType::Dimension, TokenType::FontSize],
        }
    }

    pub fn dp() -> Self {
        Self {
            name: "size/dp",
            unit: "dp",
            types: &[TokenType::Dimension],
        }
    }

    pub fn sp() -> Self {
        Self {
            name: "size/sp",
            unit: "sp",
            types: &[TokenType::FontSize],
        }
    }
}

impl ValueTransform for SizeSuffix {
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, token: &Token) -> bool {
        self.types.contains(&token.token_type)
    }

    fn apply(&self, value: &TokenValue, token: &Token) -> Result<TokenValue, TransformError> {
        match value {
            TokenValue::Number(n) => Ok(TokenValue::Str(format!("{n}{}", self.unit))),
            TokenValue::Str(_) => Ok(value.clone()),
            other => Err(TransformError::Value {
                transform: self.name.to_string(),
                token: token.path.to_string(),
                message: format!("cannot suffix a {} value with '{}'", other.kind(), self.unit),
            }),
        }
    }
}

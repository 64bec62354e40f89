//! Token value kinds.
//!
//! Every token value is one of a small set of kinds carried through
//! resolution and transformation. Keeping the kind explicit is what lets a
//! whole-value reference to a numeric token stay numeric instead of
//! collapsing to a string.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Parse a color from `#rgb`, `#rrggbb`, `#rrggbbaa` hex notation or
    /// `rgb(r, g, b)` / `rgba(r, g, b, a)` functional notation.
    ///
    /// Eight-digit hex is read as RRGGBBAA. The functional alpha channel is
    /// a float in [0, 1].
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if let Some(body) = input
            .strip_prefix("rgba(")
            .or_else(|| input.strip_prefix("rgb("))
        {
            return Self::parse_functional(body.strip_suffix(')')?);
        }
        None
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).ok();
        match hex.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
                let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
                Some(Self {
                    r: r * 17,
                    g: g * 17,
                    b: b * 17,
                    a: 255,
                })
            }
            6 => Some(Self {
                r: channel(0)?,
                g: channel(1)?,
                b: channel(2)?,
                a: 255,
            }),
            8 => Some(Self {
                r: channel(0)?,
                g: channel(1)?,
                b: channel(2)?,
                a: channel(3)?,
            }),
            _ => None,
        }
    }

    fn parse_functional(body: &str) -> Option<Self> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return None;
        }
        let r: u8 = parts[0].parse().ok()?;
        let g: u8 = parts[1].parse().ok()?;
        let b: u8 = parts[2].parse().ok()?;
        let a = match parts.get(3) {
            Some(raw) => {
                let alpha: f64 = raw.parse().ok()?;
                if !(0.0..=1.0).contains(&alpha) {
                    return None;
                }
                (alpha * 255.0).round() as u8
            }
            None => 255,
        };
        Some(Self { r, g, b, a })
    }

    /// Lowercase CSS hex: `#rrggbb`, with an alpha suffix only when the
    /// color is not fully opaque.
    pub fn to_css_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Android resource hex: `#aarrggbb`.
    pub fn to_hex8_argb(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
    }

    /// Flutter color literal body: `0xAARRGGBB`.
    pub fn to_hex8_flutter(&self) -> String {
        format!("0x{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css_hex())
    }
}

/// A token's value: a literal of one of four kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Bool(bool),
    Number(f64),
    Str(String),
    Color(Color),
}

impl TokenValue {
    /// The kind name, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            TokenValue::Bool(_) => "boolean",
            TokenValue::Number(_) => "number",
            TokenValue::Str(_) => "string",
            TokenValue::Color(_) => "color",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            TokenValue::Color(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Bool(b) => write!(f, "{b}"),
            TokenValue::Number(n) => write!(f, "{n}"),
            TokenValue::Str(s) => write!(f, "{s}"),
            TokenValue::Color(c) => write!(f, "{c}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_short_hex() {
        let c = Color::parse("#f0a").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (255, 0, 170, 255));
    }

    #[test]
    fn parse_long_hex() {
        let c = Color::parse("#FF0000").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (255, 0, 0, 255));
        assert_eq!(c.to_css_hex(), "#ff0000");
    }

    #[test]
    fn parse_hex_with_alpha() {
        let c = Color::parse("#ff000080").unwrap();
        assert_eq!(c.a, 0x80);
        assert_eq!(c.to_css_hex(), "#ff000080");
    }

    #[test]
    fn parse_functional() {
        let c = Color::parse("rgb(255, 0, 0)").unwrap();
        assert_eq!(c.to_css_hex(), "#ff0000");

        let c = Color::parse("rgba(0, 0, 255, 0.5)").unwrap();
        assert_eq!((c.b, c.a), (255, 128));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Color::parse("red").is_none());
        assert!(Color::parse("#ff00").is_none());
        assert!(Color::parse("rgb(1, 2)").is_none());
        assert!(Color::parse("rgba(1, 2, 3, 1.5)").is_none());
    }

    #[test]
    fn android_and_flutter_forms() {
        let c = Color::parse("#ff0000").unwrap();
        assert_eq!(c.to_hex8_argb(), "#ffff0000");
        assert_eq!(c.to_hex8_flutter(), "0xFFFF0000");
    }

    #[test]
    fn number_display_drops_integral_fraction() {
        assert_eq!(TokenValue::Number(16.0).to_string(), "16");
        assert_eq!(TokenValue::Number(0.5).to_string(), "0.5");
    }
}

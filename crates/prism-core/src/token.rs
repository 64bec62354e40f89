//! Tokens and their semantic types.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::path::TokenPath;
use crate::value::TokenValue;

/// The semantic kind of a token. Open: unrecognized type strings round-trip
/// through `Other` rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TokenType {
    Color,
    Dimension,
    FontFamily,
    FontWeight,
    FontSize,
    Shadow,
    Number,
    Duration,
    CubicBezier,
    Other(String),
}

impl TokenType {
    pub fn as_str(&self) -> &str {
        match self {
            TokenType::Color => "color",
            TokenType::Dimension => "dimension",
            TokenType::FontFamily => "fontFamily",
            TokenType::FontWeight => "fontWeight",
            TokenType::FontSize => "fontSize",
            TokenType::Shadow => "shadow",
            TokenType::Number => "number",
            TokenType::Duration => "duration",
            TokenType::CubicBezier => "cubicBezier",
            TokenType::Other(s) => s,
        }
    }
}

impl From<&str> for TokenType {
    fn from(s: &str) -> Self {
        match s {
            "color" => TokenType::Color,
            "dimension" => TokenType::Dimension,
            "fontFamily" => TokenType::FontFamily,
            "fontWeight" => TokenType::FontWeight,
            "fontSize" => TokenType::FontSize,
            "shadow" => TokenType::Shadow,
            "number" => TokenType::Number,
            "duration" => TokenType::Duration,
            "cubicBezier" => TokenType::CubicBezier,
            other => TokenType::Other(other.to_string()),
        }
    }
}

impl From<String> for TokenType {
    fn from(s: String) -> Self {
        TokenType::from(s.as_str())
    }
}

impl From<TokenType> for String {
    fn from(t: TokenType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Extra attributes on a token, preserved opaquely through the pipeline.
pub type Attributes = Map<String, Value>;

/// A single named design value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub path: TokenPath,
    pub value: TokenValue,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl Token {
    pub fn new(path: TokenPath, value: TokenValue, token_type: TokenType) -> Self {
        Self {
            path,
            value,
            token_type,
            comment: None,
            attributes: Attributes::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

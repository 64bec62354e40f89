//! The resolved, platform-transformed view of a token tree.
//!
//! This is the sole input to format renderers: a flat, declaration-ordered
//! sequence of tokens whose values are platform literals and whose output
//! names are computed.

use serde::{Deserialize, Serialize};

use crate::path::TokenPath;
use crate::token::{Attributes, TokenType};
use crate::value::TokenValue;

/// A token after reference resolution and platform transforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedToken {
    pub path: TokenPath,
    /// Computed output identifier (after the group's name transform).
    pub name: String,
    pub value: TokenValue,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

/// One platform's fully resolved tree, in flattened declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTree {
    pub platform: String,
    tokens: Vec<ResolvedToken>,
}

impl ResolvedTree {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            tokens: Vec::new(),
        }
    }

    pub fn push(&mut self, token: ResolvedToken) {
        self.tokens.push(token);
    }

    /// Tokens in flattened (deterministic) order.
    pub fn tokens(&self) -> &[ResolvedToken] {
        &self.tokens
    }

    pub fn lookup(&self, path: &TokenPath) -> Option<&ResolvedToken> {
        self.tokens.iter().find(|t| t.path == *path)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_lookup() {
        let mut tree = ResolvedTree::new("web");
        tree.push(ResolvedToken {
            path: TokenPath::parse("color.red").unwrap(),
            name: "color-red".to_string(),
            value: TokenValue::Str("#ff0000".to_string()),
            token_type: TokenType::Color,
            comment: None,
            attributes: Attributes::new(),
        });

        assert_eq!(tree.len(), 1);
        let found = tree.lookup(&TokenPath::parse("color.red").unwrap()).unwrap();
        assert_eq!(found.name, "color-red");
    }
}

//! Source document loading.
//!
//! A source document is a nested JSON mapping: internal nodes are named
//! groups, terminal nodes are objects carrying at least `value` and `type`.
//! DTCG-style `$value` / `$type` / `$description` spellings are accepted and
//! normalized; `$`-prefixed keys at group level (`$schema`, `$metadata`, …)
//! are document metadata and are skipped.

use serde_json::Value;

use crate::error::SourceError;
use crate::path::TokenPath;
use crate::token::{Token, TokenType};
use crate::tree::TokenTree;
use crate::value::{Color, TokenValue};

/// One raw token document, parsed but not yet shaped into a tree.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub name: String,
    data: Value,
}

impl SourceDocument {
    /// Parse a JSON document. The document name is only used in errors.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, SourceError> {
        let name = name.into();
        let data: Value = serde_json::from_str(text).map_err(|e| SourceError::Parse {
            document: name.clone(),
            message: e.to_string(),
        })?;
        Ok(Self { name, data })
    }

    /// Wrap an already-parsed JSON value.
    pub fn from_value(name: impl Into<String>, data: Value) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

impl TokenTree {
    /// Build a tree from an ordered sequence of documents.
    ///
    /// Documents merge by deep union; a later document's token at an
    /// existing path overrides the earlier one (last-wins), groups merge
    /// recursively.
    pub fn load(documents: &[SourceDocument]) -> Result<Self, SourceError> {
        let mut tree = TokenTree::new();
        for doc in documents {
            let Value::Object(root) = &doc.data else {
                return Err(SourceError::RootNotObject {
                    document: doc.name.clone(),
                });
            };
            load_group(&mut tree, &TokenPath::root(), root)?;
        }
        Ok(tree)
    }
}

fn load_group(
    tree: &mut TokenTree,
    path: &TokenPath,
    object: &serde_json::Map<String, Value>,
) -> Result<(), SourceError> {
    for (key, node) in object {
        if key.starts_with('$') {
            continue;
        }
        if key.is_empty() {
            return Err(SourceError::InvalidSegment {
                path: path.to_string(),
                segment: key.clone(),
            });
        }
        let child_path = path.child(key);
        let Value::Object(child) = node else {
            return Err(SourceError::InvalidLeaf {
                path: child_path.to_string(),
                message: format!("expected a group or token object, found {}", kind_name(node)),
            });
        };
        if is_leaf(child) {
            let token = load_token(&child_path, child)?;
            tree.insert(token)?;
        } else {
            load_group(tree, &child_path, child)?;
        }
    }
    Ok(())
}

fn is_leaf(object: &serde_json::Map<String, Value>) -> bool {
    object.contains_key("value") || object.contains_key("$value")
}

fn load_token(
    path: &TokenPath,
    object: &serde_json::Map<String, Value>,
) -> Result<Token, SourceError> {
    let raw_value = field(object, "value", "$value").expect("leaf has a value key");
    let type_name = match field(object, "type", "$type") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(SourceError::InvalidLeaf {
                path: path.to_string(),
                message: format!("'type' must be a string, found {}", kind_name(other)),
            });
        }
        None => {
            return Err(SourceError::MissingField {
                path: path.to_string(),
                field: "type".to_string(),
            });
        }
    };
    let token_type = TokenType::from(type_name.as_str());
    let value = load_value(path, raw_value, &token_type)?;

    let comment = match field(object, "comment", "$description") {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    };

    let mut token = Token::new(path.clone(), value, token_type);
    token.comment = comment;

    for (key, extra) in object {
        if matches!(
            key.as_str(),
            "value" | "$value" | "type" | "$type" | "comment" | "$description"
        ) || key.starts_with('$')
        {
            continue;
        }
        // A sibling that itself looks like a token means the node is being
        // used as both a leaf and a group.
        if let Value::Object(map) = extra {
            if is_leaf(map) {
                return Err(SourceError::AmbiguousNode {
                    path: path.to_string(),
                });
            }
        }
        token.attributes.insert(key.clone(), extra.clone());
    }

    Ok(token)
}

fn load_value(
    path: &TokenPath,
    raw: &Value,
    token_type: &TokenType,
) -> Result<TokenValue, SourceError> {
    match raw {
        Value::Bool(b) => Ok(TokenValue::Bool(*b)),
        Value::Number(n) => {
            let n = n.as_f64().ok_or_else(|| SourceError::InvalidLeaf {
                path: path.to_string(),
                message: format!("numeric value {n} is out of range"),
            })?;
            Ok(TokenValue::Number(n))
        }
        Value::String(s) => {
            // Reference-bearing strings stay raw for the resolver; concrete
            // color strings are classified eagerly.
            if *token_type == TokenType::Color && !s.contains('{') {
                if let Some(color) = Color::parse(s) {
                    return Ok(TokenValue::Color(color));
                }
            }
            Ok(TokenValue::Str(s.clone()))
        }
        other => Err(SourceError::InvalidLeaf {
            path: path.to_string(),
            message: format!("unsupported value kind: {}", kind_name(other)),
        }),
    }
}

fn field<'a>(
    object: &'a serde_json::Map<String, Value>,
    plain: &str,
    dollar: &str,
) -> Option<&'a Value> {
    object.get(plain).or_else(|| object.get(dollar))
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

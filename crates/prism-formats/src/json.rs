//! JSON formats: flat path→value mapping and group-structured nesting.
//!
//! Output is written by a small deterministic writer rather than a generic
//! serializer so key order is exactly the resolved tree's declaration order.

use prism_core::{ResolvedTree, TokenValue};

use crate::error::FormatError;
use crate::escape::quote_double;
use crate::format::Format;
use crate::options::FileOptions;

/// `json/flat` — a single-level object keyed by full dotted path.
#[derive(Debug)]
pub struct JsonFlat;

impl Format for JsonFlat {
    fn name(&self) -> &str {
        "json/flat"
    }

    fn render(&self, tree: &ResolvedTree, _options: &FileOptions) -> Result<String, FormatError> {
        let mut out = String::from("{\n");
        let tokens = tree.tokens();
        for (i, token) in tokens.iter().enumerate() {
            out.push_str("  ");
            out.push_str(&quote_double(&token.path.to_string()));
            out.push_str(": ");
            out.push_str(&json_value(&token.value));
            if i + 1 < tokens.len() {
                out.push(',');
            }
            out.push('\n');
        }
        out.push_str("}\n");
        Ok(out)
    }
}

/// `json/nested` — an object mirroring the original group structure.
#[derive(Debug)]
pub struct JsonNested;

impl Format for JsonNested {
    fn name(&self) -> &str {
        "json/nested"
    }

    fn render(&self, tree: &ResolvedTree, _options: &FileOptions) -> Result<String, FormatError> {
        let mut root = JsonNode::Object(Vec::new());
        for token in tree.tokens() {
            root.insert(token.path.segments(), token.value.clone());
        }
        let mut out = String::new();
        root.write(&mut out, 0);
        out.push('\n');
        Ok(out)
    }
}

/// An order-preserving JSON value for the nested renderer.
#[derive(Debug)]
enum JsonNode {
    Object(Vec<(String, JsonNode)>),
    Leaf(TokenValue),
}

impl JsonNode {
    fn insert(&mut self, segments: &[String], value: TokenValue) {
        let JsonNode::Object(children) = self else {
            return;
        };
        let Some((head, rest)) = segments.split_first() else {
            return;
        };
        if rest.is_empty() {
            children.push((head.clone(), JsonNode::Leaf(value)));
            return;
        }
        let child = match children.iter().position(|(name, _)| name == head) {
            Some(i) => &mut children[i].1,
            None => {
                children.push((head.clone(), JsonNode::Object(Vec::new())));
                &mut children.last_mut().expect("just pushed").1
            }
        };
        child.insert(rest, value);
    }

    fn write(&self, out: &mut String, depth: usize) {
        match self {
            JsonNode::Leaf(value) => out.push_str(&json_value(value)),
            JsonNode::Object(children) => {
                if children.is_empty() {
                    out.push_str("{}");
                    return;
                }
                out.push_str("{\n");
                for (i, (name, child)) in children.iter().enumerate() {
                    for _ in 0..depth + 1 {
                        out.push_str("  ");
                    }
                    out.push_str(&quote_double(name));
                    out.push_str(": ");
                    child.write(out, depth + 1);
                    if i + 1 < children.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                for _ in 0..depth {
                    out.push_str("  ");
                }
                out.push('}');
            }
        }
    }
}

/// A token value as a JSON literal.
fn json_value(value: &TokenValue) -> String {
    match value {
        TokenValue::Str(s) => quote_double(s),
        TokenValue::Number(n) => n.to_string(),
        TokenValue::Bool(b) => b.to_string(),
        TokenValue::Color(c) => quote_double(&c.to_css_hex()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Attributes, ResolvedToken, TokenPath, TokenType};

    fn push(tree: &mut ResolvedTree, path: &str, value: TokenValue) {
        tree.push(ResolvedToken {
            path: TokenPath::parse(path).unwrap(),
            name: path.replace('.', "-"),
            value,
            token_type: TokenType::Other("content".to_string()),
            comment: None,
            attributes: Attributes::new(),
        });
    }

    fn sample_tree() -> ResolvedTree {
        let mut tree = ResolvedTree::new("json");
        push(&mut tree, "color.red", TokenValue::Str("#ff0000".to_string()));
        push(&mut tree, "color.blue", TokenValue::Str("#0000ff".to_string()));
        push(&mut tree, "size.base", TokenValue::Number(16.0));
        tree
    }

    #[test]
    fn flat_shape() {
        let out = JsonFlat.render(&sample_tree(), &FileOptions::default()).unwrap();
        assert_eq!(
            out,
            "{\n  \"color.red\": \"#ff0000\",\n  \"color.blue\": \"#0000ff\",\n  \"size.base\": 16\n}\n"
        );
    }

    #[test]
    fn nested_shape() {
        let out = JsonNested.render(&sample_tree(), &FileOptions::default()).unwrap();
        assert_eq!(
            out,
            "{\n  \"color\": {\n    \"red\": \"#ff0000\",\n    \"blue\": \"#0000ff\"\n  },\n  \"size\": {\n    \"base\": 16\n  }\n}\n"
        );
    }

    #[test]
    fn outputs_parse_as_json() {
        let tree = sample_tree();
        let flat = JsonFlat.render(&tree, &FileOptions::default()).unwrap();
        let nested = JsonNested.render(&tree, &FileOptions::default()).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&flat).is_ok());
        assert!(serde_json::from_str::<serde_json::Value>(&nested).is_ok());
    }

    #[test]
    fn flat_and_nested_agree_on_path_value_pairs() {
        let tree = sample_tree();
        let flat = JsonFlat.render(&tree, &FileOptions::default()).unwrap();
        let nested = JsonNested.render(&tree, &FileOptions::default()).unwrap();

        let flat: serde_json::Value = serde_json::from_str(&flat).unwrap();
        let nested: serde_json::Value = serde_json::from_str(&nested).unwrap();

        fn flatten(prefix: &str, value: &serde_json::Value, out: &mut Vec<(String, String)>) {
            match value {
                serde_json::Value::Object(map) => {
                    for (key, child) in map {
                        let path = if prefix.is_empty() {
                            key.clone()
                        } else {
                            format!("{prefix}.{key}")
                        };
                        flatten(&path, child, out);
                    }
                }
                leaf => out.push((prefix.to_string(), leaf.to_string())),
            }
        }

        let mut from_nested = Vec::new();
        flatten("", &nested, &mut from_nested);

        let mut from_flat: Vec<(String, String)> = flat
            .as_object()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect();

        from_nested.sort();
        from_flat.sort();
        assert_eq!(from_nested, from_flat);

        // and both agree with the resolved tree itself
        let mut from_tree: Vec<(String, String)> = tree
            .tokens()
            .iter()
            .map(|t| (t.path.to_string(), json_value(&t.value)))
            .collect();
        from_tree.sort();
        assert_eq!(from_flat, from_tree);
    }

    #[test]
    fn empty_tree_renders_empty_objects() {
        let tree = ResolvedTree::new("json");
        assert_eq!(JsonFlat.render(&tree, &FileOptions::default()).unwrap(), "{\n}\n");
        assert_eq!(JsonNested.render(&tree, &FileOptions::default()).unwrap(), "{}\n");
    }
}

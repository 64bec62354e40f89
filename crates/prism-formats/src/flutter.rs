//! Flutter format: a Dart class of static-final fields.

use prism_core::{ResolvedTree, TokenType, TokenValue};

use crate::error::FormatError;
use crate::escape::quote_double;
use crate::format::Format;
use crate::options::FileOptions;

/// `flutter/class.dart` — one static-final field per token, typed by kind.
#[derive(Debug)]
pub struct FlutterClass;

impl Format for FlutterClass {
    fn name(&self) -> &str {
        "flutter/class.dart"
    }

    fn render(&self, tree: &ResolvedTree, options: &FileOptions) -> Result<String, FormatError> {
        let class_name = options.require_class_name(self.name())?;

        let mut out = String::from("import 'dart:ui';\n\n");
        out.push_str("class ");
        out.push_str(class_name);
        out.push_str(" {\n  ");
        out.push_str(class_name);
        out.push_str("._();\n\n");
        for token in tree.tokens() {
            if let Some(comment) = &token.comment {
                out.push_str("  /// ");
                out.push_str(comment);
                out.push('\n');
            }
            let (dart_type, literal) = dart_field(&token.value, &token.token_type);
            out.push_str("  static final ");
            out.push_str(dart_type);
            out.push(' ');
            out.push_str(&token.name);
            out.push_str(" = ");
            out.push_str(&literal);
            out.push_str(";\n");
        }
        out.push_str("}\n");
        Ok(out)
    }
}

/// Field type and literal for one token. Color tokens whose value is in the
/// `0xAARRGGBB` form (the flutter transform group's output) become `Color`
/// constructor calls; anything else falls back to the closest Dart type.
fn dart_field(value: &TokenValue, token_type: &TokenType) -> (&'static str, String) {
    match value {
        TokenValue::Color(c) => ("Color", format!("Color({})", c.to_hex8_flutter())),
        TokenValue::Str(s) if *token_type == TokenType::Color && s.starts_with("0x") => {
            ("Color", format!("Color({s})"))
        }
        TokenValue::Str(s) => ("String", quote_double(s)),
        TokenValue::Number(n) => ("double", n.to_string()),
        TokenValue::Bool(b) => ("bool", b.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Attributes, ResolvedToken, TokenPath};

    fn resolved(path: &str, name: &str, value: TokenValue, token_type: TokenType) -> ResolvedToken {
        ResolvedToken {
            path: TokenPath::parse(path).unwrap(),
            name: name.to_string(),
            value,
            token_type,
            comment: None,
            attributes: Attributes::new(),
        }
    }

    #[test]
    fn class_shape_with_typed_fields() {
        let mut tree = ResolvedTree::new("flutter");
        tree.push(resolved(
            "color.red",
            "colorRed",
            TokenValue::Str("0xFFFF0000".to_string()),
            TokenType::Color,
        ));
        tree.push(resolved(
            "size.base",
            "sizeBase",
            TokenValue::Number(16.0),
            TokenType::Dimension,
        ));
        tree.push(resolved(
            "font.family",
            "fontFamily",
            TokenValue::Str("Inter".to_string()),
            TokenType::FontFamily,
        ));

        let options = FileOptions::default().with_class_name("DesignTokens");
        let out = FlutterClass.render(&tree, &options).unwrap();
        assert_eq!(
            out,
            "import 'dart:ui';\n\nclass DesignTokens {\n  DesignTokens._();\n\n  static final Color colorRed = Color(0xFFFF0000);\n  static final double sizeBase = 16;\n  static final String fontFamily = \"Inter\";\n}\n"
        );
    }

    #[test]
    fn class_name_is_required() {
        let tree = ResolvedTree::new("flutter");
        let err = FlutterClass.render(&tree, &FileOptions::default()).unwrap_err();
        assert!(matches!(err, FormatError::MissingOption { .. }));
    }
}

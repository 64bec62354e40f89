//! iOS formats: a Swift constants class and Objective-C macros.

use prism_core::{ResolvedTree, TokenValue};

use crate::error::FormatError;
use crate::escape::quote_double;
use crate::format::Format;
use crate::options::FileOptions;

/// `ios-swift/class.swift` — one static constant per token.
#[derive(Debug)]
pub struct IosSwiftClass;

impl Format for IosSwiftClass {
    fn name(&self) -> &str {
        "ios-swift/class.swift"
    }

    fn render(&self, tree: &ResolvedTree, options: &FileOptions) -> Result<String, FormatError> {
        let class_name = options.require_class_name(self.name())?;

        let mut out = String::from("import UIKit\n\n");
        out.push_str("public class ");
        out.push_str(class_name);
        out.push_str(" {\n");
        for token in tree.tokens() {
            if let Some(comment) = &token.comment {
                out.push_str("    /// ");
                out.push_str(comment);
                out.push('\n');
            }
            out.push_str("    public static let ");
            out.push_str(&token.name);
            out.push_str(" = ");
            out.push_str(&swift_literal(&token.value));
            out.push('\n');
        }
        out.push_str("}\n");
        Ok(out)
    }
}

fn swift_literal(value: &TokenValue) -> String {
    match value {
        TokenValue::Str(s) => quote_double(s),
        TokenValue::Number(n) => n.to_string(),
        TokenValue::Bool(b) => b.to_string(),
        TokenValue::Color(c) => quote_double(&c.to_css_hex()),
    }
}

/// `ios/macros` — C preprocessor defines, strings as Objective-C literals.
#[derive(Debug)]
pub struct IosMacros;

impl Format for IosMacros {
    fn name(&self) -> &str {
        "ios/macros"
    }

    fn render(&self, tree: &ResolvedTree, _options: &FileOptions) -> Result<String, FormatError> {
        let mut out = String::new();
        for token in tree.tokens() {
            out.push_str("#define ");
            out.push_str(&token.name);
            out.push(' ');
            out.push_str(&macro_literal(&token.value));
            out.push('\n');
        }
        Ok(out)
    }
}

fn macro_literal(value: &TokenValue) -> String {
    match value {
        TokenValue::Str(s) => format!("@{}", quote_double(s)),
        TokenValue::Number(n) => n.to_string(),
        TokenValue::Bool(b) => if *b { "YES" } else { "NO" }.to_string(),
        TokenValue::Color(c) => format!("@{}", quote_double(&c.to_css_hex())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Attributes, ResolvedToken, TokenPath, TokenType};

    fn sample_tree() -> ResolvedTree {
        let mut tree = ResolvedTree::new("ios");
        tree.push(ResolvedToken {
            path: TokenPath::parse("color.red").unwrap(),
            name: "colorRed".to_string(),
            value: TokenValue::Str("#ff0000".to_string()),
            token_type: TokenType::Color,
            comment: Some("brand red".to_string()),
            attributes: Attributes::new(),
        });
        tree.push(ResolvedToken {
            path: TokenPath::parse("size.base").unwrap(),
            name: "sizeBase".to_string(),
            value: TokenValue::Number(16.0),
            token_type: TokenType::Dimension,
            comment: None,
            attributes: Attributes::new(),
        });
        tree
    }

    #[test]
    fn swift_class_shape() {
        let options = FileOptions::default().with_class_name("DesignTokens");
        let out = IosSwiftClass.render(&sample_tree(), &options).unwrap();
        assert_eq!(
            out,
            "import UIKit\n\npublic class DesignTokens {\n    /// brand red\n    public static let colorRed = \"#ff0000\"\n    public static let sizeBase = 16\n}\n"
        );
    }

    #[test]
    fn swift_class_requires_class_name() {
        let err = IosSwiftClass
            .render(&sample_tree(), &FileOptions::default())
            .unwrap_err();
        assert!(matches!(err, FormatError::MissingOption { .. }));
    }

    #[test]
    fn macros_shape() {
        let out = IosMacros.render(&sample_tree(), &FileOptions::default()).unwrap();
        assert_eq!(
            out,
            "#define colorRed @\"#ff0000\"\n#define sizeBase 16\n"
        );
    }
}

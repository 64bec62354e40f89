//! Stylesheet formats: CSS custom properties and SCSS variables.

use prism_core::ResolvedTree;

use crate::error::FormatError;
use crate::format::Format;
use crate::options::FileOptions;

/// `css/variables` — a custom-property block under a configurable selector.
#[derive(Debug)]
pub struct CssVariables;

impl Format for CssVariables {
    fn name(&self) -> &str {
        "css/variables"
    }

    fn render(&self, tree: &ResolvedTree, options: &FileOptions) -> Result<String, FormatError> {
        let mut out = String::new();
        out.push_str(options.selector_or_root());
        out.push_str(" {\n");
        for token in tree.tokens() {
            out.push_str("  --");
            out.push_str(&token.name);
            out.push_str(": ");
            out.push_str(&token.value.to_string());
            out.push(';');
            if let Some(comment) = &token.comment {
                out.push_str(" /* ");
                out.push_str(comment);
                out.push_str(" */");
            }
            out.push('\n');
        }
        out.push_str("}\n");
        Ok(out)
    }
}

/// `scss/variables` — one `$variable` per token.
#[derive(Debug)]
pub struct ScssVariables;

impl Format for ScssVariables {
    fn name(&self) -> &str {
        "scss/variables"
    }

    fn render(&self, tree: &ResolvedTree, _options: &FileOptions) -> Result<String, FormatError> {
        let mut out = String::new();
        for token in tree.tokens() {
            out.push('$');
            out.push_str(&token.name);
            out.push_str(": ");
            out.push_str(&token.value.to_string());
            out.push(';');
            if let Some(comment) = &token.comment {
                out.push_str(" // ");
                out.push_str(comment);
            }
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Attributes, ResolvedToken, TokenPath, TokenType, TokenValue};

    fn sample_tree() -> ResolvedTree {
        let mut tree = ResolvedTree::new("web");
        tree.push(ResolvedToken {
            path: TokenPath::parse("color.red").unwrap(),
            name: "color-red".to_string(),
            value: TokenValue::Str("#ff0000".to_string()),
            token_type: TokenType::Color,
            comment: Some("brand red".to_string()),
            attributes: Attributes::new(),
        });
        tree.push(ResolvedToken {
            path: TokenPath::parse("size.base").unwrap(),
            name: "size-base".to_string(),
            value: TokenValue::Str("16px".to_string()),
            token_type: TokenType::Dimension,
            comment: None,
            attributes: Attributes::new(),
        });
        tree
    }

    #[test]
    fn css_block_shape() {
        let out = CssVariables.render(&sample_tree(), &FileOptions::default()).unwrap();
        assert_eq!(
            out,
            ":root {\n  --color-red: #ff0000; /* brand red */\n  --size-base: 16px;\n}\n"
        );
    }

    #[test]
    fn css_custom_selector() {
        let options = FileOptions::default().with_selector("[data-theme=\"dark\"]");
        let out = CssVariables.render(&sample_tree(), &options).unwrap();
        assert!(out.starts_with("[data-theme=\"dark\"] {\n"));
    }

    #[test]
    fn scss_lines_shape() {
        let out = ScssVariables.render(&sample_tree(), &FileOptions::default()).unwrap();
        assert_eq!(
            out,
            "$color-red: #ff0000; // brand red\n$size-base: 16px;\n"
        );
    }
}

//! Android formats: a typed XML resource file and a Java color class.

use prism_core::{ResolvedTree, TokenType, TokenValue};

use crate::error::FormatError;
use crate::escape::{quote_double, xml_escape};
use crate::format::Format;
use crate::options::FileOptions;

/// `android/resources` — `<resources>` entries, element kind from token type.
#[derive(Debug)]
pub struct AndroidResources;

impl Format for AndroidResources {
    fn name(&self) -> &str {
        "android/resources"
    }

    fn render(&self, tree: &ResolvedTree, _options: &FileOptions) -> Result<String, FormatError> {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n");
        for token in tree.tokens() {
            let element = match &token.token_type {
                TokenType::Color => "color",
                TokenType::Dimension | TokenType::FontSize => "dimen",
                TokenType::Number | TokenType::FontWeight => "integer",
                _ => "string",
            };
            out.push_str("  <");
            out.push_str(element);
            out.push_str(" name=\"");
            out.push_str(&xml_escape(&token.name));
            out.push_str("\">");
            out.push_str(&xml_escape(&token.value.to_string()));
            out.push_str("</");
            out.push_str(element);
            out.push_str(">\n");
        }
        out.push_str("</resources>\n");
        Ok(out)
    }
}

/// `android/colors` — a Java class of color constants.
///
/// Color tokens only: handing this format anything else fails the file
/// rather than silently dropping tokens.
#[derive(Debug)]
pub struct AndroidColorsClass;

impl Format for AndroidColorsClass {
    fn name(&self) -> &str {
        "android/colors"
    }

    fn render(&self, tree: &ResolvedTree, options: &FileOptions) -> Result<String, FormatError> {
        let class_name = options.require_class_name(self.name())?;

        let mut out = String::from("public final class ");
        out.push_str(class_name);
        out.push_str(" {\n");
        for token in tree.tokens() {
            if token.token_type != TokenType::Color {
                return Err(FormatError::UnsupportedTokenType {
                    format: self.name().to_string(),
                    token: token.path.to_string(),
                    token_type: token.token_type.to_string(),
                });
            }
            if let Some(comment) = &token.comment {
                out.push_str("  // ");
                out.push_str(comment);
                out.push('\n');
            }
            out.push_str("  public static final String ");
            out.push_str(&token.name);
            out.push_str(" = ");
            out.push_str(&java_color_literal(&token.value));
            out.push_str(";\n");
        }
        out.push_str("}\n");
        Ok(out)
    }
}

fn java_color_literal(value: &TokenValue) -> String {
    match value {
        TokenValue::Color(c) => quote_double(&c.to_hex8_argb()),
        other => quote_double(&other.to_string()),
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
    fn resources_pick_elements_by_type() {
        let mut tree = ResolvedTree::new("android");
        tree.push(resolved(
            "color.red",
            "color_red",
            TokenValue::Str("#ffff0000".to_string()),
            TokenType::Color,
        ));
        tree.push(resolved(
            "size.base",
            "size_base",
            TokenValue::Str("16dp".to_string()),
            TokenType::Dimension,
        ));
        tree.push(resolved(
            "elevation",
            "elevation",
            TokenValue::Number(4.0),
            TokenType::Number,
        ));
        tree.push(resolved(
            "font.family",
            "font_family",
            TokenValue::Str("Inter & Friends".to_string()),
            TokenType::FontFamily,
        ));

        let out = AndroidResources.render(&tree, &FileOptions::default()).unwrap();
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <resources>\n\
             \x20 <color name=\"color_red\">#ffff0000</color>\n\
             \x20 <dimen name=\"size_base\">16dp</dimen>\n\
             \x20 <integer name=\"elevation\">4</integer>\n\
             \x20 <string name=\"font_family\">Inter &amp; Friends</string>\n\
             </resources>\n"
        );
    }

    #[test]
    fn colors_class_shape() {
        let mut tree = ResolvedTree::new("android");
        tree.push(resolved(
            "color.red",
            "color_red",
            TokenValue::Str("#ffff0000".to_string()),
            TokenType::Color,
        ));

        let options = FileOptions::default().with_class_name("DesignTokens");
        let out = AndroidColorsClass.render(&tree, &options).unwrap();
        assert_eq!(
            out,
            "public final class DesignTokens {\n  public static final String color_red = \"#ffff0000\";\n}\n"
        );
    }

    #[test]
    fn colors_class_rejects_non_color_tokens() {
        let mut tree = ResolvedTree::new("android");
        tree.push(resolved(
            "size.base",
            "size_base",
            TokenValue::Str("16dp".to_string()),
            TokenType::Dimension,
        ));

        let options = FileOptions::default().with_class_name("DesignTokens");
        let err = AndroidColorsClass.render(&tree, &options).unwrap_err();
        assert!(matches!(
            err,
            FormatError::UnsupportedTokenType { token, token_type, .. }
                if token == "size.base" && token_type == "dimension"
        ));
    }
}

//! Format registry.
//!
//! Dispatch from format identifier to renderer. Built explicitly from the
//! table of built-ins; `register` is the extension point for new formats —
//! the core dispatch never changes to add one.

use std::collections::BTreeMap;

use crate::android::{AndroidColorsClass, AndroidResources};
use crate::css::{CssVariables, ScssVariables};
use crate::error::FormatError;
use crate::flutter::FlutterClass;
use crate::format::Format;
use crate::json::{JsonFlat, JsonNested};
use crate::swift::{IosMacros, IosSwiftClass};

/// Registry of output formats, keyed by identifier.
#[derive(Debug, Default)]
pub struct FormatRegistry {
    formats: BTreeMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-loaded with every built-in format.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CssVariables));
        registry.register(Box::new(ScssVariables));
        registry.register(Box::new(JsonFlat));
        registry.register(Box::new(JsonNested));
        registry.register(Box::new(IosSwiftClass));
        registry.register(Box::new(IosMacros));
        registry.register(Box::new(AndroidResources));
        registry.register(Box::new(AndroidColorsClass));
        registry.register(Box::new(FlutterClass));
        registry
    }

    /// Register a format under its own name. Re-registering a name replaces
    /// the previous format.
    pub fn register(&mut self, format: Box<dyn Format>) {
        self.formats.insert(format.name().to_string(), format);
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(Box::as_ref)
            .ok_or_else(|| FormatError::UnknownFormat {
                name: name.to_string(),
            })
    }

    pub fn format_names(&self) -> impl Iterator<Item = &str> {
        self.formats.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FileOptions;
    use prism_core::ResolvedTree;

    #[test]
    fn builtins_are_resolvable() {
        let registry = FormatRegistry::with_builtins();
        for name in [
            "css/variables",
            "scss/variables",
            "json/flat",
            "json/nested",
            "ios-swift/class.swift",
            "ios/macros",
            "android/resources",
            "android/colors",
            "flutter/class.dart",
        ] {
            assert!(registry.get(name).is_ok(), "missing builtin {name}");
        }
    }

    #[test]
    fn unknown_format_errors() {
        let registry = FormatRegistry::with_builtins();
        assert!(matches!(
            registry.get("css/grid"),
            Err(FormatError::UnknownFormat { name }) if name == "css/grid"
        ));
    }

    #[test]
    fn custom_format_registration() {
        #[derive(Debug)]
        struct TokenCount;

        impl Format for TokenCount {
            fn name(&self) -> &str {
                "debug/count"
            }

            fn render(
                &self,
                tree: &ResolvedTree,
                _options: &FileOptions,
            ) -> Result<String, FormatError> {
                Ok(format!("{}\n", tree.len()))
            }
        }

        let mut registry = FormatRegistry::with_builtins();
        registry.register(Box::new(TokenCount));

        let format = registry.get("debug/count").unwrap();
        let out = format
            .render(&ResolvedTree::new("debug"), &FileOptions::default())
            .unwrap();
        assert_eq!(out, "0\n");
    }

    #[test]
    fn rendering_is_deterministic() {
        use prism_core::{Attributes, ResolvedToken, TokenPath, TokenType, TokenValue};

        let mut tree = ResolvedTree::new("web");
        for (path, name, value) in [
            ("color.red", "color-red", "#ff0000"),
            ("color.blue", "color-blue", "#0000ff"),
        ] {
            tree.push(ResolvedToken {
                path: TokenPath::parse(path).unwrap(),
                name: name.to_string(),
                value: TokenValue::Str(value.to_string()),
                token_type: TokenType::Color,
                comment: None,
                attributes: Attributes::new(),
            });
        }

        let registry = FormatRegistry::with_builtins();
        let format = registry.get("css/variables").unwrap();
        let first = format.render(&tree, &FileOptions::default()).unwrap();
        let second = format.render(&tree, &FileOptions::default()).unwrap();
        assert_eq!(first, second);
    }
}

//! Per-file renderer options.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FormatError;

/// Options attached to one output file in the build configuration.
///
/// `selector` and `class_name` are the options the built-in formats read;
/// anything else passes through opaquely for custom formats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    #[serde(
        default,
        rename = "className",
        alias = "class_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub class_name: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl FileOptions {
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// The selector for stylesheet formats, defaulting to `:root`.
    pub fn selector_or_root(&self) -> &str {
        self.selector.as_deref().unwrap_or(":root")
    }

    /// The class name, required by class-based formats.
    pub fn require_class_name(&self, format: &str) -> Result<&str, FormatError> {
        self.class_name
            .as_deref()
            .ok_or_else(|| FormatError::MissingOption {
                format: format.to_string(),
                option: "className".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_defaults_to_root() {
        assert_eq!(FileOptions::default().selector_or_root(), ":root");
        assert_eq!(
            FileOptions::default().with_selector(".theme").selector_or_root(),
            ".theme"
        );
    }

    #[test]
    fn missing_class_name_is_an_error() {
        let err = FileOptions::default()
            .require_class_name("flutter/class.dart")
            .unwrap_err();
        assert!(matches!(err, FormatError::MissingOption { option, .. } if option == "className"));
    }
}

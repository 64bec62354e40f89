//! Transform registry.
//!
//! Built explicitly at startup from a table of built-ins; `register_*` is
//! the extension point for custom transforms and groups. There is no
//! process-wide registration.

use std::collections::BTreeMap;

use crate::error::TransformError;
use crate::group::TransformGroup;
use crate::name::{CaseTransform, NameTransform};
use crate::value::{ColorTransform, SizeSuffix, ValueTransform};

/// Registry of value transforms, name transforms, and transform groups.
#[derive(Debug, Default)]
pub struct TransformRegistry {
    values: BTreeMap<String, Box<dyn ValueTransform>>,
    names: BTreeMap<String, Box<dyn NameTransform>>,
    groups: BTreeMap<String, TransformGroup>,
}

impl TransformRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-loaded with every built-in transform and group.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register_value(Box::new(ColorTransform::css_hex()));
        registry.register_value(Box::new(ColorTransform::hex8_android()));
        registry.register_value(Box::new(ColorTransform::hex8_flutter()));
        registry.register_value(Box::new(SizeSuffix::px()));
        registry.register_value(Box::new(SizeSuffix::rem()));
        registry.register_value(Box::new(SizeSuffix::dp()));
        registry.register_value(Box::new(SizeSuffix::sp()));

        registry.register_name(Box::new(CaseTransform::kebab()));
        registry.register_name(Box::new(CaseTransform::camel()));
        registry.register_name(Box::new(CaseTransform::pascal()));
        registry.register_name(Box::new(CaseTransform::snake()));
        registry.register_name(Box::new(CaseTransform::constant()));

        registry.register_group(TransformGroup::web());
        registry.register_group(TransformGroup::scss());
        registry.register_group(TransformGroup::ios());
        registry.register_group(TransformGroup::android());
        registry.register_group(TransformGroup::flutter());

        registry
    }

    /// Register a value transform under its own name. Re-registering a name
    /// replaces the previous transform.
    pub fn register_value(&mut self, transform: Box<dyn ValueTransform>) {
        self.values.insert(transform.name().to_string(), transform);
    }

    pub fn register_name(&mut self, transform: Box<dyn NameTransform>) {
        self.names.insert(transform.name().to_string(), transform);
    }

    pub fn register_group(&mut self, group: TransformGroup) {
        self.groups.insert(group.name.clone(), group);
    }

    pub fn value_transform(&self, name: &str) -> Result<&dyn ValueTransform, TransformError> {
        self.values
            .get(name)
            .map(Box::as_ref)
            .ok_or_else(|| TransformError::UnknownTransform {
                name: name.to_string(),
            })
    }

    pub fn name_transform(&self, name: &str) -> Result<&dyn NameTransform, TransformError> {
        self.names
            .get(name)
            .map(Box::as_ref)
            .ok_or_else(|| TransformError::UnknownTransform {
                name: name.to_string(),
            })
    }

    pub fn group(&self, name: &str) -> Result<&TransformGroup, TransformError> {
        self.groups
            .get(name)
            .ok_or_else(|| TransformError::UnknownGroup {
                name: name.to_string(),
            })
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}

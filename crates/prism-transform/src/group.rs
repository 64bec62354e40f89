//! Transform groups: named, ordered transform pipelines per platform.

use serde::{Deserialize, Serialize};

/// A named, ordered list of value-transform names plus the single name
/// transform applied last. Transforms are referenced by registry name so a
/// group can be described in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformGroup {
    pub name: String,
    #[serde(default)]
    pub value_transforms: Vec<String>,
    pub name_transform: String,
}

impl TransformGroup {
    pub fn new(
        name: impl Into<String>,
        value_transforms: Vec<String>,
        name_transform: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value_transforms,
            name_transform: name_transform.into(),
        }
    }

    /// CSS custom properties and friends.
    pub fn web() -> Self {
        Self::new(
            "web",
            vec!["color/hex".into(), "size/px".into()],
            "name/kebab",
        )
    }

    pub fn scss() -> Self {
        Self::new(
            "scss",
            vec!["color/hex".into(), "size/rem".into()],
            "name/kebab",
        )
    }

    pub fn ios() -> Self {
        Self::new(
            "ios",
            vec!["color/hex".into(), "size/px".into()],
            "name/camel",
        )
    }

    pub fn android() -> Self {
        Self::new(
            "android",
            vec![
                "color/hex8-android".into(),
                "size/dp".into(),
                "size/sp".into(),
            ],
            "name/snake",
        )
    }

    /// Flutter sizes stay numeric (unitless logical pixels).
    pub fn flutter() -> Self {
        Self::new("flutter", vec!["color/hex8-flutter".into()], "name/camel")
    }
}

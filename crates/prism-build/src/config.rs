//! Platform and file build configuration.

use std::path::{Path, PathBuf};

use prism_formats::FileOptions;
use serde::{Deserialize, Serialize};

/// One output file of a platform: destination, format, renderer options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Destination path, relative to the platform's build path.
    pub destination: String,
    /// Format identifier, e.g. `css/variables`.
    pub format: String,
    #[serde(flatten)]
    pub options: FileOptions,
}

impl FileConfig {
    pub fn new(destination: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            format: format.into(),
            options: FileOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FileOptions) -> Self {
        self.options = options;
        self
    }
}

/// One target platform: transform group, build path, and ordered files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    pub name: String,
    pub transform_group: String,
    pub build_path: PathBuf,
    #[serde(default)]
    pub files: Vec<FileConfig>,
}

impl PlatformConfig {
    pub fn new(
        name: impl Into<String>,
        transform_group: impl Into<String>,
        build_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            transform_group: transform_group.into(),
            build_path: build_path.into(),
            files: Vec::new(),
        }
    }

    pub fn with_file(mut self, file: FileConfig) -> Self {
        self.files.push(file);
        self
    }

    /// CSS variables plus flat and nested JSON under `<dist>/web/`.
    pub fn web(dist: &Path) -> Self {
        Self::new("web", "web", dist.join("web"))
            .with_file(
                FileConfig::new("tokens.css", "css/variables")
                    .with_options(FileOptions::default().with_selector(":root")),
            )
            .with_file(FileConfig::new("tokens.json", "json/flat"))
            .with_file(FileConfig::new("tokens-nested.json", "json/nested"))
    }

    pub fn scss(dist: &Path) -> Self {
        Self::new("scss", "scss", dist.join("scss"))
            .with_file(FileConfig::new("tokens.scss", "scss/variables"))
    }

    pub fn ios(dist: &Path) -> Self {
        Self::new("ios", "ios", dist.join("ios"))
            .with_file(
                FileConfig::new("DesignTokens.swift", "ios-swift/class.swift")
                    .with_options(FileOptions::default().with_class_name("DesignTokens")),
            )
            .with_file(FileConfig::new("DesignTokens.h", "ios/macros"))
    }

    /// Only the XML resource file by default: `android/colors` fails fast
    /// on non-color tokens, so it stays opt-in for color-only trees.
    pub fn android(dist: &Path) -> Self {
        Self::new("android", "android", dist.join("android"))
            .with_file(FileConfig::new("design_tokens.xml", "android/resources"))
    }

    pub fn flutter(dist: &Path) -> Self {
        Self::new("flutter", "flutter", dist.join("flutter")).with_file(
            FileConfig::new("design_tokens.dart", "flutter/class.dart")
                .with_options(FileOptions::default().with_class_name("DesignTokens")),
        )
    }

    /// Flat and nested JSON mirrors under `<dist>/json/`, transformed like
    /// the web platform.
    pub fn json(dist: &Path) -> Self {
        Self::new("json", "web", dist.join("json"))
            .with_file(FileConfig::new("tokens-flat.json", "json/flat"))
            .with_file(FileConfig::new("tokens-nested.json", "json/nested"))
    }

    /// Every named platform constructor, rooted at `dist`.
    pub fn all_defaults(dist: &Path) -> Vec<Self> {
        vec![
            Self::web(dist),
            Self::scss(dist),
            Self::ios(dist),
            Self::android(dist),
            Self::flutter(dist),
            Self::json(dist),
        ]
    }
}

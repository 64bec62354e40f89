//! `prism.toml` manifest parsing and project configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use prism_build::PlatformConfig;
use prism_core::SourceDocument;

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "prism.toml";

/// The top-level manifest for a Prism project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrismManifest {
    pub project: ProjectConfig,
    /// Target platforms, in build order. Empty means the built-in defaults.
    #[serde(default, rename = "platform")]
    pub platforms: Vec<PlatformConfig>,
}

/// Project metadata section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    /// Token source documents, in merge order (later documents win).
    #[serde(default = "default_source")]
    pub source: Vec<PathBuf>,
    /// Root for the default platforms' build paths.
    #[serde(default = "default_build_dir")]
    pub build_dir: PathBuf,
}

fn default_source() -> Vec<PathBuf> {
    vec![PathBuf::from("tokens/tokens.json")]
}

fn default_build_dir() -> PathBuf {
    PathBuf::from("dist")
}

impl PrismManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let manifest: Self =
            toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
        Ok(manifest)
    }

    /// The configured platforms with build paths rooted at `project_dir`,
    /// or the built-in default platforms when the manifest names none.
    pub fn platforms(&self, project_dir: &Path) -> Vec<PlatformConfig> {
        if self.platforms.is_empty() {
            return PlatformConfig::all_defaults(&rooted(project_dir, &self.project.build_dir));
        }
        self.platforms
            .iter()
            .cloned()
            .map(|mut platform| {
                platform.build_path = rooted(project_dir, &platform.build_path);
                platform
            })
            .collect()
    }

    /// Read the configured source documents, in merge order.
    pub fn load_documents(&self, project_dir: &Path) -> Result<Vec<SourceDocument>> {
        let mut documents = Vec::new();
        for source in &self.project.source {
            let path = rooted(project_dir, source);
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            documents.push(SourceDocument::parse(path.display().to_string(), &text)?);
        }
        Ok(documents)
    }

    /// Generate the default manifest for `prism init`.
    pub fn template(name: &str) -> String {
        format!(
            r#"[project]
name = "{name}"
source = ["tokens/tokens.json"]
build_dir = "dist"

[[platform]]
name = "web"
transform_group = "web"
build_path = "dist/web"
files = [
    {{ destination = "tokens.css", format = "css/variables", selector = ":root" }},
    {{ destination = "tokens.json", format = "json/flat" }},
    {{ destination = "tokens-nested.json", format = "json/nested" }},
]

[[platform]]
name = "android"
transform_group = "android"
build_path = "dist/android"
files = [
    {{ destination = "design_tokens.xml", format = "android/resources" }},
]
"#
        )
    }
}

fn rooted(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

//! `prism init` — project scaffolding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::manifest::{PrismManifest, MANIFEST_FILE};

/// Starter token document: primitive values plus semantic aliases that
/// reference them.
const STARTER_TOKENS: &str = r##"{
  "color": {
    "primitive": {
      "blue": {
        "500": { "value": "#3b82f6", "type": "color" }
      },
      "gray": {
        "900": { "value": "#111827", "type": "color" },
        "100": { "value": "#f3f4f6", "type": "color" }
      }
    },
    "semantic": {
      "primary": {
        "value": "{color.primitive.blue.500}",
        "type": "color",
        "comment": "Primary brand color"
      },
      "text": {
        "value": "{color.primitive.gray.900}",
        "type": "color",
        "comment": "Primary text color"
      },
      "background": {
        "value": "{color.primitive.gray.100}",
        "type": "color",
        "comment": "Background color"
      }
    }
  },
  "spacing": {
    "primitive": {
      "4": { "value": "1rem", "type": "dimension" },
      "8": { "value": "2rem", "type": "dimension" }
    },
    "semantic": {
      "md": { "value": "{spacing.primitive.4}", "type": "dimension", "comment": "Medium spacing" },
      "lg": { "value": "{spacing.primitive.8}", "type": "dimension", "comment": "Large spacing" }
    }
  }
}
"##;

/// Create a new Prism project directory relative to cwd.
pub fn run(name: &str) -> Result<()> {
    let project_dir = Path::new(name);
    create_project(project_dir, name)
}

pub(crate) fn create_project(project_dir: &Path, name: &str) -> Result<()> {
    if project_dir.exists() {
        bail!("directory '{}' already exists", project_dir.display());
    }

    fs::create_dir_all(project_dir.join("tokens")).context("creating tokens/ directory")?;

    fs::write(project_dir.join(MANIFEST_FILE), PrismManifest::template(name))
        .with_context(|| format!("writing {MANIFEST_FILE}"))?;

    fs::write(project_dir.join("tokens").join("tokens.json"), STARTER_TOKENS)
        .context("writing tokens/tokens.json")?;

    fs::write(project_dir.join(".gitignore"), "dist/\n").context("writing .gitignore")?;

    println!("Created project '{name}'");
    println!("  {name}/{MANIFEST_FILE}");
    println!("  {name}/tokens/tokens.json");
    println!("  {name}/.gitignore");

    Ok(())
}

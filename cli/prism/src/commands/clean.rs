//! `prism clean` — remove built artifacts.

use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::manifest::PrismManifest;

/// Remove every configured platform's build path.
pub fn run(project_dir: &Path, manifest_path: &Path) -> Result<()> {
    let manifest = PrismManifest::load(manifest_path)?;

    for platform in manifest.platforms(project_dir) {
        if platform.build_path.exists() {
            fs::remove_dir_all(&platform.build_path)?;
            println!("Removed {}", platform.build_path.display());
        } else {
            println!(
                "Already clean: {} does not exist",
                platform.build_path.display()
            );
        }
    }

    Ok(())
}

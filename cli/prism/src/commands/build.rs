//! `prism build` — load sources, run the pipeline, print the report.

use std::path::Path;

use anyhow::{bail, Context, Result};

use prism_build::BuildOrchestrator;
use prism_core::TokenTree;

use crate::manifest::PrismManifest;

/// Run the build described by the manifest, wiring SIGINT to cooperative
/// cancellation.
pub fn run(project_dir: &Path, manifest_path: &Path, platform: Option<&str>) -> Result<()> {
    let orchestrator = BuildOrchestrator::new();

    let cancel = orchestrator.cancel_flag();
    if let Err(e) = ctrlc::set_handler(move || cancel.cancel()) {
        eprintln!("warning: could not install interrupt handler: {e}");
    }

    execute(&orchestrator, project_dir, manifest_path, platform)
}

pub(crate) fn execute(
    orchestrator: &BuildOrchestrator,
    project_dir: &Path,
    manifest_path: &Path,
    platform: Option<&str>,
) -> Result<()> {
    let manifest = PrismManifest::load(manifest_path)?;
    let documents = manifest.load_documents(project_dir)?;
    let tree = TokenTree::load(&documents).context("loading token sources")?;

    let mut platforms = manifest.platforms(project_dir);
    if let Some(name) = platform {
        platforms.retain(|p| p.name == name);
        if platforms.is_empty() {
            bail!(
                "no platform named '{name}' in {}",
                manifest_path.display()
            );
        }
    }

    let report = orchestrator
        .run(&tree, &platforms)
        .context("resolving token references")?;
    println!("{report}");

    if !report.is_success() {
        bail!("build finished with {} error(s)", report.error_count());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::create_project;

    #[test]
    fn build_writes_manifest_platforms() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("demo");
        create_project(&project, "demo").unwrap();

        let orchestrator = BuildOrchestrator::new();
        execute(&orchestrator, &project, &project.join("prism.toml"), None).unwrap();

        let css = std::fs::read_to_string(project.join("dist/web/tokens.css")).unwrap();
        assert!(css.contains("--color-semantic-primary: #3b82f6;"));

        let xml = std::fs::read_to_string(project.join("dist/android/design_tokens.xml")).unwrap();
        assert!(xml.contains("<color name=\"color_semantic_primary\">#ff3b82f6</color>"));
    }

    #[test]
    fn platform_filter_rejects_unknown_names() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("demo");
        create_project(&project, "demo").unwrap();

        let orchestrator = BuildOrchestrator::new();
        let err = execute(
            &orchestrator,
            &project,
            &project.join("prism.toml"),
            Some("tv"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("no platform named 'tv'"));
    }

    #[test]
    fn platform_filter_builds_only_that_platform() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("demo");
        create_project(&project, "demo").unwrap();

        let orchestrator = BuildOrchestrator::new();
        execute(
            &orchestrator,
            &project,
            &project.join("prism.toml"),
            Some("web"),
        )
        .unwrap();

        assert!(project.join("dist/web/tokens.css").exists());
        assert!(!project.join("dist/android/design_tokens.xml").exists());
    }
}

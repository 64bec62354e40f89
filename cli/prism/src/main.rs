//! Prism CLI — build design-token artifacts from one source of truth.

mod commands;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use manifest::MANIFEST_FILE;

#[derive(Parser)]
#[command(name = "prism", version, about = "Design token build pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new Prism project
    Init {
        /// Project name
        name: String,
    },
    /// Build all configured platform artifacts
    Build {
        /// Manifest path (default: prism.toml)
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Build a single platform by name
        #[arg(long)]
        platform: Option<String>,
    },
    /// Remove built artifacts
    Clean {
        /// Manifest path (default: prism.toml)
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Init { name } => commands::init::run(&name),

        Commands::Build { manifest, platform } => {
            let (project_dir, manifest_path) = locate(manifest);
            commands::build::run(&project_dir, &manifest_path, platform.as_deref())
        }

        Commands::Clean { manifest } => {
            let (project_dir, manifest_path) = locate(manifest);
            commands::clean::run(&project_dir, &manifest_path)
        }
    }
}

/// Project directory and manifest path from an optional `--manifest` flag.
fn locate(manifest: Option<PathBuf>) -> (PathBuf, PathBuf) {
    let manifest_path = manifest.unwrap_or_else(|| PathBuf::from(MANIFEST_FILE));
    let project_dir = match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => Path::new(".").to_path_buf(),
    };
    (project_dir, manifest_path)
}

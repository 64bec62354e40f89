//! Build reports aggregating per-platform and per-file outcomes.

use std::fmt;
use std::path::PathBuf;

use crate::error::BuildError;

/// One successfully written artifact.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub destination: PathBuf,
    pub size_bytes: u64,
}

/// The outcome of one platform's build.
#[derive(Debug)]
pub struct PlatformReport {
    pub platform: String,
    pub duration_ms: u64,
    /// Artifacts written, in file-configuration order.
    pub files: Vec<FileOutcome>,
    /// Platform- and file-scoped errors, in the order they occurred.
    pub errors: Vec<BuildError>,
    /// Whether the build was cut short by cancellation.
    pub cancelled: bool,
}

impl PlatformReport {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty() && !self.cancelled
    }
}

/// The aggregate outcome of a whole build.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub platforms: Vec<PlatformReport>,
    pub duration_ms: u64,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.platforms.iter().all(PlatformReport::is_success)
    }

    pub fn error_count(&self) -> usize {
        self.platforms.iter().map(|p| p.errors.len()).sum()
    }

    /// Every collected error with its platform name.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &BuildError)> {
        self.platforms
            .iter()
            .flat_map(|p| p.errors.iter().map(move |e| (p.platform.as_str(), e)))
    }
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Build Report ===")?;
        let failed = self.platforms.iter().filter(|p| !p.is_success()).count();
        writeln!(
            f,
            "Platforms: {} built, {} failed",
            self.platforms.len() - failed,
            failed
        )?;
        writeln!(f, "Duration: {} ms", self.duration_ms)?;

        for platform in &self.platforms {
            writeln!(f)?;
            writeln!(f, "--- {} ---", platform.platform)?;
            if platform.cancelled {
                writeln!(f, "  cancelled")?;
            }
            for file in &platform.files {
                writeln!(
                    f,
                    "  {} ({} bytes)",
                    file.destination.display(),
                    file.size_bytes
                )?;
            }
            for error in &platform.errors {
                writeln!(f, "  error: {error}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_transform::TransformError;

    #[test]
    fn report_display_and_counts() {
        let report = BuildReport {
            platforms: vec![
                PlatformReport {
                    platform: "web".to_string(),
                    duration_ms: 3,
                    files: vec![FileOutcome {
                        destination: PathBuf::from("dist/web/tokens.css"),
                        size_bytes: 120,
                    }],
                    errors: vec![],
                    cancelled: false,
                },
                PlatformReport {
                    platform: "tv".to_string(),
                    duration_ms: 0,
                    files: vec![],
                    errors: vec![BuildError::Transform {
                        platform: "tv".to_string(),
                        source: TransformError::UnknownGroup {
                            name: "tv".to_string(),
                        },
                    }],
                    cancelled: false,
                },
            ],
            duration_ms: 4,
        };

        assert!(!report.is_success());
        assert_eq!(report.error_count(), 1);

        let text = report.to_string();
        assert!(text.contains("=== Build Report ==="));
        assert!(text.contains("Platforms: 1 built, 1 failed"));
        assert!(text.contains("dist/web/tokens.css (120 bytes)"));
        assert!(text.contains("unknown transform group 'tv'"));
    }
}

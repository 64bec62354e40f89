//! Per-platform build: transform once, then render and write each file.

use std::time::Instant;

use prism_core::TokenTree;
use prism_formats::FormatRegistry;
use prism_transform::TransformRegistry;

use crate::cancel::CancelFlag;
use crate::config::PlatformConfig;
use crate::error::BuildError;
use crate::report::{FileOutcome, PlatformReport};
use crate::writer::write_artifact;

/// Builds one platform's artifacts from the shared reference-resolved tree.
///
/// The transform engine runs once per platform; its output is reused across
/// all of the platform's files. File-scoped failures are recorded and the
/// remaining files still build.
pub struct PlatformBuilder<'a> {
    config: &'a PlatformConfig,
    transforms: &'a TransformRegistry,
    formats: &'a FormatRegistry,
}

impl<'a> PlatformBuilder<'a> {
    pub fn new(
        config: &'a PlatformConfig,
        transforms: &'a TransformRegistry,
        formats: &'a FormatRegistry,
    ) -> Self {
        Self {
            config,
            transforms,
            formats,
        }
    }

    pub fn build(&self, resolved_source: &TokenTree, cancel: &CancelFlag) -> PlatformReport {
        let start = Instant::now();
        let mut report = PlatformReport {
            platform: self.config.name.clone(),
            duration_ms: 0,
            files: Vec::new(),
            errors: Vec::new(),
            cancelled: false,
        };

        if cancel.is_cancelled() {
            report.cancelled = true;
            return report;
        }

        let group = match self.transforms.group(&self.config.transform_group) {
            Ok(group) => group,
            Err(source) => {
                report.errors.push(BuildError::Transform {
                    platform: self.config.name.clone(),
                    source,
                });
                report.duration_ms = start.elapsed().as_millis() as u64;
                return report;
            }
        };

        let mut tree = match prism_transform::apply(resolved_source, group, self.transforms) {
            Ok(tree) => tree,
            Err(source) => {
                report.errors.push(BuildError::Transform {
                    platform: self.config.name.clone(),
                    source,
                });
                report.duration_ms = start.elapsed().as_millis() as u64;
                return report;
            }
        };
        tree.platform = self.config.name.clone();

        for file in &self.config.files {
            if cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }

            let destination = self.config.build_path.join(&file.destination);
            let format = match self.formats.get(&file.format) {
                Ok(format) => format,
                Err(source) => {
                    report.errors.push(BuildError::Render {
                        destination: destination.display().to_string(),
                        source,
                    });
                    continue;
                }
            };

            let text = match format.render(&tree, &file.options) {
                Ok(text) => text,
                Err(source) => {
                    report.errors.push(BuildError::Render {
                        destination: destination.display().to_string(),
                        source,
                    });
                    continue;
                }
            };

            match write_artifact(&destination, &text) {
                Ok(size_bytes) => report.files.push(FileOutcome {
                    destination,
                    size_bytes,
                }),
                Err(source) => report.errors.push(BuildError::Write {
                    destination: destination.display().to_string(),
                    source,
                }),
            }
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        report
    }
}

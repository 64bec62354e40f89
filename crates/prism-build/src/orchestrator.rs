//! Top-level build orchestration.
//!
//! Reference resolution runs exactly once and is shared across platforms;
//! platform builds are independent after that and run concurrently on a
//! bounded pool of scoped threads. One failing platform never blocks its
//! siblings — its errors land in the aggregate report instead.

use std::thread;
use std::time::Instant;

use prism_core::TokenTree;
use prism_formats::FormatRegistry;
use prism_resolve::ResolveError;
use prism_transform::TransformRegistry;

use crate::cancel::CancelFlag;
use crate::config::PlatformConfig;
use crate::platform::PlatformBuilder;
use crate::report::BuildReport;

/// Orchestrates a whole build: resolve once, then build every platform.
#[derive(Debug)]
pub struct BuildOrchestrator {
    transforms: TransformRegistry,
    formats: FormatRegistry,
    cancel: CancelFlag,
}

impl BuildOrchestrator {
    /// An orchestrator with the built-in transform and format registries.
    pub fn new() -> Self {
        Self::with_registries(
            TransformRegistry::with_builtins(),
            FormatRegistry::with_builtins(),
        )
    }

    /// An orchestrator with caller-assembled registries (custom transforms
    /// or formats included).
    pub fn with_registries(transforms: TransformRegistry, formats: FormatRegistry) -> Self {
        Self {
            transforms,
            formats,
            cancel: CancelFlag::new(),
        }
    }

    /// A handle that aborts the build when set: in-flight file writes
    /// finish, nothing new starts.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    pub fn transforms_mut(&mut self) -> &mut TransformRegistry {
        &mut self.transforms
    }

    pub fn formats_mut(&mut self) -> &mut FormatRegistry {
        &mut self.formats
    }

    /// Run the full pipeline for every configured platform.
    ///
    /// A resolution error aborts the whole build — no artifact can be
    /// trusted when the reference graph is broken. Everything after
    /// resolution is platform-scoped and collected into the report.
    pub fn run(
        &self,
        tree: &TokenTree,
        platforms: &[PlatformConfig],
    ) -> Result<BuildReport, ResolveError> {
        let start = Instant::now();
        let resolved = prism_resolve::resolve(tree)?;

        let parallelism = thread::available_parallelism().map_or(1, |n| n.get());
        let mut report = BuildReport::default();

        // Platforms build concurrently in waves no wider than the available
        // parallelism; reports keep configuration order.
        for wave in platforms.chunks(parallelism) {
            thread::scope(|scope| {
                let handles: Vec<_> = wave
                    .iter()
                    .map(|config| {
                        let resolved = &resolved;
                        let cancel = &self.cancel;
                        scope.spawn(move || {
                            PlatformBuilder::new(config, &self.transforms, &self.formats)
                                .build(resolved, cancel)
                        })
                    })
                    .collect();
                for handle in handles {
                    report
                        .platforms
                        .push(handle.join().expect("platform build panicked"));
                }
            });
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        Ok(report)
    }
}

impl Default for BuildOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

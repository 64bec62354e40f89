//! Build orchestration for the Prism design-token pipeline.
//!
//! Resolves the canonical tree once, then builds every configured platform —
//! transform group → renderers → atomically written artifacts — collecting
//! per-platform outcomes into an aggregate report. Platform failures are
//! isolated; resolution failures abort the build.

pub mod cancel;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod platform;
pub mod report;
pub mod writer;

pub use cancel::CancelFlag;
pub use config::{FileConfig, PlatformConfig};
pub use error::BuildError;
pub use orchestrator::BuildOrchestrator;
pub use platform::PlatformBuilder;
pub use report::{BuildReport, FileOutcome, PlatformReport};
pub use writer::write_artifact;

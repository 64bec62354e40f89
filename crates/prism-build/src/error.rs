//! Build errors.
//!
//! Resolution errors abort the whole build; transform, render, and write
//! errors are scoped to one platform or file and collected into the report.

use prism_formats::FormatError;
use prism_transform::TransformError;
use thiserror::Error;

/// A platform- or file-scoped build failure.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("platform '{platform}': {source}")]
    Transform {
        platform: String,
        #[source]
        source: TransformError,
    },

    #[error("file '{destination}': {source}")]
    Render {
        destination: String,
        #[source]
        source: FormatError,
    },

    #[error("failed to write '{destination}': {source}")]
    Write {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}

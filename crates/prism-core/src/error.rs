//! Source-loading errors.

use thiserror::Error;

/// Errors raised while loading and merging token source documents.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("document '{document}' is not valid JSON: {message}")]
    Parse { document: String, message: String },

    #[error("document '{document}' must have an object at the root")]
    RootNotObject { document: String },

    #[error("node at '{path}' is both a group and a token")]
    AmbiguousNode { path: String },

    #[error("token at '{path}' is missing required field '{field}'")]
    MissingField { path: String, field: String },

    #[error("invalid token at '{path}': {message}")]
    InvalidLeaf { path: String, message: String },

    #[error("invalid path segment '{segment}' under '{path}'")]
    InvalidSegment { path: String, segment: String },
}

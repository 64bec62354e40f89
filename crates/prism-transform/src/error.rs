//! Transform errors. All are scoped to the platform being built.

use thiserror::Error;

/// Errors raised while resolving or applying transforms.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("unknown transform group '{name}'")]
    UnknownGroup { name: String },

    #[error("unknown transform '{name}'")]
    UnknownTransform { name: String },

    #[error("transform '{transform}' failed on token '{token}': {message}")]
    Value {
        transform: String,
        token: String,
        message: String,
    },
}

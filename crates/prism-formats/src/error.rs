//! Rendering errors. All are scoped to the file being rendered.

use thiserror::Error;

/// Errors raised while rendering a resolved tree into output text.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown format '{name}'")]
    UnknownFormat { name: String },

    #[error("format '{format}' cannot represent token '{token}' of type '{token_type}'")]
    UnsupportedTokenType {
        format: String,
        token: String,
        token_type: String,
    },

    #[error("format '{format}' requires the '{option}' option")]
    MissingOption { format: String, option: String },
}

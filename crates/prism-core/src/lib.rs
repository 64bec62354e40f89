//! Core data model for the Prism design-token pipeline.
//!
//! Defines tokens, token paths, value kinds, the canonical token tree with
//! source-document loading and last-wins merging, and the resolved tree
//! consumed by format renderers.

pub mod error;
pub mod path;
pub mod resolved;
pub mod source;
pub mod token;
pub mod tree;
pub mod value;

pub use error::SourceError;
pub use path::TokenPath;
pub use resolved::{ResolvedToken, ResolvedTree};
pub use source::SourceDocument;
pub use token::{Attributes, Token, TokenType};
pub use tree::{Group, TokenTree, TreeNode};
pub use value::{Color, TokenValue};

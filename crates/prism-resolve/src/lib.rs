//! Reference resolution for the Prism design-token pipeline.
//!
//! Turns a canonical token tree with `{path}` cross-references into a tree
//! of concrete values, failing fast on cycles and dangling references.

pub mod error;
pub mod reference;
pub mod resolver;

pub use error::ResolveError;
pub use reference::{scan, sole_reference, Piece};
pub use resolver::resolve;

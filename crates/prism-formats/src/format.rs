//! The renderer trait.

use std::fmt;

use prism_core::ResolvedTree;

use crate::error::FormatError;
use crate::options::FileOptions;

/// Renders a resolved tree into one output file's text.
///
/// Implementations must be deterministic — identical input yields
/// byte-identical output — and must iterate tokens strictly in the resolved
/// tree's flattened order. Object-safe so formats can be stored in
/// `Box<dyn Format>`.
pub trait Format: fmt::Debug + Send + Sync {
    /// Registry name, e.g. `css/variables`.
    fn name(&self) -> &str;

    fn render(&self, tree: &ResolvedTree, options: &FileOptions) -> Result<String, FormatError>;
}

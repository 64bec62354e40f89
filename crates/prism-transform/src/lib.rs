//! Platform transforms for the Prism design-token pipeline.
//!
//! A transform group is an ordered pipeline of per-token value transforms
//! plus one name transform, selected per platform. Transforms are pure
//! per-token functions and registered explicitly — the registry is built
//! from a table at startup, with `register_*` as the extension point.

pub mod engine;
pub mod error;
pub mod group;
pub mod name;
pub mod registry;
pub mod value;

pub use engine::apply;
pub use error::TransformError;
pub use group::TransformGroup;
pub use name::{CaseTransform, NameTransform};
pub use registry::TransformRegistry;
pub use value::{ColorTransform, SizeSuffix, ValueTransform};

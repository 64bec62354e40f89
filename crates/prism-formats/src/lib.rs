//! Output format renderers for the Prism design-token pipeline.
//!
//! Each format turns one platform's resolved tree plus per-file options
//! into deterministic output text. Formats are registered explicitly;
//! `FormatRegistry::register` is the extension point for custom formats.

pub mod android;
pub mod css;
pub mod error;
pub mod escape;
pub mod flutter;
pub mod format;
pub mod json;
pub mod options;
pub mod registry;
pub mod swift;

pub use android::{AndroidColorsClass, AndroidResources};
pub use css::{CssVariables, ScssVariables};
pub use error::FormatError;
pub use flutter::FlutterClass;
pub use format::Format;
pub use json::{JsonFlat, JsonNested};
pub use options::FileOptions;
pub use registry::FormatRegistry;
pub use swift::{IosMacros, IosSwiftClass};

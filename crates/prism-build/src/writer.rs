//! Atomic artifact writing.
//!
//! Artifacts are written to a temporary file in the destination directory
//! and atomically renamed over the destination on success. A failure at any
//! point discards the temporary file, so a partially written artifact is
//! never observable at the destination path.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Write `contents` to `path` atomically, creating parent directories.
///
/// Returns the number of bytes written.
pub fn write_artifact(path: &Path, contents: &str) -> std::io::Result<u64> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent)?;
            parent
        }
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(contents.len() as u64)
}

//! assemble::writer
//!
//! Artifact persistence.
//!
//! # Contract
//!
//! A write replaces any prior content at the destination in full. Writes go
//! to a temp file in the destination directory followed by a rename, so a
//! later build step never observes a partially-written artifact. Parent
//! directories are created as needed.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use super::BuildError;

/// Persist a document to `path`, replacing any prior content.
///
/// # Errors
///
/// Returns [`BuildError::Write`] if the destination is not writable.
pub fn write_artifact(path: &Path, document: &str) -> Result<(), BuildError> {
    let write_err = |source: std::io::Error| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let temp_path = path.with_extension("tmp");
    {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(write_err)?;
        file.write_all(document.as_bytes()).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;
    }

    fs::rename(&temp_path, path).map_err(write_err)?;
    Ok(())
}

//! Filesystem placement.
//!
//! The placer copies (never moves) a resolved intake file to its derived
//! target, preserving permissions and the modification time. The cleanup
//! sweep in `cleanup` is the one destructive operation in the crate and
//! has its own binary - the organize pipeline never calls it.

mod cleanup;
mod paths;

pub use cleanup::{cleanup_duplicates, CleanupReport};
pub use paths::{derive_target, find_existing, sanitize_title, DeriveRejection};

use std::path::Path;

use anyhow::{Context, Result};

use crate::types::CandidateFile;

/// Copy `file` to `target` unless the target already exists.
///
/// Returns `Ok(true)` on a fresh copy, `Ok(false)` when the target was
/// already present (idempotent re-run). `fs::copy` preserves permissions;
/// the source mtime is carried over separately, best-effort - a file that
/// copied whole but lost its timestamp is still a success.
pub fn place_file(file: &CandidateFile, target: &Path) -> Result<bool> {
    if target.exists() {
        return Ok(false);
    }

    std::fs::copy(&file.path, target).with_context(|| {
        format!(
            "Failed to copy {} -> {}",
            file.path.display(),
            target.display()
        )
    })?;

    if let Ok(handle) = std::fs::File::options().write(true).open(target) {
        let _ = handle.set_modified(file.modified);
    }

    Ok(true)
}

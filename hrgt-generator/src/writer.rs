//! Atomic output writer.
//!
//! ## `write_document`: 3-step protocol
//!
//! 1. Write the rendered document to `<path>.hrgt.tmp`.
//! 2. Rename to the final path (atomic on POSIX).
//! 3. On rename failure, remove the `.tmp` file and leave any existing
//!    document untouched.
//!
//! The parent directory is never created: a missing scope directory is a
//! write failure.

use std::path::{Path, PathBuf};

use crate::error::{write_err, GenerationError};

/// Suffix appended to the output path for the staging file.
pub const TMP_SUFFIX: &str = ".hrgt.tmp";

fn tmp_path_for(path: &Path) -> PathBuf {
    PathBuf::from(format!("{}{TMP_SUFFIX}", path.display()))
}

/// Atomically replace `path` with `content`, byte for byte.
///
/// Returns the number of bytes written.
pub async fn write_document(path: &Path, content: &str) -> Result<usize, GenerationError> {
    write_with_tmp(path, content, &tmp_path_for(path)).await
}

async fn write_with_tmp(path: &Path, content: &str, tmp: &Path) -> Result<usize, GenerationError> {
    tokio::fs::write(tmp, content)
        .await
        .map_err(|e| write_err(tmp, e))?;

    if let Err(e) = tokio::fs::rename(tmp, path).await {
        let _ = tokio::fs::remove_file(tmp).await;
        return Err(write_err(path, e));
    }

    tracing::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(content.len())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

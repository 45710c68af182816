//! Filesystem operations for materializing a template

mod cleanup;
mod copy;

pub use cleanup::{remove_excluded, CleanupReport, EXCLUDED_PATHS};
pub use copy::copy_tree;

use crate::error::Result;
use camino::Utf8Path;

/// Remove a file or directory tree; a missing path is not an error
pub async fn remove_path(path: &Utf8Path) -> Result<()> {
    let metadata = match tokio::fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    let result = if metadata.is_dir() {
        tokio::fs::remove_dir_all(path).await
    } else {
        tokio::fs::remove_file(path).await
    };

    match result {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        other => Ok(other?),
    }
}

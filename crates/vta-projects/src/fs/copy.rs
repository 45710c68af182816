//! Recursive tree copy

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Copy everything under `source` into `destination`
///
/// `destination` is created if needed. Symlinks are recreated rather than
/// followed on unix and copied as files elsewhere. Directory permissions are
/// carried over once their contents are in place. Returns the number of
/// files copied.
pub async fn copy_tree(source: &Utf8Path, destination: &Utf8Path) -> Result<usize> {
    let source = source.to_path_buf();
    let destination = destination.to_path_buf();
    let target = destination.clone();

    tokio::task::spawn_blocking(move || copy_tree_blocking(&source, &destination))
        .await
        .map_err(|e| Error::copy_failed(target.as_str(), e.to_string()))?
}

fn copy_tree_blocking(source: &Utf8PathBuf, destination: &Utf8PathBuf) -> Result<usize> {
    info!("Copying {} -> {}", source, destination);

    if !source.is_dir() {
        return Err(Error::copy_failed(
            destination.as_str(),
            format!("source {} is not a directory", source),
        ));
    }

    std::fs::create_dir_all(destination)?;

    let mut copied = 0;
    let mut dir_permissions = Vec::new();
    for entry in WalkDir::new(source).follow_links(false).min_depth(1) {
        let entry = entry.map_err(|e| {
            Error::copy_failed(destination.as_str(), format!("Failed to walk directory: {}", e))
        })?;

        let rel_path = entry.path().strip_prefix(source).map_err(|e| {
            Error::copy_failed(
                destination.as_str(),
                format!("Failed to compute relative path: {}", e),
            )
        })?;
        let dest_path = destination.as_std_path().join(rel_path);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            std::fs::create_dir_all(&dest_path)?;
            let permissions = entry
                .metadata()
                .map_err(|e| Error::copy_failed(destination.as_str(), e.to_string()))?
                .permissions();
            dir_permissions.push((dest_path, permissions));
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &dest_path)?;
            copied += 1;
        } else {
            if let Some(parent) = dest_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &dest_path)?;
            copied += 1;
        }
    }

    // Deepest first, so a read-only parent never blocks its children
    for (dir, permissions) in dir_permissions.into_iter().rev() {
        std::fs::set_permissions(&dir, permissions)?;
    }

    debug!("Copied {} file(s)", copied);
    Ok(copied)
}

#[cfg(unix)]
fn copy_symlink(link: &Path, dest: &Path) -> Result<()> {
    let target = std::fs::read_link(link)?;
    if dest.symlink_metadata().is_ok() {
        std::fs::remove_file(dest)?;
    }
    std::os::unix::fs::symlink(target, dest)?;
    Ok(())
}

#[cfg(not(unix))]
fn copy_symlink(link: &Path, dest: &Path) -> Result<()> {
    std::fs::copy(link, dest)?;
    Ok(())
}

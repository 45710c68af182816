//! Removal of template-only paths from a freshly copied project

use super::remove_path;
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use futures::future::join_all;
use tracing::{debug, warn};

/// Paths stripped from every copied template, relative to the project root
pub const EXCLUDED_PATHS: &[&str] = &[".git", "changelogs"];

/// Result of removing excluded paths
#[derive(Debug, Default)]
pub struct CleanupReport {
    /// Paths that no longer exist
    pub removed: Vec<Utf8PathBuf>,
    /// Paths that could not be removed, with the reason
    pub failed: Vec<(Utf8PathBuf, Error)>,
}

impl CleanupReport {
    /// Collapse the failures into a single error
    pub fn into_result(self) -> Result<Vec<Utf8PathBuf>> {
        if self.failed.is_empty() {
            Ok(self.removed)
        } else {
            Err(Error::PartialCleanup {
                failed: self
                    .failed
                    .into_iter()
                    .map(|(path, err)| format!("{} ({})", path, err))
                    .collect(),
            })
        }
    }
}

/// Remove `excludes` under `root` concurrently
///
/// Every removal is awaited before returning. Individual failures are
/// collected in the report instead of aborting the others.
pub async fn remove_excluded(root: &Utf8Path, excludes: &[&str]) -> CleanupReport {
    let removals = excludes.iter().map(|rel| {
        let path = root.join(rel);
        async move {
            debug!("Removing excluded path: {}", path);
            let result = remove_path(&path).await;
            (path, result)
        }
    });

    let mut report = CleanupReport::default();
    for (path, result) in join_all(removals).await {
        match result {
            Ok(()) => report.removed.push(path),
            Err(e) => {
                warn!("Could not remove {}: {}", path, e);
                report.failed.push((path, e));
            }
        }
    }
    report
}

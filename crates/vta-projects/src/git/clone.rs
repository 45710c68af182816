//! Template repository cloning

use super::GIT;
use crate::error::{Error, Result};
use crate::runner::{CommandLine, CommandRunner};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

/// Options for cloning the template
#[derive(Debug, Clone, Default)]
pub struct CloneOptions {
    /// Shallow clone with specified depth (0 clones full history)
    pub depth: Option<u32>,
    /// Branch or tag to checkout after clone
    pub branch: Option<String>,
}

/// Clone `url` into `destination`
///
/// `destination` must not exist yet; its parent is created when missing.
///
/// # Errors
/// Returns error if:
/// - Invalid repository URL
/// - Destination already exists
/// - Clone operation fails
pub async fn clone_template(
    runner: &dyn CommandRunner,
    url: &str,
    destination: &Utf8Path,
    options: &CloneOptions,
) -> Result<()> {
    info!("Cloning template: {} -> {}", url, destination);

    if !is_valid_repo_url(url) {
        return Err(Error::invalid_repo_url(url));
    }

    if destination.exists() {
        return Err(Error::fetch_failed(
            url,
            format!("destination {} already exists", destination),
        ));
    }

    let parent = destination
        .parent()
        .ok_or_else(|| Error::fetch_failed(url, "destination has no parent directory"))?;
    tokio::fs::create_dir_all(parent).await?;

    // git runs in `parent`, so a local source must not stay relative
    let source = absolute_source(url).await?;

    let mut args = vec!["clone".to_string()];
    if let Some(depth) = options.depth.filter(|d| *d > 0) {
        args.push("--depth".to_string());
        args.push(depth.to_string());
    }
    if let Some(branch) = &options.branch {
        args.push("--branch".to_string());
        args.push(branch.clone());
    }
    args.push(source);
    args.push(destination.to_string());

    debug!("Running: git clone in {}", parent);
    runner
        .run(&CommandLine::new(GIT, args), parent)
        .await
        .map_err(|e| Error::fetch_failed(url, e.to_string()))?;

    info!("Template cloned successfully");
    Ok(())
}

const REMOTE_SCHEMES: &[&str] = &["https://", "http://", "git@", "ssh://", "file://"];

/// Validate if a string is a usable repository location
///
/// Remote URLs (`https://`, `http://`, `git@`, `ssh://`, `file://`) and
/// existing local directories are accepted.
pub fn is_valid_repo_url(url: &str) -> bool {
    is_remote(url) || Utf8Path::new(url).is_dir()
}

fn is_remote(url: &str) -> bool {
    REMOTE_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}

/// Remote URLs pass through; local directories become canonical paths
async fn absolute_source(url: &str) -> Result<String> {
    if is_remote(url) {
        return Ok(url.to_string());
    }

    let canonical = tokio::fs::canonicalize(url)
        .await
        .map_err(|e| Error::fetch_failed(url, e.to_string()))?;
    let canonical = Utf8PathBuf::from_path_buf(canonical)
        .map_err(|p| Error::fetch_failed(url, format!("non UTF-8 path {}", p.display())))?;
    Ok(canonical.into_string())
}

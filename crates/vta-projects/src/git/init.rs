//! Repository initialization operations

use super::GIT;
use crate::error::{Error, Result};
use crate::runner::{CommandLine, CommandRunner};
use camino::Utf8Path;
use tracing::{debug, info};

/// Options for initializing a git repository
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Initial branch name; git's own default when unset
    pub default_branch: Option<String>,
}

/// Initialize a new git repository
///
/// # Arguments
/// * `runner` - Command runner
/// * `path` - Directory to initialize as a git repository
/// * `options` - Initialization options
///
/// # Errors
/// Returns error if:
/// - Directory doesn't exist
/// - Git init fails
pub async fn init_repository(
    runner: &dyn CommandRunner,
    path: &Utf8Path,
    options: &InitOptions,
) -> Result<()> {
    info!("Initializing git repository at: {}", path);

    if !path.is_dir() {
        return Err(Error::git_operation(format!(
            "cannot initialize {}: directory does not exist",
            path
        )));
    }

    let mut args = vec!["init".to_string()];
    if let Some(branch) = &options.default_branch {
        args.push("--initial-branch".to_string());
        args.push(branch.clone());
    }

    runner
        .run(&CommandLine::new(GIT, args), path)
        .await
        .map_err(|e| Error::git_operation(format!("git init failed: {}", e)))?;

    info!("Repository initialized successfully");
    Ok(())
}

/// Stage everything in `path` and commit it with `message`
pub async fn commit_all(runner: &dyn CommandRunner, path: &Utf8Path, message: &str) -> Result<()> {
    debug!("Creating commit: {}", message);

    runner
        .run(&CommandLine::new(GIT, ["add", "."]), path)
        .await
        .map_err(|e| Error::git_operation(format!("git add failed: {}", e)))?;

    runner
        .run(&CommandLine::new(GIT, ["commit", "-m", message]), path)
        .await
        .map_err(|e| Error::git_operation(format!("git commit failed: {}", e)))?;

    info!("Commit created");
    Ok(())
}

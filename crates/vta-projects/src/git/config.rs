//! Git configuration lookups

use super::GIT;
use crate::runner::{CommandLine, CommandRunner};
use crate::types::GitIdentity;
use camino::Utf8Path;
use tracing::debug;

/// Get a git configuration value
///
/// # Arguments
/// * `runner` - Command runner
/// * `cwd` - Directory the lookup runs in (local config applies there)
/// * `key` - Configuration key (e.g., "user.name")
///
/// # Returns
/// The trimmed value, or None when the key is unset, empty, or git fails
pub async fn get_config_value(runner: &dyn CommandRunner, cwd: &Utf8Path, key: &str) -> Option<String> {
    debug!("Getting git config: {}", key);

    let command = CommandLine::new(GIT, ["config", key]);
    match runner.run(&command, cwd).await {
        Ok(stdout) => {
            let value = stdout.trim();
            (!value.is_empty()).then(|| value.to_string())
        }
        Err(e) => {
            debug!("git config {} unavailable: {}", key, e);
            None
        }
    }
}

/// Read `user.name` and `user.email`; missing values are left empty
pub async fn read_git_identity(runner: &dyn CommandRunner, cwd: &Utf8Path) -> GitIdentity {
    GitIdentity {
        name: get_config_value(runner, cwd, "user.name").await,
        email: get_config_value(runner, cwd, "user.email").await,
    }
}

//! Target directory conflict resolution
//!
//! [`decide`] is the pure part: given whether the target exists and whether
//! overwriting was forced, it says what must happen. [`resolve`] carries the
//! decision out, asking the user through a [`Prompter`] when needed. Nothing
//! destructive happens before the user has answered.

use crate::error::{Error, Result};
use crate::fs::remove_path;
use crate::types::ScaffoldRequest;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

/// What the user may do when the target directory already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictAction {
    /// Delete the existing directory and continue
    Overwrite,
    /// Pick a different project name
    Rename,
    /// Stop without touching anything
    Cancel,
}

impl ConflictAction {
    /// All choices, in the order they are offered
    pub const ALL: [ConflictAction; 3] = [Self::Overwrite, Self::Rename, Self::Cancel];

    /// Human readable label for prompts
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overwrite => "Overwrite",
            Self::Rename => "Choose a new name",
            Self::Cancel => "Cancel",
        }
    }
}

/// Asks the user how to handle an existing target
pub trait Prompter {
    /// Offer the [`ConflictAction`] choices for `target`
    fn select_action(&self, target: &Utf8Path) -> Result<ConflictAction>;

    /// Ask for a new project name
    fn input_name(&self) -> Result<String>;
}

/// Outcome of the pure conflict check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictCheck {
    /// Nothing in the way
    Proceed,
    /// Remove the existing target without asking
    Overwrite,
    /// The user has to choose
    Ask,
}

/// Decide how to treat the target path
pub fn decide(target_exists: bool, force_overwrite: bool) -> ConflictCheck {
    match (target_exists, force_overwrite) {
        (false, _) => ConflictCheck::Proceed,
        (true, true) => ConflictCheck::Overwrite,
        (true, false) => ConflictCheck::Ask,
    }
}

/// How conflict resolution ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Target did not exist
    Proceed,
    /// Existing target was removed
    Overwritten,
    /// The project moved to a new name and path
    Renamed {
        previous: Utf8PathBuf,
        name: String,
    },
}

/// Resolve any conflict at the request's target path
///
/// On [`Resolution::Renamed`] the request has been updated in place.
pub async fn resolve(request: &mut ScaffoldRequest, prompter: &dyn Prompter) -> Result<Resolution> {
    let target = request.target_path().to_path_buf();

    match decide(target.exists(), request.force_overwrite()) {
        ConflictCheck::Proceed => {
            debug!("Target {} is free", target);
            Ok(Resolution::Proceed)
        }
        ConflictCheck::Overwrite => {
            info!("Removing {} (forced overwrite)", target);
            remove_path(&target).await?;
            Ok(Resolution::Overwritten)
        }
        ConflictCheck::Ask => match prompter.select_action(&target)? {
            ConflictAction::Overwrite => {
                info!("Removing {} (overwrite chosen)", target);
                remove_path(&target).await?;
                Ok(Resolution::Overwritten)
            }
            ConflictAction::Rename => {
                let name = prompter.input_name()?;
                let name = validate_new_name(request, &name)?;
                request.rename(name.clone());
                info!("Project renamed to {} at {}", name, request.target_path());
                Ok(Resolution::Renamed {
                    previous: target,
                    name,
                })
            }
            ConflictAction::Cancel => Err(Error::conflict_aborted(target.as_str())),
        },
    }
}

/// Check a replacement name against the current request
///
/// Returns the trimmed name when it points at a fresh directory.
pub fn validate_new_name(request: &ScaffoldRequest, name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::invalid_project_name(name, "Name must not be empty"));
    }

    let candidate = request.target_for(name);
    if candidate == request.target_path() {
        return Err(Error::invalid_project_name(
            name,
            "Name resolves to the existing directory",
        ));
    }
    if candidate.exists() {
        return Err(Error::project_exists(candidate.as_str()));
    }

    Ok(name.to_string())
}

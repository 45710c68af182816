//! Error types for vta-projects

use thiserror::Error;

/// Result type alias using vta-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// The user cancelled when the target directory already existed
    #[error("Project creation cancelled: {path} already exists")]
    ConflictAborted { path: String },

    /// Interactive prompt failed
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// Project already exists
    #[error("Project already exists at: {path}")]
    ProjectExists { path: String },

    /// Invalid project name
    #[error("Invalid project name: '{name}'. {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// Invalid repository URL
    #[error("Invalid repository URL: {url}")]
    InvalidRepoUrl { url: String },

    /// Template download failed
    #[error("Failed to fetch template from {repository}: {message}")]
    FetchFailed { repository: String, message: String },

    /// Copying the template into the target failed
    #[error("Failed to copy template to {path}: {message}")]
    CopyFailed { path: String, message: String },

    /// One or more excluded paths could not be removed
    #[error("Failed to remove {} excluded path(s): {}", .failed.len(), .failed.join(", "))]
    PartialCleanup { failed: Vec<String> },

    /// Manifest file missing from the template
    #[error("Manifest not found: {path}")]
    ManifestMissing { path: String },

    /// Manifest file could not be parsed or is not a JSON object
    #[error("Invalid manifest {path}: {message}")]
    ManifestInvalid { path: String, message: String },

    /// Git operation failed
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    /// Required command not found
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String },

    /// Process execution error
    #[error("Process execution failed: {0}")]
    ProcessExecution(String),

    /// Process did not finish in time
    #[error("Command timed out after {secs}s: {command}")]
    Timeout { command: String, secs: u64 },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error("Core error: {0}")]
    Core(#[from] vta_core::Error),
}

impl Error {
    /// Create a conflict aborted error
    pub fn conflict_aborted(path: impl Into<String>) -> Self {
        Self::ConflictAborted { path: path.into() }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Create a project exists error
    pub fn project_exists(path: impl Into<String>) -> Self {
        Self::ProjectExists { path: path.into() }
    }

    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidProjectName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid repo URL error
    pub fn invalid_repo_url(url: impl Into<String>) -> Self {
        Self::InvalidRepoUrl { url: url.into() }
    }

    /// Create a fetch failed error
    pub fn fetch_failed(repository: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FetchFailed {
            repository: repository.into(),
            message: message.into(),
        }
    }

    /// Create a copy failed error
    pub fn copy_failed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CopyFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a manifest missing error
    pub fn manifest_missing(path: impl Into<String>) -> Self {
        Self::ManifestMissing { path: path.into() }
    }

    /// Create an invalid manifest error
    pub fn manifest_invalid(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ManifestInvalid {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a git operation error
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create a process execution error
    pub fn process_execution(message: impl Into<String>) -> Self {
        Self::ProcessExecution(message.into())
    }

    /// Whether this error came from the user declining to continue
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::ConflictAborted { .. })
    }
}

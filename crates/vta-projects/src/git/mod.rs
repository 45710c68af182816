//! Git operations module
//!
//! Thin wrappers over the `git` executable used while scaffolding:
//! - Shallow-cloning the template repository
//! - Reading the user's identity from git config
//! - Initializing the new repository and creating the first commit
//!
//! Every function takes a [`CommandRunner`](crate::runner::CommandRunner)
//! and an explicit working directory.
//!
//! # Examples
//!
//! ```no_run
//! use vta_projects::git::{init_repository, InitOptions};
//! use vta_projects::runner::ProcessRunner;
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let runner = ProcessRunner::new();
//! init_repository(&runner, Utf8Path::new("/tmp/my-project"), &InitOptions::default()).await?;
//! # Ok(())
//! # }
//! ```

mod clone;
mod config;
mod init;

pub use clone::{clone_template, is_valid_repo_url, CloneOptions};
pub use config::{get_config_value, read_git_identity};
pub use init::{commit_all, init_repository, InitOptions};

pub(crate) const GIT: &str = "git";

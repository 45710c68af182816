//! # vta-projects
//!
//! Project scaffolding library for the vta CLI providing:
//! - Conflict resolution when the target directory already exists
//! - Template download, copy, and cleanup of template-only paths
//! - `package.json` rewriting with git-derived metadata
//! - Git initialization and dependency installation
//!
//! External effects go through small traits ([`runner::CommandRunner`],
//! [`fetch::TemplateFetcher`], [`conflict::Prompter`],
//! [`progress::ProgressReporter`]) so the whole workflow can run against
//! fakes.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use camino::Utf8Path;
//! use vta_core::types::ScaffoldConfig;
//! use vta_projects::conflict::{ConflictAction, Prompter};
//! use vta_projects::fetch::GitTemplateFetcher;
//! use vta_projects::progress::SilentProgress;
//! use vta_projects::runner::ProcessRunner;
//! use vta_projects::{Scaffolder, ScaffoldRequest};
//!
//! struct AlwaysCancel;
//!
//! impl Prompter for AlwaysCancel {
//!     fn select_action(&self, _: &Utf8Path) -> vta_projects::Result<ConflictAction> {
//!         Ok(ConflictAction::Cancel)
//!     }
//!     fn input_name(&self) -> vta_projects::Result<String> {
//!         Ok(String::new())
//!     }
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScaffoldConfig::default();
//! let runner = Arc::new(ProcessRunner::new());
//! let fetcher = GitTemplateFetcher::from_config(runner.clone(), &config.template);
//!
//! let scaffolder = Scaffolder::new(&config, &fetcher, runner.as_ref(), &AlwaysCancel, &SilentProgress);
//! let request = ScaffoldRequest::new("demo", Utf8Path::new("/tmp"), false);
//! let outcome = scaffolder.run(request).await?;
//! println!("{}", outcome.next_steps.join("\n"));
//! # Ok(())
//! # }
//! ```

pub mod conflict;
pub mod error;
pub mod fetch;
pub mod fs;
pub mod git;
pub mod manifest;
pub mod progress;
pub mod runner;
pub mod scaffold;
pub mod types;

pub use error::{Error, Result};
pub use scaffold::{ScaffoldOutcome, ScaffoldStatus, Scaffolder};
pub use types::{GitIdentity, RepoMap, ScaffoldRequest};

//! Scaffold orchestration
//!
//! Runs the create workflow strictly in order:
//!
//! ```text
//! conflict check -> fetch -> copy -> manifest -> git init -> install
//! ```
//!
//! Every step before install is fatal on error. A failed install (or the
//! commit that follows it) degrades the outcome instead: the project exists
//! and the user is told which commands to run by hand.

use crate::conflict::{self, Prompter, Resolution};
use crate::error::{Error, Result};
use crate::fetch::TemplateFetcher;
use crate::fs::{copy_tree, remove_excluded, remove_path, EXCLUDED_PATHS};
use crate::git::{commit_all, init_repository, read_git_identity, InitOptions};
use crate::manifest::{rewrite_manifest, ManifestPatch};
use crate::progress::{ProgressReporter, ProgressStep};
use crate::runner::{CommandLine, CommandRunner};
use crate::types::{RepoMap, ScaffoldRequest};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{info, warn};
use vta_core::types::ScaffoldConfig;

/// How a scaffold run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldStatus {
    /// Every step succeeded
    Completed,
    /// Installing dependencies or committing failed
    Degraded { reason: String },
}

/// Result of a successful (possibly degraded) run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    /// Final project name, after any rename
    pub project_name: String,
    /// Directory the project was created in
    pub target_path: Utf8PathBuf,
    pub status: ScaffoldStatus,
    /// Shell commands to show the user next
    pub next_steps: Vec<String>,
}

impl ScaffoldOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self.status, ScaffoldStatus::Degraded { .. })
    }
}

/// Drives one `create` run against injected collaborators
pub struct Scaffolder<'a> {
    config: &'a ScaffoldConfig,
    fetcher: &'a dyn TemplateFetcher,
    runner: &'a dyn CommandRunner,
    prompter: &'a dyn Prompter,
    progress: &'a dyn ProgressReporter,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        config: &'a ScaffoldConfig,
        fetcher: &'a dyn TemplateFetcher,
        runner: &'a dyn CommandRunner,
        prompter: &'a dyn Prompter,
        progress: &'a dyn ProgressReporter,
    ) -> Self {
        Self {
            config,
            fetcher,
            runner,
            prompter,
            progress,
        }
    }

    /// Run the whole workflow for `request`
    pub async fn run(&self, mut request: ScaffoldRequest) -> Result<ScaffoldOutcome> {
        match conflict::resolve(&mut request, self.prompter).await? {
            Resolution::Proceed => {}
            Resolution::Overwritten => info!("Replaced existing {}", request.target_path()),
            Resolution::Renamed { previous, name } => {
                info!("{} exists, creating {} instead", previous, name)
            }
        }

        let repo = RepoMap::new(self.config, &request)?;

        self.fetch_template(&repo).await?;
        self.copy_template(&repo).await?;
        self.update_manifest(&request, &repo.target_path).await?;
        self.init_git(&repo.target_path).await?;

        let project_name = request.source_name().to_string();
        let outcome = match self.install_and_commit(&repo.target_path).await {
            Ok(()) => ScaffoldOutcome {
                next_steps: vec![
                    format!("cd {}", project_name),
                    self.config.install.start_command.clone(),
                ],
                project_name,
                target_path: repo.target_path,
                status: ScaffoldStatus::Completed,
            },
            Err(e) => {
                warn!("Dependency installation failed: {}", e);
                ScaffoldOutcome {
                    next_steps: vec![
                        format!("cd {}", project_name),
                        self.config.install.command_line(),
                    ],
                    project_name,
                    target_path: repo.target_path,
                    status: ScaffoldStatus::Degraded {
                        reason: e.to_string(),
                    },
                }
            }
        };

        Ok(outcome)
    }

    async fn fetch_template(&self, repo: &RepoMap) -> Result<()> {
        let step = ProgressStep::start(self.progress, "Downloading template...");

        remove_path(&repo.temp_path).await?;
        self.fetcher
            .fetch(&repo.template_ref, &repo.temp_path)
            .await?;

        step.succeed("Template downloaded");
        Ok(())
    }

    async fn copy_template(&self, repo: &RepoMap) -> Result<()> {
        let step = ProgressStep::start(self.progress, "Copying template files...");

        copy_tree(&repo.temp_path, &repo.target_path).await?;

        // All removals finish before the manifest is touched
        let report = remove_excluded(&repo.target_path, EXCLUDED_PATHS).await;
        if let Err(e) = report.into_result() {
            warn!("{}", e);
        }

        if let Err(e) = remove_path(&repo.temp_path).await {
            warn!("Could not remove {}: {}", repo.temp_path, e);
        }

        step.succeed("Template files copied");
        Ok(())
    }

    async fn update_manifest(&self, request: &ScaffoldRequest, target: &Utf8Path) -> Result<()> {
        let step = ProgressStep::start(self.progress, "Updating package.json...");

        let identity = read_git_identity(self.runner, request.base_dir()).await;
        let patch = ManifestPatch::new(request.source_name(), &identity);
        rewrite_manifest(target, &patch).await?;

        step.succeed("package.json updated");
        Ok(())
    }

    async fn init_git(&self, target: &Utf8Path) -> Result<()> {
        let step = ProgressStep::start(self.progress, "Initializing git repository...");

        let options = InitOptions {
            default_branch: self.config.git.default_branch.clone(),
        };
        init_repository(self.runner, target, &options).await?;

        step.succeed("Git repository initialized");
        Ok(())
    }

    async fn install_and_commit(&self, target: &Utf8Path) -> Result<()> {
        let step = ProgressStep::start(
            self.progress,
            "Installing dependencies, this may take a while...",
        );

        let result = self.run_install(target).await;
        match &result {
            Ok(()) => step.succeed("Dependencies installed"),
            Err(_) => step.fail("Dependency installation failed"),
        }
        result
    }

    async fn run_install(&self, target: &Utf8Path) -> Result<()> {
        let install = CommandLine::parse(&self.config.install.command_line())?;
        self.runner
            .run(&install, target)
            .await
            .map_err(|e| Error::process_execution(format!("{}: {}", install, e)))?;

        commit_all(self.runner, target, &self.config.git.initial_commit_message).await
    }
}

//! Template download

use crate::error::Result;
use crate::git::{clone_template, CloneOptions};
use crate::runner::{ensure_command_available, CommandRunner};
use async_trait::async_trait;
use camino::Utf8Path;
use std::sync::Arc;
use vta_core::types::TemplateConfig;

/// Downloads a template repository into a local directory
#[async_trait]
pub trait TemplateFetcher: Send + Sync {
    /// Fetch `repository` into `destination`, which does not exist yet
    async fn fetch(&self, repository: &str, destination: &Utf8Path) -> Result<()>;
}

/// Fetches templates with `git clone`
pub struct GitTemplateFetcher {
    runner: Arc<dyn CommandRunner>,
    options: CloneOptions,
}

impl GitTemplateFetcher {
    pub fn new(runner: Arc<dyn CommandRunner>, options: CloneOptions) -> Self {
        Self { runner, options }
    }

    /// Fetcher configured from the `template` config section
    pub fn from_config(runner: Arc<dyn CommandRunner>, config: &TemplateConfig) -> Self {
        Self::new(
            runner,
            CloneOptions {
                depth: Some(config.depth),
                branch: config.branch.clone(),
            },
        )
    }
}

#[async_trait]
impl TemplateFetcher for GitTemplateFetcher {
    async fn fetch(&self, repository: &str, destination: &Utf8Path) -> Result<()> {
        ensure_command_available(crate::git::GIT)?;
        clone_template(self.runner.as_ref(), repository, destination, &self.options).await
    }
}

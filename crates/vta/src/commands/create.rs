//! Create command

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use camino::Utf8PathBuf;
use tracing::debug;
use vta_core::types::ScaffoldConfig;
use vta_core::utils::current_dir;
use vta_projects::fetch::GitTemplateFetcher;
use vta_projects::runner::ProcessRunner;
use vta_projects::{ScaffoldOutcome, ScaffoldRequest, ScaffoldStatus, Scaffolder};

use crate::cli::CreateArgs;
use crate::interactive::{SpinnerProgress, TerminalPrompter};
use crate::output;

pub async fn run(args: CreateArgs, config_file: Option<Utf8PathBuf>, quiet: bool) -> Result<()> {
    let mut config = super::config::load(config_file)?;
    apply_overrides(&mut config, &args);
    debug!("Resolved configuration: {:?}", config);

    // Every path below is resolved against this directory
    let base_dir = current_dir()?;
    let request = ScaffoldRequest::new(args.name.clone(), &base_dir, args.force);

    let fetch_runner = Arc::new(ProcessRunner::with_timeout(
        config.template.timeout_secs.map(Duration::from_secs),
    ));
    let fetcher = GitTemplateFetcher::from_config(fetch_runner, &config.template);
    let runner = ProcessRunner::new();
    let prompter = TerminalPrompter;
    let progress = SpinnerProgress::new(quiet);

    let scaffolder = Scaffolder::new(&config, &fetcher, &runner, &prompter, &progress);
    let outcome = match scaffolder.run(request).await {
        Ok(outcome) => outcome,
        Err(e) if e.is_cancellation() => {
            output::warning("Operation cancelled");
            return Err(anyhow!(e));
        }
        Err(e) => return Err(anyhow!(e).context(format!("Failed to create {}", args.name))),
    };

    report(&outcome);
    Ok(())
}

/// Command-line flags take precedence over every config layer
fn apply_overrides(config: &mut ScaffoldConfig, args: &CreateArgs) {
    if let Some(template) = &args.template {
        config.template.repository = template.clone();
    }
    if let Some(branch) = &args.branch {
        config.template.branch = Some(branch.clone());
    }
    if let Some(registry) = &args.registry {
        config.install.registry = Some(registry.clone());
    }
}

fn report(outcome: &ScaffoldOutcome) {
    match &outcome.status {
        ScaffoldStatus::Completed => {
            output::success(&format!(
                "Created project {} in {}",
                outcome.project_name, outcome.target_path
            ));
            output::header("Run the following to start the project:");
        }
        ScaffoldStatus::Degraded { reason } => {
            output::warning(&format!(
                "Project {} was created but dependencies could not be installed",
                outcome.project_name
            ));
            output::kv("Reason", reason);
            output::header("Install dependencies manually:");
        }
    }

    for step in &outcome.next_steps {
        output::command(step);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(template: Option<&str>, branch: Option<&str>, registry: Option<&str>) -> CreateArgs {
        CreateArgs {
            name: "demo".to_string(),
            force: false,
            template: template.map(String::from),
            branch: branch.map(String::from),
            registry: registry.map(String::from),
        }
    }

    #[test]
    fn test_no_flags_keep_config() {
        let mut config = ScaffoldConfig::default();
        let before = config.clone();
        apply_overrides(&mut config, &args(None, None, None));
        assert_eq!(config, before);
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = ScaffoldConfig::default();
        apply_overrides(
            &mut config,
            &args(
                Some("https://example.com/t.git"),
                Some("next"),
                Some("https://registry.npmjs.org"),
            ),
        );
        assert_eq!(config.template.repository, "https://example.com/t.git");
        assert_eq!(config.template.branch.as_deref(), Some("next"));
        assert_eq!(
            config.install.command_line(),
            "npm install --registry=https://registry.npmjs.org"
        );
    }
}

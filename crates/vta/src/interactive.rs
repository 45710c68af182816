//! Terminal implementations of the scaffolding prompts and progress hooks

use std::sync::Mutex;

use camino::Utf8Path;
use dialoguer::{Input, Select};
use indicatif::ProgressBar;
use vta_projects::conflict::{ConflictAction, Prompter};
use vta_projects::progress::ProgressReporter;
use vta_projects::{Error, Result};

use crate::output;

/// Asks the user on the terminal how to handle an existing directory
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select_action(&self, target: &Utf8Path) -> Result<ConflictAction> {
        let labels: Vec<&str> = ConflictAction::ALL.iter().map(|a| a.label()).collect();

        let selection = Select::new()
            .with_prompt(format!(
                "Target directory {} already exists. Pick an action",
                target
            ))
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|e| Error::prompt(e.to_string()))?;

        ConflictAction::ALL
            .get(selection)
            .copied()
            .ok_or_else(|| Error::prompt(format!("Invalid selection: {}", selection)))
    }

    fn input_name(&self) -> Result<String> {
        Input::<String>::new()
            .with_prompt("New project name")
            .validate_with(|input: &String| -> std::result::Result<(), &str> {
                if input.trim().is_empty() {
                    Err("Project name cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map(|name| name.trim().to_string())
            .map_err(|e| Error::prompt(e.to_string()))
    }
}

/// Drives an indicatif spinner from scaffold step events
pub struct SpinnerProgress {
    quiet: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    /// A quiet reporter still reports failures
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            bar: Mutex::new(None),
        }
    }

    fn take(&self) -> Option<ProgressBar> {
        self.bar.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl ProgressReporter for SpinnerProgress {
    fn start(&self, message: &str) {
        if self.quiet {
            return;
        }
        if let Some(previous) = self.take() {
            previous.finish_and_clear();
        }
        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(output::spinner(message));
        }
    }

    fn succeed(&self, message: &str) {
        if let Some(pb) = self.take() {
            pb.finish_and_clear();
        }
        if !self.quiet {
            output::success(message);
        }
    }

    fn fail(&self, message: &str) {
        if let Some(pb) = self.take() {
            pb.finish_and_clear();
        }
        output::error(message);
    }

    fn clear(&self) {
        if let Some(pb) = self.take() {
            pb.finish_and_clear();
        }
    }
}

impl Drop for SpinnerProgress {
    fn drop(&mut self) {
        self.clear();
    }
}

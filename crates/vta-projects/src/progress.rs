//! Progress reporting around long-running steps

/// Receives step lifecycle events, typically to drive a spinner
pub trait ProgressReporter: Send + Sync {
    /// A step started
    fn start(&self, message: &str);
    /// The current step finished successfully
    fn succeed(&self, message: &str);
    /// The current step failed
    fn fail(&self, message: &str);
    /// Release the indicator without a final message
    fn clear(&self);
}

/// Reporter that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn start(&self, _message: &str) {}
    fn succeed(&self, _message: &str) {}
    fn fail(&self, _message: &str) {}
    fn clear(&self) {}
}

/// A running step
///
/// Dropping an unfinished step marks it failed, so the indicator is
/// released on every exit path including `?` propagation.
#[must_use = "a step is marked failed as soon as it is dropped"]
pub struct ProgressStep<'a> {
    reporter: &'a dyn ProgressReporter,
    label: String,
    finished: bool,
}

impl<'a> ProgressStep<'a> {
    /// Start a step with `message`
    pub fn start(reporter: &'a dyn ProgressReporter, message: impl Into<String>) -> Self {
        let label = message.into();
        reporter.start(&label);
        Self {
            reporter,
            label,
            finished: false,
        }
    }

    /// Finish the step successfully
    pub fn succeed(mut self, message: &str) {
        self.finished = true;
        self.reporter.succeed(message);
    }

    /// Finish the step as failed
    pub fn fail(mut self, message: &str) {
        self.finished = true;
        self.reporter.fail(message);
    }
}

impl Drop for ProgressStep<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.reporter.fail(&format!("{} failed", self.label.trim_end_matches('.')));
        }
    }
}

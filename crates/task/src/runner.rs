//! The lifecycle controller
//!
//! Drives one task through `NotStarted → (Skipped | Running) → (Succeeded |
//! Failed)` with a single transition path per invocation: no retries, no
//! re-entry. Every transition is mirrored by a telemetry event; the event
//! calls happen in this order even when the proxy is disabled (they simply
//! become no-ops), so side effects outside telemetry keep their ordering.

use std::collections::HashMap;

use nimbus_core::constants::{
    FAILURE_REASON_KEY, FAILURE_SUFFIX, SKIP_SUFFIX, START_SUFFIX, SUCCESS_SUFFIX,
};
use nimbus_core::{DiagnosticsSink, Error, Result, TracingDiagnostics};

use crate::context::TaskContext;
use crate::outcome::LifecycleOutcome;
use crate::task::CloudTask;

/// Executes tasks under the uniform lifecycle and error policy.
pub struct TaskRunner {
    ctx: TaskContext,
    diagnostics: Box<dyn DiagnosticsSink>,
}

impl TaskRunner {
    /// Create a runner logging downgraded failures through `tracing`
    pub fn new(ctx: TaskContext) -> Self {
        Self::with_diagnostics(ctx, Box::new(TracingDiagnostics))
    }

    /// Create a runner with a caller-supplied diagnostics sink
    pub fn with_diagnostics(ctx: TaskContext, diagnostics: Box<dyn DiagnosticsSink>) -> Self {
        Self { ctx, diagnostics }
    }

    pub fn context(&self) -> &TaskContext {
        &self.ctx
    }

    /// Run one task through the lifecycle.
    ///
    /// Returns `Ok` for skip, success, and policy-downgraded failure;
    /// returns `Err(Error::TaskAborted)` only for a failure under
    /// `fails_on_error = true`. A skipped task never raises, regardless of
    /// the failure policy.
    pub fn execute(&self, task: &dyn CloudTask) -> Result<LifecycleOutcome> {
        let name = task.name();
        if task.should_skip(&self.ctx) {
            self.track(name, SKIP_SUFFIX);
            tracing::debug!(task = name, "task skipped");
            return Ok(LifecycleOutcome::Skipped);
        }

        self.track(name, START_SUFFIX);
        match task.run(&self.ctx) {
            Ok(()) => {
                self.track(name, SUCCESS_SUFFIX);
                Ok(LifecycleOutcome::Succeeded)
            }
            Err(error) => self.handle_failure(name, error),
        }
    }

    fn track(&self, name: &str, suffix: &str) {
        self.ctx.telemetry().track_event(&format!("{name}{suffix}"));
    }

    /// Convert a task failure into an event plus either a build abort or a
    /// logged diagnostic, per the configured policy. Never both, never
    /// silently dropped.
    fn handle_failure(&self, name: &str, error: Error) -> Result<LifecycleOutcome> {
        let message = failure_message(&error);
        let mut properties = HashMap::new();
        properties.insert(FAILURE_REASON_KEY.to_string(), message.clone());
        self.ctx
            .telemetry()
            .track_event_with(&format!("{name}{FAILURE_SUFFIX}"), properties);

        if self.ctx.config().fails_on_error {
            Err(Error::task_aborted(message, error))
        } else {
            self.diagnostics.error(&message);
            Ok(LifecycleOutcome::Failed { reason: message })
        }
    }
}

/// Human-readable failure message. An empty Display form is replaced by the
/// debug representation so telemetry and logs never carry an empty payload.
fn failure_message(error: &Error) -> String {
    let message = error.to_string();
    if message.is_empty() {
        format!("{error:?}")
    } else {
        message
    }
}

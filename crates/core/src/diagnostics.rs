//! Diagnostics sink for the non-aborting failure path
//!
//! When `fails_on_error` is false a task failure is recorded here instead of
//! aborting the build. The default implementation forwards to `tracing`;
//! tests substitute a recording fake.

/// Receives task failure messages at error severity.
pub trait DiagnosticsSink: Send + Sync {
    fn error(&self, message: &str);
}

/// Default sink backed by `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn error(&self, message: &str) {
        tracing::error!(target: "nimbus", "{message}");
    }
}

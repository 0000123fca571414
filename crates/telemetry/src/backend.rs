//! Backend port for telemetry emission
//!
//! Implementations deliver events to an analytics service with
//! fire-and-forget semantics. The proxy swallows any error returned here;
//! a backend failure must never affect task execution.

use crate::event::TelemetryEvent;

/// Error returned by a telemetry backend. Observed only for diagnostic
/// logging by the proxy.
#[derive(Debug, thiserror::Error)]
#[error("telemetry backend error: {message}")]
pub struct BackendError {
    pub message: String,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Delivers events to the analytics service.
pub trait TelemetryBackend: Send + Sync {
    fn send(&self, event: &TelemetryEvent) -> Result<(), BackendError>;
}

/// Backend that drops every event, for tests and embedders that opt out of
/// telemetry entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBackend;

impl TelemetryBackend for NoopBackend {
    fn send(&self, _event: &TelemetryEvent) -> Result<(), BackendError> {
        Ok(())
    }
}

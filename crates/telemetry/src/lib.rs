//! Telemetry for nimbus tasks
//!
//! Events are emitted through a [`TelemetryProxy`], which merges a set of
//! default properties (installation id, session id, subscription id) into
//! every event and forwards the result to a pluggable [`TelemetryBackend`].
//! Emission is best-effort: backend failures are swallowed and logged at
//! diagnostic level, never surfaced to the task. A disabled proxy degrades
//! to a no-op sink.

pub mod backend;
pub mod event;
pub mod proxy;

pub use backend::{BackendError, NoopBackend, TelemetryBackend};
pub use event::TelemetryEvent;
pub use proxy::TelemetryProxy;

//! The telemetry proxy
//!
//! Sits between the lifecycle and the backend: owns the default-property
//! set, the enabled/disabled switch, and the best-effort emission policy.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use nimbus_core::constants::{
    INSTALLATION_ID_KEY, SESSION_ID_KEY, SUBSCRIPTION_ID_KEY, TELEMETRY_NOT_ALLOWED_EVENT,
};
use nimbus_core::{IdentityContext, TaskConfig};

use crate::backend::TelemetryBackend;
use crate::event::TelemetryEvent;

/// Event sink with an enable/disable switch and a set of default properties
/// merged into every event.
pub struct TelemetryProxy {
    backend: Arc<dyn TelemetryBackend>,
    enabled: AtomicBool,
    defaults: Mutex<HashMap<String, String>>,
}

impl TelemetryProxy {
    /// Create an enabled proxy with an empty default-property set
    pub fn new(backend: Arc<dyn TelemetryBackend>) -> Self {
        Self {
            backend,
            enabled: AtomicBool::new(true),
            defaults: Mutex::new(HashMap::new()),
        }
    }

    /// Create a proxy preloaded with the identity and subscription defaults.
    ///
    /// When the configuration disallows telemetry, a single
    /// "telemetry not allowed" marker event is emitted and the proxy is then
    /// disabled. The marker is the last event a disabled proxy ever sends.
    pub fn from_config(
        config: &TaskConfig,
        identity: &IdentityContext,
        backend: Arc<dyn TelemetryBackend>,
    ) -> Self {
        let proxy = Self::new(backend);
        proxy.add_default_property(INSTALLATION_ID_KEY, identity.installation_id());
        proxy.add_default_property(SESSION_ID_KEY, identity.session_id());
        proxy.add_default_property(SUBSCRIPTION_ID_KEY, &config.subscription_id);
        if !config.allow_telemetry {
            proxy.track_event(TELEMETRY_NOT_ALLOWED_EVENT);
            proxy.disable();
        }
        proxy
    }

    /// Emit an event with no event-specific properties
    pub fn track_event(&self, name: &str) {
        self.track_event_with(name, HashMap::new());
    }

    /// Emit an event, merging the default properties with the supplied ones.
    /// Event-specific properties win key collisions. A no-op when disabled;
    /// backend failures are swallowed.
    pub fn track_event_with(&self, name: &str, properties: HashMap<String, String>) {
        if !self.enabled.load(Ordering::SeqCst) {
            return;
        }
        let mut merged = self.defaults.lock().clone();
        merged.extend(properties);
        let event = TelemetryEvent::with_properties(name, merged);
        if let Err(error) = self.backend.send(&event) {
            tracing::debug!(event = name, %error, "telemetry emission failed; ignoring");
        }
    }

    /// Insert or overwrite a default property for all subsequent events.
    /// Already-emitted events are unaffected. Still updates state when the
    /// proxy is disabled.
    pub fn add_default_property(&self, key: impl Into<String>, value: impl Into<String>) {
        self.defaults.lock().insert(key.into(), value.into());
    }

    /// Idempotently switch into no-op mode for all future calls
    pub fn disable(&self) {
        self.enabled.store(false, Ordering::SeqCst);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for TelemetryProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryProxy")
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}

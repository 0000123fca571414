//! Per-task execution context
//!
//! Owns the three lazy singletons of one task-owning instance: the identity
//! context (built eagerly at construction), the telemetry proxy (built on
//! first access), and the client cache (authenticates on first `client()`
//! call). First caller wins; nothing here is shared across task instances.

use once_cell::sync::OnceCell;
use std::sync::Arc;

use nimbus_auth::{AuthProvider, ClientCache, CloudClient};
use nimbus_core::{IdentityContext, Result, TaskConfig};
use nimbus_telemetry::{TelemetryBackend, TelemetryProxy};

use crate::user_agent::user_agent;

/// Everything a task body may need while it runs.
pub struct TaskContext {
    config: TaskConfig,
    identity: IdentityContext,
    backend: Arc<dyn TelemetryBackend>,
    telemetry: OnceCell<Arc<TelemetryProxy>>,
    client_cache: ClientCache,
}

impl TaskContext {
    /// Create a context with a fresh identity
    pub fn new(
        config: TaskConfig,
        provider: Box<dyn AuthProvider>,
        backend: Arc<dyn TelemetryBackend>,
    ) -> Self {
        Self::with_identity(config, provider, backend, IdentityContext::new())
    }

    /// Create a context with a caller-supplied identity, the seam used by
    /// tests that need fixed session/installation values
    pub fn with_identity(
        config: TaskConfig,
        provider: Box<dyn AuthProvider>,
        backend: Arc<dyn TelemetryBackend>,
        identity: IdentityContext,
    ) -> Self {
        let client_cache = ClientCache::new(provider, config.auth.clone());
        Self {
            config,
            identity,
            backend,
            telemetry: OnceCell::new(),
            client_cache,
        }
    }

    pub fn config(&self) -> &TaskConfig {
        &self.config
    }

    pub fn identity(&self) -> &IdentityContext {
        &self.identity
    }

    /// The telemetry proxy, constructed on first access.
    ///
    /// Construction preloads the identity and subscription defaults and,
    /// when the configuration disallows telemetry, sends the single
    /// not-allowed marker before disabling the proxy.
    pub fn telemetry(&self) -> &Arc<TelemetryProxy> {
        self.telemetry.get_or_init(|| {
            Arc::new(TelemetryProxy::from_config(
                &self.config,
                &self.identity,
                Arc::clone(&self.backend),
            ))
        })
    }

    /// The authenticated cloud client, obtained on first use and memoized.
    /// A failed attempt is not memoized; see [`ClientCache::get`].
    pub fn client(&self) -> Result<Arc<CloudClient>> {
        self.client_cache.get(self.telemetry())
    }

    /// Identification string for collaborators talking to remote services
    pub fn user_agent(&self, name: &str, version: &str) -> String {
        user_agent(name, version, &self.identity)
    }
}

impl std::fmt::Debug for TaskContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskContext")
            .field("config", &self.config)
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

//! Per-process identity used to tag telemetry
//!
//! Two identifiers are carried with every telemetry event: a session id,
//! generated fresh for each process invocation, and an installation id,
//! derived from host identity so it stays stable across runs on the same
//! machine. Both are owned by an explicitly constructed context rather than
//! ambient globals so tests can substitute fixed values.

use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::constants::INSTALLATION_ID_FALLBACK;

/// Session and installation identifiers for one task-owning instance.
#[derive(Debug, Clone)]
pub struct IdentityContext {
    session_id: String,
    installation_id: String,
}

impl IdentityContext {
    /// Create a context with a fresh session id and the host-derived
    /// installation id.
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            installation_id: derive_installation_id(),
        }
    }

    /// Create a context with fixed values, for tests and embedders that
    /// manage identity themselves.
    pub fn with_values(
        session_id: impl Into<String>,
        installation_id: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            installation_id: installation_id.into(),
        }
    }

    /// Unique per process invocation
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Stable across runs on the same host, best-effort
    pub fn installation_id(&self) -> &str {
        &self.installation_id
    }
}

impl Default for IdentityContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash the host identity into a stable, anonymous installation id.
///
/// Must never fail the caller: when the hostname cannot be read a fixed
/// placeholder is returned instead, since telemetry tagging is not allowed
/// to block task execution.
fn derive_installation_id() -> String {
    let host = match hostname::get() {
        Ok(host) => host.to_string_lossy().into_owned(),
        Err(error) => {
            tracing::debug!(%error, "could not read hostname; using fallback installation id");
            return INSTALLATION_ID_FALLBACK.to_string();
        }
    };
    let mut hasher = Sha256::new();
    hasher.update(host.as_bytes());
    hasher.update(b":");
    hasher.update(whoami::username().as_bytes());
    hex::encode(hasher.finalize())
}

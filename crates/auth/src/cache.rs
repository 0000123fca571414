//! Memoizing cache around the authentication provider
//!
//! Holds the "not yet attempted" and "successfully cached" states as a
//! single optional slot. There is deliberately no "failed" state: a `None`
//! from the provider leaves the slot empty so the next call retries.

use parking_lot::Mutex;
use std::sync::Arc;

use nimbus_core::constants::{INIT_FAILURE_EVENT, SUBSCRIPTION_ID_KEY};
use nimbus_core::{AuthSetting, Error, Result};
use nimbus_telemetry::TelemetryProxy;

use crate::client::CloudClient;
use crate::provider::AuthProvider;

/// Lazily obtains and memoizes one authenticated [`CloudClient`].
pub struct ClientCache {
    provider: Box<dyn AuthProvider>,
    auth: AuthSetting,
    slot: Mutex<Option<Arc<CloudClient>>>,
}

impl ClientCache {
    pub fn new(provider: Box<dyn AuthProvider>, auth: AuthSetting) -> Self {
        Self {
            provider,
            auth,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached client, authenticating on first use.
    ///
    /// On the first success the resolved subscription id is registered as a
    /// telemetry default property so subsequent events attribute to the
    /// correct subscription. On failure an initialization-failure event is
    /// emitted before the error is returned; the slot stays empty and the
    /// next call re-attempts authentication.
    pub fn get(&self, telemetry: &TelemetryProxy) -> Result<Arc<CloudClient>> {
        let mut slot = self.slot.lock();
        if let Some(client) = slot.as_ref() {
            return Ok(Arc::clone(client));
        }
        match self.provider.authenticate(&self.auth) {
            Some(client) => {
                telemetry.add_default_property(SUBSCRIPTION_ID_KEY, client.subscription_id());
                tracing::debug!(
                    subscription_id = client.subscription_id(),
                    "authenticated cloud client"
                );
                let client = Arc::new(client);
                *slot = Some(Arc::clone(&client));
                Ok(client)
            }
            None => {
                telemetry.track_event(INIT_FAILURE_EVENT);
                Err(Error::auth_failure())
            }
        }
    }

    /// Whether a client has been obtained and cached
    pub fn is_cached(&self) -> bool {
        self.slot.lock().is_some()
    }
}

impl std::fmt::Debug for ClientCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCache")
            .field("auth", &self.auth)
            .field("cached", &self.is_cached())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_telemetry::{BackendError, TelemetryBackend, TelemetryEvent};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct RecordingBackend {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl TelemetryBackend for RecordingBackend {
        fn send(&self, event: &TelemetryEvent) -> std::result::Result<(), BackendError> {
            self.events.lock().push(event.clone());
            Ok(())
        }
    }

    /// Fails the first `failures` authentication attempts, then succeeds.
    /// The call counter is shared so tests can observe it after boxing.
    struct FlakyProvider {
        failures: usize,
        calls: Arc<AtomicUsize>,
    }

    impl FlakyProvider {
        fn new(failures: usize) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    failures,
                    calls: Arc::clone(&calls),
                },
                calls,
            )
        }
    }

    impl AuthProvider for FlakyProvider {
        fn authenticate(&self, _auth: &AuthSetting) -> Option<CloudClient> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                None
            } else {
                Some(CloudClient::new("sub-resolved"))
            }
        }
    }

    fn proxy_with_backend() -> (Arc<RecordingBackend>, TelemetryProxy) {
        let backend = Arc::new(RecordingBackend::default());
        let proxy = TelemetryProxy::new(backend.clone());
        (backend, proxy)
    }

    #[test]
    fn test_failure_is_not_cached_and_retry_succeeds() {
        let (backend, proxy) = proxy_with_backend();
        let (provider, _calls) = FlakyProvider::new(1);
        let cache = ClientCache::new(Box::new(provider), AuthSetting::None);

        let first = cache.get(&proxy);
        assert!(matches!(first, Err(Error::AuthFailure { .. })));
        assert!(!cache.is_cached());

        let second = cache.get(&proxy).expect("retry should succeed");
        assert_eq!(second.subscription_id(), "sub-resolved");
        assert!(cache.is_cached());

        // Exactly one initialization-failure event, from the first call.
        let failures: Vec<_> = backend
            .events
            .lock()
            .iter()
            .filter(|e| e.name == INIT_FAILURE_EVENT)
            .cloned()
            .collect();
        assert_eq!(failures.len(), 1);
    }

    #[test]
    fn test_success_is_memoized_without_reauthentication() {
        let (_backend, proxy) = proxy_with_backend();
        let (provider, calls) = FlakyProvider::new(0);
        let cache = ClientCache::new(Box::new(provider), AuthSetting::None);

        let first = cache.get(&proxy).unwrap();
        let second = cache.get(&proxy).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_provider_called_once_per_uncached_get() {
        let (_backend, proxy) = proxy_with_backend();
        let (provider, calls) = FlakyProvider::new(1);
        let cache = ClientCache::new(Box::new(provider), AuthSetting::None);

        assert!(cache.get(&proxy).is_err());
        assert!(cache.get(&proxy).is_ok());
        assert!(cache.get(&proxy).is_ok());

        // One failed attempt, one successful attempt; the third get hits the
        // cache and never reaches the provider.
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_resolved_subscription_becomes_default_property() {
        let (backend, proxy) = proxy_with_backend();
        let (provider, _calls) = FlakyProvider::new(0);
        let cache = ClientCache::new(Box::new(provider), AuthSetting::None);

        cache.get(&proxy).unwrap();
        proxy.track_event("after.auth");

        let events = backend.events.lock().clone();
        let tagged = events.iter().find(|e| e.name == "after.auth").unwrap();
        assert_eq!(
            tagged.properties.get(SUBSCRIPTION_ID_KEY),
            Some(&"sub-resolved".to_string())
        );
    }
}

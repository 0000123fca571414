/// Opaque handle to the cloud control-plane.
///
/// Owned exclusively by the [`ClientCache`](crate::ClientCache); created at
/// most once per cache and never explicitly destroyed. The skeleton only
/// reads the resolved subscription id from it; everything else on the handle
/// belongs to the concrete tasks.
#[derive(Debug, Clone)]
pub struct CloudClient {
    subscription_id: String,
}

impl CloudClient {
    pub fn new(subscription_id: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
        }
    }

    /// Subscription the client actually authenticated against. May differ
    /// from the configured one when that was left unset.
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }
}

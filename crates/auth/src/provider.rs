use nimbus_core::AuthSetting;

use crate::client::CloudClient;

/// Resolves credentials into an authenticated client.
///
/// Returning `None` means no client could be produced (missing or invalid
/// credentials); the cache converts that into the fixed
/// [`AuthFailure`](nimbus_core::Error::AuthFailure) error. The setting is
/// passed through unexamined by the skeleton.
pub trait AuthProvider: Send + Sync {
    fn authenticate(&self, auth: &AuthSetting) -> Option<CloudClient>;
}

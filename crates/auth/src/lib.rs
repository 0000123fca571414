//! Authenticated cloud-client acquisition for nimbus
//!
//! The [`ClientCache`] obtains a single authenticated [`CloudClient`] from a
//! pluggable [`AuthProvider`] on first use and memoizes it for the rest of
//! the cache's lifetime. A failed attempt is never cached: every subsequent
//! call re-attempts authentication, so a run can recover after the user
//! fixes their environment.
//!
//! Credential-file parsing and credential validation live behind the
//! [`AuthProvider`] port and are out of scope for this crate.

pub mod cache;
pub mod client;
pub mod provider;

pub use cache::ClientCache;
pub use client::CloudClient;
pub use provider::AuthProvider;

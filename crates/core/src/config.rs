//! Configuration recognized by the task lifecycle
//!
//! `TaskConfig` is the immutable view of build configuration this skeleton
//! consumes. It is supplied once at task construction and never mutated
//! during execution. How the surrounding build tool parses its configuration
//! files into this struct is out of scope here; serde derives are provided so
//! any format with a serde deserializer plugs in directly.

use serde::Deserialize;
use std::path::PathBuf;

/// Immutable configuration for a single lifecycle-managed task.
///
/// Field names follow the conventional camelCase configuration surface
/// (`allowTelemetry`, `failsOnError`, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskConfig {
    /// Authentication setting, passed through unexamined to the provider
    #[serde(default)]
    pub auth: AuthSetting,

    /// Preferred subscription id. May be left empty; the resolved client's
    /// subscription supersedes it for telemetry attribution.
    #[serde(default)]
    pub subscription_id: String,

    /// Whether telemetry may be emitted at all
    #[serde(default = "default_true")]
    pub allow_telemetry: bool,

    /// Whether a task failure aborts the enclosing build
    #[serde(default = "default_true")]
    pub fails_on_error: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            auth: AuthSetting::default(),
            subscription_id: String::new(),
            allow_telemetry: true,
            fails_on_error: true,
        }
    }
}

/// Opaque identification of credentials, resolved by the authentication
/// provider. The skeleton never inspects the contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthSetting {
    /// No explicit setting; the provider decides (environment, defaults)
    #[default]
    None,
    /// Reference to a named credential held by the surrounding build tool
    CredentialReference(String),
    /// Path to a credential file
    CredentialFile(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TaskConfig::default();
        assert!(config.allow_telemetry);
        assert!(config.fails_on_error);
        assert!(config.subscription_id.is_empty());
        assert_eq!(config.auth, AuthSetting::None);
    }

    #[test]
    fn test_deserialize_empty_object_uses_defaults() {
        let config: TaskConfig = serde_json::from_str("{}").unwrap();
        assert!(config.allow_telemetry);
        assert!(config.fails_on_error);
    }

    #[test]
    fn test_deserialize_overrides() {
        let config: TaskConfig = serde_json::from_str(
            r#"{
                "allowTelemetry": false,
                "failsOnError": false,
                "subscriptionId": "sub-123",
                "auth": { "credentialReference": "ci-credentials" }
            }"#,
        )
        .unwrap();
        assert!(!config.allow_telemetry);
        assert!(!config.fails_on_error);
        assert_eq!(config.subscription_id, "sub-123");
        assert_eq!(
            config.auth,
            AuthSetting::CredentialReference("ci-credentials".to_string())
        );
    }

    #[test]
    fn test_deserialize_credential_file() {
        let config: TaskConfig =
            serde_json::from_str(r#"{ "auth": { "credentialFile": "/etc/cloud/creds.json" } }"#)
                .unwrap();
        assert_eq!(
            config.auth,
            AuthSetting::CredentialFile(PathBuf::from("/etc/cloud/creds.json"))
        );
    }
}

//! Outbound identification string
//!
//! Collaborators that talk to remote services identify the process with a
//! user-agent-like string composed of the task name, task version, and the
//! two identity-context values. The key names are the shared telemetry
//! property-key constants so logs and telemetry correlate.

use nimbus_core::constants::{INSTALLATION_ID_KEY, SESSION_ID_KEY};
use nimbus_core::IdentityContext;

/// Build the identification string for one task.
pub fn user_agent(name: &str, version: &str, identity: &IdentityContext) -> String {
    format!(
        "{name}/{version} {INSTALLATION_ID_KEY}:{installation} {SESSION_ID_KEY}:{session}",
        installation = identity.installation_id(),
        session = identity.session_id(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_format() {
        let identity = IdentityContext::with_values("session-1", "install-1");
        assert_eq!(
            user_agent("deploy-task", "1.2.0", &identity),
            "deploy-task/1.2.0 installationId:install-1 sessionId:session-1"
        );
    }
}

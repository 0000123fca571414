/// Constants shared across the nimbus crates
// Telemetry default-property keys. Shared between the telemetry proxy and
// the user-agent builder so both sides agree on the wire names.
pub const INSTALLATION_ID_KEY: &str = "installationId";
pub const SESSION_ID_KEY: &str = "sessionId";
pub const SUBSCRIPTION_ID_KEY: &str = "subscriptionId";

// Event property carrying the normalized failure message.
pub const FAILURE_REASON_KEY: &str = "failureReason";

// Lifecycle event suffixes, appended to the task name.
pub const SKIP_SUFFIX: &str = ".skip";
pub const START_SUFFIX: &str = ".start";
pub const SUCCESS_SUFFIX: &str = ".success";
pub const FAILURE_SUFFIX: &str = ".failure";

// Events emitted outside the per-task namespace.
pub const INIT_FAILURE_EVENT: &str = "init.failure";
pub const TELEMETRY_NOT_ALLOWED_EVENT: &str = "telemetry.not.allowed";

// Fixed user-facing message for authentication failures. Kept stable so
// telemetry aggregation groups all auth failures under one message; the
// underlying cause rides on the error's source chain instead.
pub const AUTH_INIT_FAILED: &str =
    "failed to authenticate with the cloud service: check the authentication configuration";

// Installation-id placeholder used when host identity cannot be read.
pub const INSTALLATION_ID_FALLBACK: &str = "unknown-host";

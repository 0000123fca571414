use nimbus_core::Result;

use crate::context::TaskContext;

/// One unit of build-time work run under the lifecycle skeleton.
///
/// Implementations supply only their own logic; sequencing, telemetry, and
/// the error policy belong to the [`TaskRunner`](crate::TaskRunner).
pub trait CloudTask {
    /// Identifying name, used to namespace the lifecycle telemetry events
    /// (`<name>.skip`, `<name>.start`, `<name>.success`, `<name>.failure`)
    fn name(&self) -> &str;

    /// Task version, used by the user-agent builder
    fn version(&self) -> &str;

    /// Whether this invocation should be skipped entirely. Defaults to
    /// "never skip".
    fn should_skip(&self, ctx: &TaskContext) -> bool {
        let _ = ctx;
        false
    }

    /// The task body, invoked exactly once per lifecycle run
    fn run(&self, ctx: &TaskContext) -> Result<()>;
}

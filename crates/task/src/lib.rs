//! Task lifecycle execution for nimbus
//!
//! This crate is the entry point of the skeleton: a [`TaskRunner`] drives a
//! [`CloudTask`] through the uniform skip/start/run/succeed/fail lifecycle,
//! emits the per-task telemetry events, and applies the configured error
//! policy. The per-task singletons (identity, telemetry proxy, client cache)
//! live on the [`TaskContext`] handed to the task body.

pub mod context;
pub mod outcome;
pub mod runner;
pub mod task;
pub mod user_agent;

pub use context::TaskContext;
pub use outcome::LifecycleOutcome;
pub use runner::TaskRunner;
pub use task::CloudTask;
pub use user_agent::user_agent;

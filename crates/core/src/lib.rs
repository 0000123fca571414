//! Core domain types, errors, and constants for the `nimbus` task skeleton.
//!
//! This crate establishes the foundational data structures and error handling
//! mechanisms used by every other nimbus crate.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias,
//!   centralizing all possible failure modes for predictable error handling.
//! - **`config`**: The immutable `TaskConfig` recognized by the lifecycle and
//!   the opaque `AuthSetting` passed through to the authentication provider.
//! - **`identity`**: Per-process session and installation identifiers used to
//!   tag telemetry.
//! - **`constants`**: Shared telemetry property keys, event names, and the
//!   stable user-facing authentication failure message.
//! - **`diagnostics`**: The sink that receives task failures when the error
//!   policy downgrades them to log messages.

pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod errors;
pub mod identity;

pub use self::{
    config::{AuthSetting, TaskConfig},
    constants::*,
    diagnostics::{DiagnosticsSink, TracingDiagnostics},
    errors::{Error, Result},
    identity::IdentityContext,
};

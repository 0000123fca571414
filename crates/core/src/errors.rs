/// Result type alias for nimbus operations
pub type Result<T> = std::result::Result<T, Error>;

type Source = Box<dyn std::error::Error + Send + Sync>;

/// Core error type for nimbus operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The authentication provider could not produce a client. The Display
    /// message is intentionally fixed; diagnostics live on the source chain.
    #[error("{}", crate::constants::AUTH_INIT_FAILED)]
    AuthFailure {
        #[source]
        source: Option<Source>,
    },

    /// A task failure promoted to a build abort under `fails_on_error = true`
    #[error("{message}")]
    TaskAborted {
        message: String,
        #[source]
        source: Option<Source>,
    },

    /// A failure raised by task-specific logic
    #[error("{message}")]
    Task { message: String },
}

// Helper methods for creating errors with context
impl Error {
    /// Create an authentication failure with no recorded cause
    #[must_use]
    pub fn auth_failure() -> Self {
        Error::AuthFailure { source: None }
    }

    /// Create an authentication failure carrying the underlying cause
    #[must_use]
    pub fn auth_failure_with_source(source: impl Into<Source>) -> Self {
        Error::AuthFailure {
            source: Some(source.into()),
        }
    }

    /// Create a task failure
    #[must_use]
    pub fn task(message: impl Into<String>) -> Self {
        Error::Task {
            message: message.into(),
        }
    }

    /// Create a build-aborting task failure wrapping the original error
    #[must_use]
    pub fn task_aborted(message: impl Into<String>, source: impl Into<Source>) -> Self {
        Error::TaskAborted {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Terminal state of one lifecycle run.
///
/// `Failed` is returned (rather than raised) only under the
/// log-and-continue error policy; with `fails_on_error` set the run aborts
/// with [`Error::TaskAborted`](nimbus_core::Error::TaskAborted) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleOutcome {
    /// The skip predicate was true; the task body never ran
    Skipped,
    /// The task body completed without raising
    Succeeded,
    /// The task body failed and the policy downgraded it to a diagnostic
    Failed { reason: String },
}

impl LifecycleOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LifecycleOutcome::Succeeded)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, LifecycleOutcome::Skipped)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, LifecycleOutcome::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_match_their_variant_only() {
        let failed = LifecycleOutcome::Failed {
            reason: "quota exceeded".to_string(),
        };

        assert!(LifecycleOutcome::Succeeded.is_success());
        assert!(!LifecycleOutcome::Succeeded.is_skipped());
        assert!(!LifecycleOutcome::Succeeded.is_failure());

        assert!(LifecycleOutcome::Skipped.is_skipped());
        assert!(!LifecycleOutcome::Skipped.is_success());
        assert!(!LifecycleOutcome::Skipped.is_failure());

        assert!(failed.is_failure());
        assert!(!failed.is_success());
        assert!(!failed.is_skipped());
    }
}

//! Tri-state enablement resolution.
//!
//! Two layers can carry a `Disabled` flag: the job descriptor and the
//! system-wide overrides document. Each is an `Option<bool>` (absent, true,
//! false) — never a sentinel. Once an override entry exists for a label it
//! fully shadows the descriptor: only an explicit `Disabled = false` in the
//! entry enables the job; a true flag or a missing flag both disable it.

use launchkit_core::OverrideState;

/// Whether a job is enabled, given its descriptor flag and override state.
///
/// Callers on pre-override systems pass [`OverrideState::Absent`] so the
/// descriptor governs alone.
pub fn resolve(job_disabled: Option<bool>, override_state: OverrideState) -> bool {
    match override_state {
        OverrideState::Absent => !job_disabled.unwrap_or(false),
        OverrideState::Present { disabled } => disabled == Some(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // descriptor Disabled / override state / expected
    #[rstest]
    #[case(None, OverrideState::Absent, true)]
    #[case(Some(true), OverrideState::Absent, false)]
    #[case(Some(false), OverrideState::Absent, true)]
    #[case(Some(true), OverrideState::Present { disabled: Some(false) }, true)]
    #[case(Some(true), OverrideState::Present { disabled: Some(true) }, false)]
    #[case(Some(false), OverrideState::Present { disabled: None }, false)]
    #[case(None, OverrideState::Present { disabled: Some(true) }, false)]
    fn resolution_table(
        #[case] job_disabled: Option<bool>,
        #[case] override_state: OverrideState,
        #[case] enabled: bool,
    ) {
        assert_eq!(resolve(job_disabled, override_state), enabled);
    }
}

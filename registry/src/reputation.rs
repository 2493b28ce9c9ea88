//! Reputation adjustment rules.

use serde::{Deserialize, Serialize};

use crate::guardian::Guardian;
use warden_types::RecoveryParams;

/// How a guardian's participation in a request resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReputationOutcome {
    /// The request executed; every voter on it is treated as correct.
    SuccessfulParticipant,
    /// The guardian supported a request that expired without quorum.
    FailedSupport,
}

/// Apply a settlement outcome to a guardian's reputation and audit counters.
///
/// Reputation is unbounded above and floored at 0. Dissent is never
/// punished: only `FailedSupport` carries a penalty.
pub fn adjust(guardian: &mut Guardian, outcome: ReputationOutcome, params: &RecoveryParams) {
    guardian.total_recoveries += 1;
    match outcome {
        ReputationOutcome::SuccessfulParticipant => {
            guardian.reputation = guardian.reputation.saturating_add(params.success_reward);
            guardian.successful_recoveries += 1;
        }
        ReputationOutcome::FailedSupport => {
            guardian.reputation = guardian.reputation.saturating_sub(params.failed_support_penalty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_types::PrincipalId;

    fn guardian(reputation: u64) -> Guardian {
        Guardian::new(PrincipalId::new("wdn_alice"), reputation)
    }

    #[test]
    fn successful_participant_gains_reward_and_counters() {
        let params = RecoveryParams::default();
        let mut g = guardian(100);
        adjust(&mut g, ReputationOutcome::SuccessfulParticipant, &params);
        assert_eq!(g.reputation, 110);
        assert_eq!(g.total_recoveries, 1);
        assert_eq!(g.successful_recoveries, 1);
    }

    #[test]
    fn failed_support_penalty_floors_at_zero() {
        let params = RecoveryParams::default();
        let mut g = guardian(15);
        adjust(&mut g, ReputationOutcome::FailedSupport, &params);
        assert_eq!(g.reputation, 0);
        assert_eq!(g.total_recoveries, 1);
        assert_eq!(g.successful_recoveries, 0);
    }
}

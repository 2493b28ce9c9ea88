//! Protocol parameters for guardian recovery.
//!
//! Every threshold the engine enforces lives here as data, so policy can be
//! tuned (or governed) without touching engine code.

use crate::amount::{Amount, RAW_PER_UNIT};
use crate::class::RecoveryClass;
use serde::{Deserialize, Serialize};

/// All recovery-protocol parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecoveryParams {
    // ── Reputation ───────────────────────────────────────────────────────
    /// Reputation score assigned to a newly added guardian.
    pub base_reputation: u64,

    /// Reputation awarded to every voter on an executed request.
    pub success_reward: u64,

    /// Reputation deducted from support voters of an expired request
    /// (floored at 0).
    pub failed_support_penalty: u64,

    // ── Quorum ───────────────────────────────────────────────────────────
    /// Fraction of total active reputation (basis points, 6000 = 60%)
    /// required to execute a request. Snapshotted at request creation.
    pub quorum_bps: u32,

    // ── Staking ──────────────────────────────────────────────────────────
    /// Minimum stake (raw) each guardian must escrow to cast a vote.
    /// Default: 0.1 unit.
    pub stake_amount: Amount,

    /// Bonus (raw) paid on top of the refunded stake to every voter on an
    /// executed request. Default: 0.01 unit.
    pub vote_bonus: Amount,

    // ── Time locks ───────────────────────────────────────────────────────
    /// Wait before a `LostKey` vote is admissible. Default: 7 days.
    pub lost_key_delay_secs: u64,

    /// Wait before a `Compromised` vote is admissible. Default: 1 day.
    pub compromised_delay_secs: u64,

    /// Maximum age of an Open request before any guardian may expire it.
    /// Must exceed the longest class delay. Default: 30 days.
    pub max_request_age_secs: u64,
}

impl RecoveryParams {
    /// Warden defaults — the intended live configuration.
    pub fn warden_defaults() -> Self {
        Self {
            base_reputation: 100,
            success_reward: 10,
            failed_support_penalty: 20,

            quorum_bps: 6000, // 60%

            stake_amount: Amount::new(RAW_PER_UNIT / 10), // 0.1 unit
            vote_bonus: Amount::new(RAW_PER_UNIT / 100),  // 0.01 unit

            lost_key_delay_secs: 7 * 24 * 3600,  // 7 days
            compromised_delay_secs: 24 * 3600,   // 1 day
            max_request_age_secs: 30 * 24 * 3600, // 30 days
        }
    }

    /// The time-lock delay for a recovery class.
    pub fn delay_secs(&self, class: RecoveryClass) -> u64 {
        match class {
            RecoveryClass::LostKey => self.lost_key_delay_secs,
            RecoveryClass::Compromised => self.compromised_delay_secs,
            RecoveryClass::Emergency => 0,
        }
    }

    /// The longest class delay; `max_request_age_secs` must exceed this.
    pub fn longest_delay_secs(&self) -> u64 {
        self.lost_key_delay_secs.max(self.compromised_delay_secs)
    }
}

/// Default is the Warden live configuration.
impl Default for RecoveryParams {
    fn default() -> Self {
        Self::warden_defaults()
    }
}

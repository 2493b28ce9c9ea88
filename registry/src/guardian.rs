//! Guardian records.

use serde::{Deserialize, Serialize};
use warden_types::{Amount, PrincipalId};

/// A principal authorized to participate in recovery voting.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Guardian {
    /// Unique principal id.
    pub id: PrincipalId,
    /// Reputation score — the guardian's vote weight. Unbounded above,
    /// floored at 0.
    pub reputation: u64,
    /// Whether this guardian counts toward the quorum denominator.
    pub is_active: bool,
    /// Recovery requests this guardian has participated in (audit only).
    pub total_recoveries: u64,
    /// Participations that ended in an executed request (audit only).
    pub successful_recoveries: u64,
    /// Stake currently escrowed for an in-flight vote; zero when idle.
    /// Nonzero implies exactly one unresolved vote on one open request.
    pub staked: Amount,
}

impl Guardian {
    /// A fresh active guardian at the base reputation.
    pub fn new(id: PrincipalId, base_reputation: u64) -> Self {
        Self {
            id,
            reputation: base_reputation,
            is_active: true,
            total_recoveries: 0,
            successful_recoveries: 0,
            staked: Amount::ZERO,
        }
    }
}

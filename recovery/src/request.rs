//! Recovery request state.

use serde::{Deserialize, Serialize};
use warden_types::{Amount, PrincipalId, RecoveryClass, Timestamp};

/// Monotonically assigned request identifier.
pub type RequestId = u64;

/// The lifecycle state of a recovery request.
///
/// Exactly one holds at any time; no transition leaves `Executed` or
/// `Expired`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Accepting votes.
    Open,
    /// Quorum reached; the owner change is committed.
    Executed,
    /// Aged out without quorum; stakes refunded.
    Expired,
}

/// One guardian's recorded vote on a request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuardianVote {
    pub guardian: PrincipalId,
    /// Support or dissent. Dissent still pays stake and still counts as
    /// having voted, but contributes no weight.
    pub support: bool,
    /// Stake escrowed for this vote.
    pub stake: Amount,
    /// The voter's reputation at vote time; zero for dissent.
    pub weight: u64,
    pub cast_at: Timestamp,
}

/// A proposal to replace the account owner.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecoveryRequest {
    pub id: RequestId,
    /// The proposed new owner.
    pub new_owner: PrincipalId,
    /// The guardian who opened the request.
    pub requested_by: PrincipalId,
    pub requested_at: Timestamp,
    /// Declared incident severity; selects the time-lock delay.
    pub class: RecoveryClass,
    /// Quorum target, snapshotted at creation from the active set's total
    /// reputation. Never recomputed, even if the guardian set changes —
    /// vote weights, by contrast, use reputation at vote time.
    pub required_weight: u64,
    /// Monotonic sum of support-vote weights.
    pub current_weight: u64,
    /// Votes in arrival order, at most one per guardian.
    pub votes: Vec<GuardianVote>,
    pub status: RequestStatus,
}

impl RecoveryRequest {
    pub fn is_open(&self) -> bool {
        self.status == RequestStatus::Open
    }

    /// Whether this guardian has already voted on this request.
    pub fn has_voted(&self, guardian: &PrincipalId) -> bool {
        self.votes.iter().any(|v| v.guardian == *guardian)
    }

    /// Whether the accumulated support weight meets the snapshot target.
    pub fn quorum_met(&self) -> bool {
        self.current_weight >= self.required_weight
    }
}

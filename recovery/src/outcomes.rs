//! Settlement computation for terminal requests.
//!
//! When a request reaches a terminal state, every voter is settled:
//! - Executed: all voters (support and dissent alike) are treated as
//!   correct — stake back plus the vote bonus, reputation reward.
//! - Expired: all stakes refunded without bonus; only support voters take
//!   the reputation penalty. Dissent is never punished; stake is never
//!   forfeited.
//!
//! This module only computes the settlement; the engine applies it.

use crate::request::{RecoveryRequest, RequestStatus};
use warden_registry::ReputationOutcome;
use warden_types::{Amount, PrincipalId, RecoveryParams};

/// The settlement owed to one voter.
#[derive(Clone, Debug)]
pub struct GuardianSettlement {
    pub guardian: PrincipalId,
    pub supported: bool,
    /// Escrowed stake to refund (always the full stake).
    pub refund: Amount,
    /// Bonus on top of the refund; zero on expiry.
    pub bonus: Amount,
    /// Reputation adjustment, if any. `None` for dissenters on an expired
    /// request.
    pub reputation: Option<ReputationOutcome>,
}

/// The complete settlement of a terminal request.
#[derive(Clone, Debug)]
pub struct SettlementEvent {
    pub request_id: u64,
    pub status: RequestStatus,
    pub settlements: Vec<GuardianSettlement>,
}

/// Compute the settlement for a request that just went terminal.
pub fn compute_settlement(request: &RecoveryRequest, params: &RecoveryParams) -> SettlementEvent {
    let settlements = request
        .votes
        .iter()
        .map(|vote| match request.status {
            RequestStatus::Executed => GuardianSettlement {
                guardian: vote.guardian.clone(),
                supported: vote.support,
                refund: vote.stake,
                bonus: params.vote_bonus,
                reputation: Some(ReputationOutcome::SuccessfulParticipant),
            },
            _ => GuardianSettlement {
                guardian: vote.guardian.clone(),
                supported: vote.support,
                refund: vote.stake,
                bonus: Amount::ZERO,
                reputation: vote.support.then_some(ReputationOutcome::FailedSupport),
            },
        })
        .collect();

    SettlementEvent {
        request_id: request.id,
        status: request.status,
        settlements,
    }
}

//! The recovery engine — wires registry, ledger, and state machine.
//!
//! Every public operation takes an authenticated caller id and an explicit
//! `now`, completes or fails synchronously, and leaves no partial state on
//! error. A vote that crosses quorum executes within the same call: owner
//! change, reputation settlement, and stake refunds are one unit.

use crate::error::RecoveryError;
use crate::machine::RecoveryRequestMachine;
use crate::outcomes::{compute_settlement, SettlementEvent};
use crate::request::{GuardianVote, RecoveryRequest, RequestId, RequestStatus};
use serde::{Deserialize, Serialize};
use warden_ledger::{PaymentSink, Settlement, StakeLedger};
use warden_registry::{Guardian, GuardianRegistry, RegistryError};
use warden_types::{Amount, PrincipalId, RecoveryClass, RecoveryParams, Timestamp};

/// The account under guardianship.
///
/// `current_owner` is mutated only by a successful execution or by the
/// owner's own administrative calls, never concurrently.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountState {
    pub current_owner: PrincipalId,
}

/// What a successful `vote` call did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    /// Vote recorded; quorum not yet met.
    Recorded {
        current_weight: u64,
        required_weight: u64,
    },
    /// This vote crossed quorum — the request executed in this call.
    Executed,
}

/// The top-level recovery engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecoveryEngine {
    account: AccountState,
    registry: GuardianRegistry,
    ledger: StakeLedger,
    machine: RecoveryRequestMachine,
    params: RecoveryParams,
}

impl RecoveryEngine {
    pub fn new(owner: PrincipalId, params: RecoveryParams) -> Self {
        Self {
            account: AccountState { current_owner: owner },
            registry: GuardianRegistry::new(),
            ledger: StakeLedger::new(),
            machine: RecoveryRequestMachine::new(),
            params,
        }
    }

    // ── Queries (the only calls observable after a terminal transition) ──

    pub fn current_owner(&self) -> &PrincipalId {
        &self.account.current_owner
    }

    pub fn params(&self) -> &RecoveryParams {
        &self.params
    }

    pub fn guardian(&self, id: &PrincipalId) -> Option<&Guardian> {
        self.registry.get(id)
    }

    pub fn request(&self, id: RequestId) -> Result<&RecoveryRequest, RecoveryError> {
        self.machine.request(id)
    }

    /// A principal's withdrawable balance.
    pub fn balance(&self, principal: &PrincipalId) -> Amount {
        self.ledger.balance(principal)
    }

    /// Sum of reputation over the active guardian set.
    pub fn total_active_reputation(&self) -> u64 {
        self.registry.total_active_reputation()
    }

    // ── Guardian administration (owner only) ─────────────────────────────

    pub fn add_guardian(
        &mut self,
        caller: &PrincipalId,
        id: PrincipalId,
    ) -> Result<(), RecoveryError> {
        self.require_owner(caller)?;
        self.registry
            .add_guardian(id.clone(), &self.account.current_owner, &self.params)?;
        tracing::info!(guardian = %id, "guardian added");
        Ok(())
    }

    pub fn remove_guardian(
        &mut self,
        caller: &PrincipalId,
        id: &PrincipalId,
    ) -> Result<(), RecoveryError> {
        self.require_owner(caller)?;
        self.registry.remove_guardian(id)?;
        tracing::info!(guardian = %id, "guardian removed");
        Ok(())
    }

    // ── Recovery requests ────────────────────────────────────────────────

    /// Open a recovery request proposing `new_owner`.
    ///
    /// The quorum target is snapshotted here: 60% (rounded up) of the
    /// active set's total reputation at this instant.
    pub fn open_request(
        &mut self,
        requester: &PrincipalId,
        new_owner: PrincipalId,
        class: RecoveryClass,
        now: Timestamp,
    ) -> Result<RequestId, RecoveryError> {
        if !self.registry.is_active(requester) {
            return Err(RecoveryError::NotGuardian(requester.to_string()));
        }
        if !new_owner.is_valid() || new_owner == self.account.current_owner {
            return Err(RecoveryError::InvalidTarget(new_owner.to_string()));
        }
        let required_weight = quorum_weight(
            self.registry.total_active_reputation(),
            self.params.quorum_bps,
        );
        let id = self
            .machine
            .open(requester.clone(), new_owner, class, required_weight, now);
        tracing::info!(request = id, class = %class, required_weight, "recovery request opened");
        Ok(id)
    }

    /// Cast a vote, escrowing `stake_provided`.
    ///
    /// If this vote crosses quorum, the request executes before the call
    /// returns: the owner changes and every voter is settled.
    pub fn vote(
        &mut self,
        request_id: RequestId,
        guardian: &PrincipalId,
        support: bool,
        stake_provided: Amount,
        now: Timestamp,
    ) -> Result<VoteOutcome, RecoveryError> {
        let request = self.machine.request(request_id)?;
        if !request.is_open() {
            return Err(RecoveryError::NotOpen(request_id));
        }
        if !self.registry.is_active(guardian) {
            return Err(RecoveryError::NotGuardian(guardian.to_string()));
        }
        self.machine
            .admit_vote(request_id, guardian, stake_provided, &self.params, now)?;

        // Last admission gate: one live stake per guardian.
        self.ledger.escrow(guardian, request_id, stake_provided, now)?;
        let voter = self.registry.get_mut(guardian)?;
        voter.staked = stake_provided;
        // Weight is the voter's reputation at vote time, not at request
        // creation; dissent carries no weight.
        let weight = if support { voter.reputation } else { 0 };

        let quorum_met = self.machine.record_vote(
            request_id,
            GuardianVote {
                guardian: guardian.clone(),
                support,
                stake: stake_provided,
                weight,
                cast_at: now,
            },
        )?;
        tracing::debug!(request = request_id, guardian = %guardian, support, weight, "vote recorded");

        if !quorum_met {
            let request = self.machine.request(request_id)?;
            return Ok(VoteOutcome::Recorded {
                current_weight: request.current_weight,
                required_weight: request.required_weight,
            });
        }

        let request = self.machine.mark_executed(request_id)?;
        let new_owner = request.new_owner.clone();
        let event = compute_settlement(request, &self.params);
        self.account.current_owner = new_owner;
        self.apply_settlement(&event)?;
        tracing::info!(request = request_id, new_owner = %self.account.current_owner, "recovery executed");
        Ok(VoteOutcome::Executed)
    }

    /// Close a request that aged out without reaching quorum.
    ///
    /// Any active guardian may call this. All stakes are refunded; only
    /// support voters take the reputation penalty.
    pub fn expire_request(
        &mut self,
        request_id: RequestId,
        caller: &PrincipalId,
        now: Timestamp,
    ) -> Result<(), RecoveryError> {
        if !self.registry.is_active(caller) {
            return Err(RecoveryError::NotGuardian(caller.to_string()));
        }
        let request = self.machine.mark_expired(request_id, &self.params, now)?;
        let event = compute_settlement(request, &self.params);
        self.apply_settlement(&event)?;
        tracing::info!(request = request_id, "recovery request expired");
        Ok(())
    }

    // ── Balances ─────────────────────────────────────────────────────────

    /// Withdraw the caller's entire balance through the payment sink.
    ///
    /// Zero-then-pay: the balance is zeroed before the external payment is
    /// made; a sink failure aborts with no net state change.
    pub fn withdraw_earnings(
        &mut self,
        caller: &PrincipalId,
        sink: &mut dyn PaymentSink,
    ) -> Result<Amount, RecoveryError> {
        let paid = self.ledger.withdraw(caller, sink)?;
        tracing::info!(principal = %caller, amount = %paid, "earnings withdrawn");
        Ok(paid)
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn require_owner(&self, caller: &PrincipalId) -> Result<(), RecoveryError> {
        if *caller != self.account.current_owner {
            return Err(RegistryError::NotOwner(caller.to_string()).into());
        }
        Ok(())
    }

    /// Apply a computed settlement: reputation adjustments, then stake
    /// refunds into withdrawable balances. All internal state — no
    /// external calls are made here.
    fn apply_settlement(&mut self, event: &SettlementEvent) -> Result<(), RecoveryError> {
        for s in &event.settlements {
            if let Some(outcome) = s.reputation {
                self.registry
                    .settle_reputation(&s.guardian, outcome, &self.params)?;
            }
            let settlement = match event.status {
                RequestStatus::Executed => Settlement::RefundPlusBonus(s.bonus),
                _ => Settlement::RefundOnly,
            };
            self.ledger.settle(&s.guardian, settlement)?;
            self.registry.get_mut(&s.guardian)?.staked = Amount::ZERO;
        }
        Ok(())
    }
}

/// The quorum target: `quorum_bps` of `total`, rounded up.
fn quorum_weight(total: u64, quorum_bps: u32) -> u64 {
    let weight = (u128::from(total) * u128::from(quorum_bps)).div_ceil(10_000);
    weight as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quorum_weight_rounds_up() {
        assert_eq!(quorum_weight(100, 6000), 60);
        assert_eq!(quorum_weight(101, 6000), 61); // 60.6 rounds up
        assert_eq!(quorum_weight(0, 6000), 0);
        assert_eq!(quorum_weight(1, 6000), 1);
    }
}

//! The recovery request state machine.
//!
//! Owns every request exclusively; callers reference requests by id. This
//! layer enforces the per-request rules (one vote per guardian, time-lock
//! admission, monotonic weight, terminal-once transitions). Cross-subsystem
//! concerns — guardian status, stake escrow, settlement — belong to the
//! engine that drives it.

use std::collections::HashMap;

use crate::error::RecoveryError;
use crate::request::{GuardianVote, RecoveryRequest, RequestId, RequestStatus};
use crate::timelock;
use serde::{Deserialize, Serialize};
use warden_types::{Amount, PrincipalId, RecoveryClass, RecoveryParams, Timestamp};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecoveryRequestMachine {
    requests: HashMap<RequestId, RecoveryRequest>,
    next_id: RequestId,
}

impl Default for RecoveryRequestMachine {
    fn default() -> Self {
        Self {
            requests: HashMap::new(),
            next_id: 1,
        }
    }
}

impl RecoveryRequestMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new Open request with a snapshotted quorum target.
    pub fn open(
        &mut self,
        requested_by: PrincipalId,
        new_owner: PrincipalId,
        class: RecoveryClass,
        required_weight: u64,
        now: Timestamp,
    ) -> RequestId {
        let id = self.next_id;
        self.next_id += 1;
        self.requests.insert(
            id,
            RecoveryRequest {
                id,
                new_owner,
                requested_by,
                requested_at: now,
                class,
                required_weight,
                current_weight: 0,
                votes: Vec::new(),
                status: RequestStatus::Open,
            },
        );
        id
    }

    /// Look up a request.
    pub fn request(&self, id: RequestId) -> Result<&RecoveryRequest, RecoveryError> {
        self.requests.get(&id).ok_or(RecoveryError::UnknownRequest(id))
    }

    /// Check every per-request admission rule for a prospective vote,
    /// without mutating anything.
    ///
    /// Error precedence: `UnknownRequest`, `NotOpen`, `AlreadyVoted`,
    /// `InsufficientStake`, `LockedStillWaiting`.
    pub fn admit_vote(
        &self,
        id: RequestId,
        guardian: &PrincipalId,
        stake_provided: Amount,
        params: &RecoveryParams,
        now: Timestamp,
    ) -> Result<(), RecoveryError> {
        let request = self.request(id)?;
        if !request.is_open() {
            return Err(RecoveryError::NotOpen(id));
        }
        if request.has_voted(guardian) {
            return Err(RecoveryError::AlreadyVoted(guardian.to_string()));
        }
        if stake_provided < params.stake_amount {
            return Err(RecoveryError::InsufficientStake {
                provided: stake_provided.raw(),
                required: params.stake_amount.raw(),
            });
        }
        if !timelock::is_unlocked(request.class, request.requested_at, now, params) {
            return Err(RecoveryError::LockedStillWaiting {
                remaining_secs: timelock::remaining_secs(
                    request.class,
                    request.requested_at,
                    now,
                    params,
                ),
            });
        }
        Ok(())
    }

    /// Record an admitted vote. Support adds the vote's weight to
    /// `current_weight`; dissent adds nothing. Returns whether the quorum
    /// target is now met.
    pub fn record_vote(
        &mut self,
        id: RequestId,
        vote: GuardianVote,
    ) -> Result<bool, RecoveryError> {
        let request = self
            .requests
            .get_mut(&id)
            .ok_or(RecoveryError::UnknownRequest(id))?;
        if !request.is_open() {
            return Err(RecoveryError::NotOpen(id));
        }
        if vote.support {
            request.current_weight += vote.weight;
        }
        request.votes.push(vote);
        Ok(request.quorum_met())
    }

    /// Transition `Open → Executed`.
    pub fn mark_executed(&mut self, id: RequestId) -> Result<&RecoveryRequest, RecoveryError> {
        let request = self
            .requests
            .get_mut(&id)
            .ok_or(RecoveryError::UnknownRequest(id))?;
        if !request.is_open() {
            return Err(RecoveryError::NotOpen(id));
        }
        request.status = RequestStatus::Executed;
        Ok(request)
    }

    /// Transition `Open → Expired` once the request has aged past the
    /// configured maximum lifetime without quorum.
    pub fn mark_expired(
        &mut self,
        id: RequestId,
        params: &RecoveryParams,
        now: Timestamp,
    ) -> Result<&RecoveryRequest, RecoveryError> {
        let request = self
            .requests
            .get_mut(&id)
            .ok_or(RecoveryError::UnknownRequest(id))?;
        if !request.is_open() {
            return Err(RecoveryError::NotOpen(id));
        }
        let age_secs = request.requested_at.elapsed_since(now);
        if age_secs < params.max_request_age_secs {
            return Err(RecoveryError::NotAgedOut {
                age_secs,
                max_age_secs: params.max_request_age_secs,
            });
        }
        request.status = RequestStatus::Expired;
        Ok(request)
    }

    /// All requests currently Open.
    pub fn open_requests(&self) -> impl Iterator<Item = &RecoveryRequest> {
        self.requests.values().filter(|r| r.is_open())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str) -> PrincipalId {
        PrincipalId::new(format!("wdn_{name}"))
    }

    fn vote(name: &str, support: bool, weight: u64, params: &RecoveryParams) -> GuardianVote {
        GuardianVote {
            guardian: p(name),
            support,
            stake: params.stake_amount,
            weight: if support { weight } else { 0 },
            cast_at: Timestamp::new(0),
        }
    }

    fn open_emergency(machine: &mut RecoveryRequestMachine, required: u64) -> RequestId {
        machine.open(
            p("alice"),
            p("newowner"),
            RecoveryClass::Emergency,
            required,
            Timestamp::new(0),
        )
    }

    #[test]
    fn ids_are_monotonic() {
        let mut machine = RecoveryRequestMachine::new();
        let a = open_emergency(&mut machine, 60);
        let b = open_emergency(&mut machine, 60);
        assert!(b > a);
    }

    #[test]
    fn unknown_request_is_rejected() {
        let machine = RecoveryRequestMachine::new();
        assert!(matches!(machine.request(99), Err(RecoveryError::UnknownRequest(99))));
    }

    #[test]
    fn dissent_adds_no_weight() {
        let params = RecoveryParams::default();
        let mut machine = RecoveryRequestMachine::new();
        let id = open_emergency(&mut machine, 200);
        let met = machine.record_vote(id, vote("bob", false, 100, &params)).unwrap();
        assert!(!met);
        assert_eq!(machine.request(id).unwrap().current_weight, 0);
        assert_eq!(machine.request(id).unwrap().votes.len(), 1);
    }

    #[test]
    fn quorum_reported_on_the_crossing_vote() {
        let params = RecoveryParams::default();
        let mut machine = RecoveryRequestMachine::new();
        let id = open_emergency(&mut machine, 120);
        assert!(!machine.record_vote(id, vote("bob", true, 100, &params)).unwrap());
        assert!(machine.record_vote(id, vote("carol", true, 100, &params)).unwrap());
    }

    #[test]
    fn locked_vote_reports_remaining_time() {
        let params = RecoveryParams::default();
        let mut machine = RecoveryRequestMachine::new();
        let id = machine.open(
            p("alice"),
            p("newowner"),
            RecoveryClass::LostKey,
            60,
            Timestamp::new(0),
        );
        let err = machine
            .admit_vote(id, &p("alice"), params.stake_amount, &params, Timestamp::new(0))
            .unwrap_err();
        assert!(matches!(
            err,
            RecoveryError::LockedStillWaiting { remaining_secs } if remaining_secs == params.lost_key_delay_secs
        ));
    }

    #[test]
    fn low_stake_is_rejected_before_the_lock_check() {
        let params = RecoveryParams::default();
        let mut machine = RecoveryRequestMachine::new();
        let id = machine.open(
            p("alice"),
            p("newowner"),
            RecoveryClass::LostKey,
            60,
            Timestamp::new(0),
        );
        let low = Amount::new(params.stake_amount.raw() - 1);
        let err = machine
            .admit_vote(id, &p("alice"), low, &params, Timestamp::new(0))
            .unwrap_err();
        assert!(matches!(err, RecoveryError::InsufficientStake { .. }));
    }

    #[test]
    fn terminal_requests_accept_nothing() {
        let params = RecoveryParams::default();
        let mut machine = RecoveryRequestMachine::new();
        let id = open_emergency(&mut machine, 60);
        machine.mark_executed(id).unwrap();
        assert!(matches!(
            machine.admit_vote(id, &p("bob"), params.stake_amount, &params, Timestamp::new(0)),
            Err(RecoveryError::NotOpen(_))
        ));
        assert!(matches!(machine.mark_executed(id), Err(RecoveryError::NotOpen(_))));
        assert!(matches!(
            machine.mark_expired(id, &params, Timestamp::new(u64::MAX)),
            Err(RecoveryError::NotOpen(_))
        ));
    }

    #[test]
    fn expiry_requires_aging_out() {
        let params = RecoveryParams::default();
        let mut machine = RecoveryRequestMachine::new();
        let id = open_emergency(&mut machine, 1_000);
        let too_soon = Timestamp::new(params.max_request_age_secs - 1);
        assert!(matches!(
            machine.mark_expired(id, &params, too_soon),
            Err(RecoveryError::NotAgedOut { .. })
        ));
        let aged = Timestamp::new(params.max_request_age_secs);
        let request = machine.mark_expired(id, &params, aged).unwrap();
        assert_eq!(request.status, RequestStatus::Expired);
    }
}

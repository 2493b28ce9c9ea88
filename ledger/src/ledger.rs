//! The stake ledger — escrow, settlement, and zero-then-pay withdrawal.

use std::collections::HashMap;

use crate::error::LedgerError;
use crate::escrow::HeldStake;
use serde::{Deserialize, Serialize};
use warden_types::{Amount, PrincipalId, Timestamp};

/// External value-transfer collaborator.
///
/// The ledger tracks who is owed what; actually moving value out of the
/// system is delegated to this seam. A failure here aborts the whole
/// withdrawal with no net state change.
pub trait PaymentSink {
    fn pay(&mut self, to: &PrincipalId, amount: Amount) -> Result<(), LedgerError>;
}

/// In-memory payment sink recording every payment it makes.
///
/// The backend the workspace tests against.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub payments: Vec<(PrincipalId, Amount)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total paid to a principal across all payments.
    pub fn total_paid(&self, to: &PrincipalId) -> Amount {
        self.payments
            .iter()
            .filter(|(p, _)| p == to)
            .fold(Amount::ZERO, |acc, (_, a)| acc + *a)
    }
}

impl PaymentSink for MemorySink {
    fn pay(&mut self, to: &PrincipalId, amount: Amount) -> Result<(), LedgerError> {
        self.payments.push((to.clone(), amount));
        Ok(())
    }
}

/// How an escrowed stake resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    /// Request executed: stake back plus the vote bonus.
    RefundPlusBonus(Amount),
    /// Request expired: stake back, nothing more.
    RefundOnly,
}

/// Escrowed stakes and withdrawable balances, keyed by principal.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StakeLedger {
    escrows: HashMap<PrincipalId, HeldStake>,
    balances: HashMap<PrincipalId, Amount>,
}

impl StakeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escrow a guardian's stake for a vote on `request_id`.
    ///
    /// One live escrow per guardian: a second call before settlement fails
    /// with `StakeHeld`, regardless of which request it targets.
    pub fn escrow(
        &mut self,
        guardian: &PrincipalId,
        request_id: u64,
        amount: Amount,
        now: Timestamp,
    ) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }
        if let Some(held) = self.escrows.get(guardian) {
            return Err(LedgerError::StakeHeld(guardian.to_string(), held.request_id));
        }
        self.escrows.insert(
            guardian.clone(),
            HeldStake {
                request_id,
                amount,
                held_at: now,
            },
        );
        Ok(())
    }

    /// The guardian's live escrow, if any.
    pub fn held(&self, guardian: &PrincipalId) -> Option<&HeldStake> {
        self.escrows.get(guardian)
    }

    /// Resolve a guardian's escrow into their withdrawable balance.
    ///
    /// Returns the amount credited. Stake is never forfeited: both
    /// settlement modes refund the full escrow.
    pub fn settle(
        &mut self,
        guardian: &PrincipalId,
        settlement: Settlement,
    ) -> Result<Amount, LedgerError> {
        let held = self
            .escrows
            .remove(guardian)
            .ok_or_else(|| LedgerError::NoStakeHeld(guardian.to_string()))?;
        let credit = match settlement {
            Settlement::RefundPlusBonus(bonus) => held
                .amount
                .checked_add(bonus)
                .ok_or(LedgerError::Overflow)?,
            Settlement::RefundOnly => held.amount,
        };
        self.credit(guardian, credit)?;
        Ok(credit)
    }

    /// Credit a principal's withdrawable balance.
    pub fn credit(&mut self, principal: &PrincipalId, amount: Amount) -> Result<(), LedgerError> {
        let balance = self.balances.entry(principal.clone()).or_insert(Amount::ZERO);
        *balance = balance.checked_add(amount).ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    /// A principal's withdrawable balance.
    pub fn balance(&self, principal: &PrincipalId) -> Amount {
        self.balances.get(principal).copied().unwrap_or(Amount::ZERO)
    }

    /// Total stake currently escrowed for a request.
    pub fn escrowed_for_request(&self, request_id: u64) -> Amount {
        self.escrows
            .values()
            .filter(|h| h.request_id == request_id)
            .fold(Amount::ZERO, |acc, h| acc + h.amount)
    }

    /// Withdraw a principal's entire balance through the payment sink.
    ///
    /// Zero-then-pay: the balance is removed before `pay` is invoked, so a
    /// reentrant call observes a zero balance. If the sink fails, the
    /// balance is restored and the error returned — the withdrawal is
    /// all-or-nothing.
    pub fn withdraw(
        &mut self,
        principal: &PrincipalId,
        sink: &mut dyn PaymentSink,
    ) -> Result<Amount, LedgerError> {
        let amount = self
            .balances
            .remove(principal)
            .filter(|a| !a.is_zero())
            .ok_or_else(|| LedgerError::NothingToWithdraw(principal.to_string()))?;
        if let Err(e) = sink.pay(principal, amount) {
            self.balances.insert(principal.clone(), amount);
            return Err(e);
        }
        Ok(amount)
    }
}

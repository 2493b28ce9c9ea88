//! Ledger-specific errors.

use thiserror::Error;
use warden_types::ErrorKind;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("guardian {0} already has a stake held on request {1}")]
    StakeHeld(String, u64),

    #[error("guardian {0} has no stake held")]
    NoStakeHeld(String),

    #[error("stake amount must be non-zero")]
    ZeroAmount,

    #[error("nothing to withdraw for {0}")]
    NothingToWithdraw(String),

    #[error("external payment failed: {0}")]
    PaymentFailed(String),

    #[error("arithmetic overflow in ledger computation")]
    Overflow,
}

impl LedgerError {
    /// The failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::StakeHeld(..) | Self::NoStakeHeld(_) | Self::NothingToWithdraw(_) => {
                ErrorKind::State
            }
            Self::ZeroAmount => ErrorKind::Validation,
            Self::PaymentFailed(_) | Self::Overflow => ErrorKind::Resource,
        }
    }
}

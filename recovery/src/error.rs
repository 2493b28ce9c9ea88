//! Recovery-specific errors.

use thiserror::Error;
use warden_ledger::LedgerError;
use warden_registry::RegistryError;
use warden_types::ErrorKind;

#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("recovery request {0} not found")]
    UnknownRequest(u64),

    #[error("recovery request {0} is not open")]
    NotOpen(u64),

    #[error("{0} is not an active guardian")]
    NotGuardian(String),

    #[error("invalid recovery target: {0}")]
    InvalidTarget(String),

    #[error("guardian {0} has already voted on this request")]
    AlreadyVoted(String),

    #[error("insufficient stake: provided {provided} raw, required {required} raw")]
    InsufficientStake { provided: u128, required: u128 },

    #[error("time lock still active: {remaining_secs}s remaining")]
    LockedStillWaiting { remaining_secs: u64 },

    #[error("request has not aged out: {age_secs}s of {max_age_secs}s")]
    NotAgedOut { age_secs: u64, max_age_secs: u64 },

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

impl RecoveryError {
    /// The failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotGuardian(_) => ErrorKind::Authorization,
            Self::UnknownRequest(_) | Self::InvalidTarget(_) => ErrorKind::Validation,
            Self::NotOpen(_)
            | Self::AlreadyVoted(_)
            | Self::LockedStillWaiting { .. }
            | Self::NotAgedOut { .. } => ErrorKind::State,
            Self::InsufficientStake { .. } => ErrorKind::Resource,
            Self::Registry(e) => e.kind(),
            Self::Ledger(e) => e.kind(),
        }
    }
}

//! Registry-specific errors.

use thiserror::Error;
use warden_types::ErrorKind;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("caller {0} is not the account owner")]
    NotOwner(String),

    #[error("{0} is already an active guardian")]
    AlreadyActive(String),

    #[error("invalid guardian identity: {0}")]
    InvalidIdentity(String),

    #[error("{0} is not an active guardian")]
    NotGuardian(String),

    #[error("unknown guardian {0}")]
    UnknownGuardian(String),
}

impl RegistryError {
    /// The failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotOwner(_) | Self::NotGuardian(_) => ErrorKind::Authorization,
            Self::InvalidIdentity(_) => ErrorKind::Validation,
            Self::AlreadyActive(_) | Self::UnknownGuardian(_) => ErrorKind::State,
        }
    }
}

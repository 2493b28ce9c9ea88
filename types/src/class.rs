//! Recovery incident classes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The declared severity class of a recovery incident.
///
/// The class selects the time-lock delay a vote must wait out; it never
/// changes the quorum weight. An emergency trades waiting time for nothing
/// else — quorum strength is the only safeguard left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecoveryClass {
    /// Owner lost their key material; longest wait.
    LostKey,
    /// Owner's key is known to be compromised; shortened wait.
    Compromised,
    /// Active attack in progress; no wait, same quorum.
    Emergency,
}

impl RecoveryClass {
    /// Whether this class bypasses the time lock entirely.
    pub fn bypasses_lock(&self) -> bool {
        matches!(self, Self::Emergency)
    }

    /// Human-readable name of this class.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LostKey => "lost_key",
            Self::Compromised => "compromised",
            Self::Emergency => "emergency",
        }
    }
}

impl fmt::Display for RecoveryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

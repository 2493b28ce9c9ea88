//! Stake escrow records.

use serde::{Deserialize, Serialize};
use warden_types::{Amount, Timestamp};

/// A guardian's live escrow for one recovery vote.
///
/// A guardian holds at most one of these at a time: stake on a second open
/// request is refused until the first resolves.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeldStake {
    /// The request the stake backs.
    pub request_id: u64,
    /// The escrowed amount.
    pub amount: Amount,
    /// When the stake was escrowed.
    pub held_at: Timestamp,
}

//! Time-lock policy — incident class to required waiting period.
//!
//! The class→delay table lives in [`RecoveryParams`] as data; this module
//! is the admission decision over it. Emergency bypasses the wait entirely
//! and relies on quorum strength alone.

use warden_types::{RecoveryClass, RecoveryParams, Timestamp};

/// The required delay before a vote on a request of this class is admissible.
pub fn required_delay_secs(class: RecoveryClass, params: &RecoveryParams) -> u64 {
    params.delay_secs(class)
}

/// Whether a vote arriving at `now` is past the lock for this class.
pub fn is_unlocked(
    class: RecoveryClass,
    requested_at: Timestamp,
    now: Timestamp,
    params: &RecoveryParams,
) -> bool {
    class.bypasses_lock() || requested_at.has_expired(params.delay_secs(class), now)
}

/// Seconds until the lock elapses; zero once unlocked.
pub fn remaining_secs(
    class: RecoveryClass,
    requested_at: Timestamp,
    now: Timestamp,
    params: &RecoveryParams,
) -> u64 {
    if class.bypasses_lock() {
        return 0;
    }
    let unlock_at = requested_at.as_secs().saturating_add(params.delay_secs(class));
    unlock_at.saturating_sub(now.as_secs())
}

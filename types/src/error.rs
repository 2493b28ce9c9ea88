//! Error classification shared across crates.
//!
//! Each crate keeps its own `thiserror` enum with specific variants; every
//! variant additionally classifies into one of these four kinds so callers
//! can branch on the failure class without matching crate-specific variants.

use serde::{Deserialize, Serialize};

/// The failure class of an engine error.
///
/// All errors are synchronous and fail the attempted state transition with
/// no partial effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The caller lacks the required role (owner-only call, non-guardian).
    Authorization,
    /// A malformed or invalid argument (bad id, invalid target).
    Validation,
    /// The operation is invalid for the entity's current state
    /// (already voted, request not open, not aged out).
    State,
    /// Insufficient stake, payment, or balance.
    Resource,
}

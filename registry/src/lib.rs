//! Guardian registry and reputation store.
//!
//! The registry owns the authoritative guardian set: who is active (the
//! quorum denominator source), each guardian's reputation score, and the
//! audit counters settlement maintains. Guardians are never erased —
//! removal deactivates, preserving history and any open-request snapshots
//! that already counted them.

pub mod error;
pub mod guardian;
pub mod registry;
pub mod reputation;

pub use error::RegistryError;
pub use guardian::Guardian;
pub use registry::GuardianRegistry;
pub use reputation::ReputationOutcome;

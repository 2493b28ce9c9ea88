//! Recovery request state machine for guardian-based account recovery.
//!
//! Lifecycle: `Open → {Executed | Expired}` — terminal exactly once.
//! Guardians vote with economic stake; support votes are weighted by the
//! voter's reputation at vote time. The quorum target is snapshotted at
//! request creation (60% of total active reputation) and never recomputed.
//! Non-emergency votes must wait out the incident class's time lock;
//! emergencies skip the wait but face the same quorum.
//!
//! A quorum-crossing vote executes the request in the same call: owner
//! change and every voter's reputation/stake settlement are one indivisible
//! unit, with no observable state where quorum is met but not yet executed.

pub mod engine;
pub mod error;
pub mod machine;
pub mod outcomes;
pub mod request;
pub mod timelock;

pub use engine::{AccountState, RecoveryEngine, VoteOutcome};
pub use error::RecoveryError;
pub use machine::RecoveryRequestMachine;
pub use outcomes::{GuardianSettlement, SettlementEvent};
pub use request::{GuardianVote, RecoveryRequest, RequestId, RequestStatus};

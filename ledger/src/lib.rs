//! Stake escrow and withdrawable balances.
//!
//! The ledger escrows one stake per guardian for the duration of a vote and
//! settles it into a withdrawable balance when the request reaches a
//! terminal state. Withdrawal follows zero-then-pay ordering: the balance
//! is zeroed before the external payment collaborator is invoked.

pub mod error;
pub mod escrow;
pub mod ledger;

pub use error::LedgerError;
pub use escrow::HeldStake;
pub use ledger::{MemorySink, PaymentSink, Settlement, StakeLedger};

//! Fundamental types for the Warden recovery engine.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: principal identities, amounts, timestamps, recovery classes,
//! protocol parameters, and the error-kind taxonomy.

pub mod amount;
pub mod class;
pub mod error;
pub mod params;
pub mod principal;
pub mod time;

pub use amount::{Amount, RAW_PER_UNIT};
pub use class::RecoveryClass;
pub use error::ErrorKind;
pub use params::RecoveryParams;
pub use principal::PrincipalId;
pub use time::Timestamp;

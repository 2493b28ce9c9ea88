//! Principal identity type with `wdn_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An authenticated principal identity, conventionally prefixed with `wdn_`.
///
/// Principals name account owners, guardians, and recovery targets. The
/// engine trusts the identity as unforgeable (authentication happens in the
/// execution environment); validity here is purely syntactic.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrincipalId(String);

impl PrincipalId {
    /// The standard prefix for all Warden principal ids.
    pub const PREFIX: &'static str = "wdn_";

    /// Create a principal id from a raw string.
    ///
    /// Never panics; malformed ids are rejected at the operation boundary
    /// via [`is_valid`](Self::is_valid) since ids arrive from untrusted
    /// callers.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this id is well-formed.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PrincipalId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PrincipalId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

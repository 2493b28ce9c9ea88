//! The guardian registry — add/remove guardians, quorum denominator.

use std::collections::HashMap;

use crate::error::RegistryError;
use crate::guardian::Guardian;
use crate::reputation::{self, ReputationOutcome};
use serde::{Deserialize, Serialize};
use warden_types::{PrincipalId, RecoveryParams};

/// The authoritative guardian set.
///
/// Owns every guardian record; the order-preserving `active_order` list is
/// the quorum-denominator source. Mutated only by the owner's add/remove
/// calls and by request settlement.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GuardianRegistry {
    guardians: HashMap<PrincipalId, Guardian>,
    /// Active guardians in insertion order.
    active_order: Vec<PrincipalId>,
}

impl GuardianRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a guardian at the base reputation.
    ///
    /// The owner check belongs to the engine; this validates the id itself:
    /// it must be well-formed, not the owner, and not already active. A
    /// previously removed guardian is reactivated with its history intact.
    pub fn add_guardian(
        &mut self,
        id: PrincipalId,
        owner: &PrincipalId,
        params: &RecoveryParams,
    ) -> Result<(), RegistryError> {
        if !id.is_valid() || id == *owner {
            return Err(RegistryError::InvalidIdentity(id.to_string()));
        }
        if let Some(existing) = self.guardians.get_mut(&id) {
            if existing.is_active {
                return Err(RegistryError::AlreadyActive(id.to_string()));
            }
            existing.is_active = true;
        } else {
            self.guardians
                .insert(id.clone(), Guardian::new(id.clone(), params.base_reputation));
        }
        self.active_order.push(id);
        Ok(())
    }

    /// Deactivate a guardian.
    ///
    /// History is kept; the guardian stops counting toward future quorum
    /// snapshots, but requests that already counted them are unaffected.
    pub fn remove_guardian(&mut self, id: &PrincipalId) -> Result<(), RegistryError> {
        let guardian = self
            .guardians
            .get_mut(id)
            .ok_or_else(|| RegistryError::UnknownGuardian(id.to_string()))?;
        if !guardian.is_active {
            return Err(RegistryError::NotGuardian(id.to_string()));
        }
        guardian.is_active = false;
        self.active_order.retain(|g| g != id);
        Ok(())
    }

    /// Sum of reputation over all active guardians.
    ///
    /// Read once per request, at creation, to snapshot the quorum target.
    pub fn total_active_reputation(&self) -> u64 {
        self.active_order
            .iter()
            .filter_map(|id| self.guardians.get(id))
            .filter(|g| g.is_active)
            .map(|g| g.reputation)
            .sum()
    }

    /// Whether `id` names an active guardian.
    pub fn is_active(&self, id: &PrincipalId) -> bool {
        self.guardians.get(id).is_some_and(|g| g.is_active)
    }

    /// Look up a guardian record.
    pub fn get(&self, id: &PrincipalId) -> Option<&Guardian> {
        self.guardians.get(id)
    }

    /// Mutable lookup, failing if the guardian was never registered.
    pub fn get_mut(&mut self, id: &PrincipalId) -> Result<&mut Guardian, RegistryError> {
        self.guardians
            .get_mut(id)
            .ok_or_else(|| RegistryError::UnknownGuardian(id.to_string()))
    }

    /// Active guardians in insertion order.
    pub fn active_guardians(&self) -> impl Iterator<Item = &Guardian> {
        self.active_order
            .iter()
            .filter_map(|id| self.guardians.get(id))
            .filter(|g| g.is_active)
    }

    /// Apply a settlement outcome to a guardian's reputation.
    pub fn settle_reputation(
        &mut self,
        id: &PrincipalId,
        outcome: ReputationOutcome,
        params: &RecoveryParams,
    ) -> Result<(), RegistryError> {
        let guardian = self.get_mut(id)?;
        reputation::adjust(guardian, outcome, params);
        Ok(())
    }
}

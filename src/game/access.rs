use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::OwnerId;

/// The set of user ids allowed to run mutating commands. One list for the
/// whole bot, not per chat. Persisted as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessGuard {
    members: BTreeSet<OwnerId>,
}

impl AccessGuard {
    /// A guard containing only the operator-configured admin; used on first
    /// run when no whitelist document exists yet.
    pub fn seeded(admin: OwnerId) -> Self {
        let mut members = BTreeSet::new();
        members.insert(admin);
        Self { members }
    }

    pub fn is_authorized(&self, id: OwnerId) -> bool {
        self.members.contains(&id)
    }

    /// Returns `true` if the id was newly added.
    pub fn add(&mut self, id: OwnerId) -> bool {
        self.members.insert(id)
    }

    /// Returns `true` if the id was a member. Removing a non-member is a
    /// no-op, matching set-discard semantics.
    pub fn remove(&mut self, id: OwnerId) -> bool {
        self.members.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

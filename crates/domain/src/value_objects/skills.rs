//! Skill offer/selection value objects
//!
//! A GM offers up to three skills per character; the owning player keeps
//! exactly two of them.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::CatalogEntryId;

/// Number of offered-skill slots the GM controls per character
pub const OFFERED_SLOTS: usize = 3;

/// Number of skills a player must keep
pub const SELECTION_SIZE: usize = 2;

/// The GM's offered skills, slot by slot. Empty slots are sent as null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillOptions {
    slots: [Option<CatalogEntryId>; OFFERED_SLOTS],
}

impl SkillOptions {
    pub fn from_slots(slots: [Option<CatalogEntryId>; OFFERED_SLOTS]) -> Self {
        Self { slots }
    }

    /// Seed slots from a list of currently offered skills, in order.
    ///
    /// Extra entries beyond the third are dropped.
    pub fn from_offered(offered: &[CatalogEntryId]) -> Self {
        let mut slots = [None; OFFERED_SLOTS];
        for (slot, id) in slots.iter_mut().zip(offered.iter()) {
            *slot = Some(*id);
        }
        Self { slots }
    }

    pub fn slots(&self) -> [Option<CatalogEntryId>; OFFERED_SLOTS] {
        self.slots
    }

    pub fn slot(&self, index: usize) -> Option<CatalogEntryId> {
        self.slots.get(index).copied().flatten()
    }

    /// Replace one slot; out-of-range indices are ignored.
    pub fn set_slot(&mut self, index: usize, value: Option<CatalogEntryId>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = value;
        }
    }

    /// Offered skills, skipping empty slots.
    pub fn offered(&self) -> Vec<CatalogEntryId> {
        self.slots.iter().flatten().copied().collect()
    }
}

/// A player's final pick: exactly two distinct skills out of the offered ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSelection([CatalogEntryId; SELECTION_SIZE]);

impl SkillSelection {
    /// Validate a pick against the skills currently offered.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` unless `picked` holds exactly two
    /// distinct ids and both are among `offered`.
    pub fn new(picked: &[CatalogEntryId], offered: &[CatalogEntryId]) -> Result<Self, DomainError> {
        let [first, second] = picked else {
            return Err(DomainError::validation("You must choose exactly 2 skills."));
        };
        if first == second {
            return Err(DomainError::validation("You must choose 2 different skills."));
        }
        if !offered.contains(first) || !offered.contains(second) {
            return Err(DomainError::validation(
                "Chosen skills must be among the offered options.",
            ));
        }
        Ok(Self([*first, *second]))
    }

    pub fn ids(&self) -> [CatalogEntryId; SELECTION_SIZE] {
        self.0
    }
}

/// In-progress checkbox state for a player's pick.
///
/// Ticking a third option is ignored rather than rejected; the exact-two
/// rule is only enforced when the draft is turned into a [`SkillSelection`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionDraft {
    picked: Vec<CatalogEntryId>,
}

impl SelectionDraft {
    pub fn from_current(current: &[CatalogEntryId]) -> Self {
        let mut draft = Self::default();
        for id in current {
            draft.toggle(*id);
        }
        draft
    }

    /// Tick or untick a skill. Returns `false` when a third tick was ignored.
    pub fn toggle(&mut self, id: CatalogEntryId) -> bool {
        if let Some(pos) = self.picked.iter().position(|p| *p == id) {
            self.picked.remove(pos);
            return true;
        }
        if self.picked.len() >= SELECTION_SIZE {
            return false;
        }
        self.picked.push(id);
        true
    }

    pub fn contains(&self, id: CatalogEntryId) -> bool {
        self.picked.contains(&id)
    }

    pub fn picked(&self) -> &[CatalogEntryId] {
        &self.picked
    }

    pub fn is_complete(&self) -> bool {
        self.picked.len() == SELECTION_SIZE
    }

    pub fn to_selection(&self, offered: &[CatalogEntryId]) -> Result<SkillSelection, DomainError> {
        SkillSelection::new(&self.picked, offered)
    }
}

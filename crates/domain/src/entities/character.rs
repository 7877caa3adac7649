//! Character entity as the client sees it

use serde::{Deserialize, Serialize};

use crate::entities::catalog::CatalogEntry;
use crate::ids::{CatalogEntryId, CharacterId};
use crate::value_objects::{CharacterState, SELECTION_SIZE};

/// Reference from a character to a catalog entry.
///
/// List responses name the entry but do not always carry its id, so the id
/// is optional and may be resolved against the catalog later.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogRef {
    pub id: Option<CatalogEntryId>,
    pub name: Option<String>,
}

impl CatalogRef {
    /// Resolve the id, falling back to a lookup by name.
    pub fn resolve(&self, catalog: &[CatalogEntry]) -> Option<CatalogEntryId> {
        self.id.or_else(|| {
            let name = self.name.as_deref()?;
            crate::entities::catalog::find_by_name(catalog, name).map(|e| e.id)
        })
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("-")
    }
}

/// A character record as last fetched from the server.
///
/// The client never patches these in place: every mutation is followed by a
/// full reload, so a `Character` is always a server snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub level: u32,
    pub state: CharacterState,
    pub race: CatalogRef,
    pub power: CatalogRef,
    pub equipment: CatalogRef,
    /// Username of the owning player; `None` while the character sits in the pool.
    pub owner: Option<String>,
    /// Up to three skills the GM offers for this character.
    pub options_offered: Vec<CatalogEntry>,
    /// The owning player's pick, a subset of `options_offered`.
    pub selection: Vec<CatalogEntry>,
}

impl Character {
    pub fn is_owned(&self) -> bool {
        self.owner.as_deref().is_some_and(|o| !o.is_empty())
    }

    pub fn offered_ids(&self) -> Vec<CatalogEntryId> {
        self.options_offered.iter().map(|e| e.id).collect()
    }

    pub fn selected_ids(&self) -> Vec<CatalogEntryId> {
        self.selection.iter().map(|e| e.id).collect()
    }

    /// `selection ⊆ options_offered` and at most two picks.
    pub fn selection_is_consistent(&self) -> bool {
        let offered = self.offered_ids();
        self.selection.len() <= SELECTION_SIZE
            && self.selection.iter().all(|s| offered.contains(&s.id))
    }
}

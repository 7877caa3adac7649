//! Catalog entries: the four GM-curated reference lists

use serde::{Deserialize, Serialize};

use crate::ids::CatalogEntryId;

/// The four disjoint catalog collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogKind {
    Race,
    Skill,
    Power,
    Equipment,
}

impl CatalogKind {
    /// All kinds, in the order the catalog board lays them out.
    pub const ALL: [CatalogKind; 4] = [Self::Race, Self::Skill, Self::Power, Self::Equipment];

    /// Plural heading for the collection.
    pub fn title(self) -> &'static str {
        match self {
            Self::Race => "Races",
            Self::Skill => "Skills",
            Self::Power => "Powers",
            Self::Equipment => "Equipment",
        }
    }

    /// Placeholder text for the "new entry" input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Race => "New race",
            Self::Skill => "New skill",
            Self::Power => "New power",
            Self::Equipment => "New equipment",
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Race => "race",
            Self::Skill => "skill",
            Self::Power => "power",
            Self::Equipment => "equipment",
        };
        write!(f, "{name}")
    }
}

/// A named catalog entry. Append-only from the client's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: CatalogEntryId,
    pub name: String,
}

impl CatalogEntry {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: CatalogEntryId::new(id),
            name: name.into(),
        }
    }
}

/// Find an entry by exact name; used when a record only carries the name.
pub fn find_by_name<'a>(entries: &'a [CatalogEntry], name: &str) -> Option<&'a CatalogEntry> {
    entries.iter().find(|e| e.name == name)
}

//! Roster domain: catalog, character, role and skill types with their
//! client-side invariants. No I/O lives here.

extern crate self as roster_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod types;
pub mod value_objects;

pub use entities::{find_by_name, CatalogEntry, CatalogKind, CatalogRef, Character};
pub use error::DomainError;
pub use ids::{CatalogEntryId, CharacterId};
pub use types::Role;
pub use value_objects::{
    CatalogName, CharacterName, CharacterState, SelectionDraft, SkillOptions, SkillSelection,
    MAX_NAME_LENGTH, OFFERED_SLOTS, SELECTION_SIZE,
};

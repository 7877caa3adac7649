//! Value objects - immutable, validated-by-construction domain values

mod character_state;
mod names;
mod skills;

pub use character_state::CharacterState;
pub use names::{CatalogName, CharacterName, MAX_NAME_LENGTH};
pub use skills::{SelectionDraft, SkillOptions, SkillSelection, OFFERED_SLOTS, SELECTION_SIZE};

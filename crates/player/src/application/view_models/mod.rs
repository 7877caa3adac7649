//! View models
//!
//! Plain state + transitions behind the views, testable without a renderer.

pub mod catalog_board;
pub mod character_form;
pub mod scroll_anchor;
pub mod skill_drafts;
pub mod snapshots;

pub use catalog_board::{submit_entry, CatalogBoard, CreateOutcome, NOT_AUTHORIZED};
pub use character_form::{parse_choice, CharacterForm, FormMode};
pub use scroll_anchor::ScrollAnchor;
pub use skill_drafts::{OptionDrafts, SelectionDrafts};
pub use snapshots::{GmSnapshot, PlayerSnapshot};

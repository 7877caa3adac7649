//! Reusable UI components

pub mod alert_banner;
pub mod catalog_box;
pub mod catalog_select;
pub mod character_card;
pub mod character_editor;
pub mod header;
pub mod skill_options;
pub mod skill_picker;

pub use alert_banner::AlertBanner;
pub use catalog_box::CatalogBox;
pub use catalog_select::CatalogSelect;
pub use character_card::CharacterCard;
pub use character_editor::CharacterEditor;
pub use header::Header;
pub use skill_options::SkillOptionsEditor;
pub use skill_picker::SkillPicker;

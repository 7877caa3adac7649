//! Shared create/edit form for the GM roster

use roster_domain::{CatalogEntryId, Character, CharacterId, CharacterName};

use crate::application::dto::CharacterPayload;
use crate::application::error::ClientError;
use crate::application::services::CatalogLists;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(CharacterId),
}

/// One form, two modes. Entering edit mode replaces whatever was drafted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CharacterForm {
    pub mode: FormMode,
    pub name: String,
    pub race: Option<CatalogEntryId>,
    pub power: Option<CatalogEntryId>,
    pub equipment: Option<CatalogEntryId>,
    /// A create or update request is in flight
    pub(crate) submitting: bool,
}

impl CharacterForm {
    /// Load `character` into the form. References the list response only
    /// names are resolved against the catalogs.
    pub fn begin_edit(&mut self, character: &Character, catalogs: &CatalogLists) {
        *self = Self {
            mode: FormMode::Edit(character.id),
            name: character.name.clone(),
            race: character.race.resolve(&catalogs.races),
            power: character.power.resolve(&catalogs.powers),
            equipment: character.equipment.resolve(&catalogs.equipment),
            submitting: self.submitting,
        };
    }

    /// Back to an empty create form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate and mark the form busy. `None` while a request is already
    /// running; a validation error leaves the form idle.
    pub fn begin_submit(&mut self) -> Option<Result<(FormMode, CharacterPayload), ClientError>> {
        if self.submitting {
            return None;
        }
        let payload = self.to_payload();
        if payload.is_ok() {
            self.submitting = true;
        }
        Some(payload.map(|payload| (self.mode, payload)))
    }

    /// The request ended without the form being reset.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    pub fn to_payload(&self) -> Result<CharacterPayload, ClientError> {
        let name = CharacterName::new(self.name.as_str())?;
        Ok(CharacterPayload {
            name: name.into(),
            race: self.race,
            power: self.power,
            equipment: self.equipment,
        })
    }
}

/// Parse a `<select>` value: empty means "none".
pub fn parse_choice(value: &str) -> Option<CatalogEntryId> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_domain::{CatalogEntry, CatalogRef, CharacterState};

    fn catalogs() -> CatalogLists {
        CatalogLists {
            races: vec![CatalogEntry::new(1, "Orco"), CatalogEntry::new(2, "Humano")],
            powers: vec![CatalogEntry::new(7, "Fuego")],
            ..CatalogLists::default()
        }
    }

    fn thrall() -> Character {
        Character {
            id: CharacterId::new(4),
            name: "Thrall".into(),
            level: 2,
            state: CharacterState::Alive,
            race: CatalogRef {
                id: None,
                name: Some("Humano".into()),
            },
            power: CatalogRef {
                id: Some(CatalogEntryId::new(7)),
                name: Some("Fuego".into()),
            },
            equipment: CatalogRef::default(),
            owner: None,
            options_offered: vec![],
            selection: vec![],
        }
    }

    #[test]
    fn edit_replaces_create_draft() {
        let mut form = CharacterForm {
            name: "Half typed".into(),
            race: Some(CatalogEntryId::new(1)),
            ..CharacterForm::default()
        };

        form.begin_edit(&thrall(), &catalogs());

        assert_eq!(form.mode, FormMode::Edit(CharacterId::new(4)));
        assert_eq!(form.name, "Thrall");
        assert_eq!(form.race, Some(CatalogEntryId::new(2)));
        assert_eq!(form.power, Some(CatalogEntryId::new(7)));
        assert_eq!(form.equipment, None);
    }

    #[test]
    fn reset_returns_to_create() {
        let mut form = CharacterForm::default();
        form.begin_edit(&thrall(), &catalogs());
        form.reset();
        assert!(!form.is_editing());
        assert_eq!(form, CharacterForm::default());
    }

    #[test]
    fn payload_requires_a_name() {
        let form = CharacterForm::default();
        assert!(matches!(form.to_payload(), Err(ClientError::Validation(_))));

        let form = CharacterForm {
            name: " Thrall ".into(),
            race: Some(CatalogEntryId::new(2)),
            ..CharacterForm::default()
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.name, "Thrall");
        assert_eq!(payload.race, Some(CatalogEntryId::new(2)));
        assert_eq!(payload.power, None);
    }

    #[test]
    fn double_submit_sends_once() {
        let mut form = CharacterForm {
            name: "Thrall".into(),
            ..CharacterForm::default()
        };

        let first = form.begin_submit();
        assert!(matches!(first, Some(Ok((FormMode::Create, _)))));
        assert!(form.is_submitting());
        assert!(form.begin_submit().is_none());

        form.finish_submit();
        assert!(!form.is_submitting());
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn invalid_submit_stays_idle() {
        let mut form = CharacterForm::default();
        assert!(matches!(form.begin_submit(), Some(Err(ClientError::Validation(_)))));
        assert!(!form.is_submitting());
    }

    #[test]
    fn reset_after_success_clears_busy_flag() {
        let mut form = CharacterForm {
            name: "Thrall".into(),
            ..CharacterForm::default()
        };
        form.begin_submit();
        form.reset();
        assert!(!form.is_submitting());
    }

    #[test]
    fn select_values_parse_to_ids() {
        assert_eq!(parse_choice("12"), Some(CatalogEntryId::new(12)));
        assert_eq!(parse_choice(""), None);
    }
}

//! Per-character skill drafts
//!
//! `OptionDrafts` holds the GM's three offered-skill slots for every row,
//! `SelectionDrafts` the player's ticked checkboxes. Both are reseeded from
//! server data after every reload.

use std::collections::HashMap;

use roster_domain::{
    CatalogEntryId, Character, CharacterId, SelectionDraft, SkillOptions, SkillSelection,
};

use crate::application::error::ClientError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionDrafts {
    drafts: HashMap<CharacterId, SkillOptions>,
}

impl OptionDrafts {
    pub fn seed(characters: &[Character]) -> Self {
        let drafts = characters
            .iter()
            .map(|c| (c.id, SkillOptions::from_offered(&c.offered_ids())))
            .collect();
        Self { drafts }
    }

    pub fn get(&self, id: CharacterId) -> SkillOptions {
        self.drafts.get(&id).copied().unwrap_or_default()
    }

    pub fn set_slot(&mut self, id: CharacterId, index: usize, value: Option<CatalogEntryId>) {
        self.drafts.entry(id).or_default().set_slot(index, value);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionDrafts {
    drafts: HashMap<CharacterId, SelectionDraft>,
}

impl SelectionDrafts {
    pub fn seed(characters: &[Character]) -> Self {
        let drafts = characters
            .iter()
            .map(|c| (c.id, SelectionDraft::from_current(&c.selected_ids())))
            .collect();
        Self { drafts }
    }

    pub fn is_ticked(&self, id: CharacterId, skill: CatalogEntryId) -> bool {
        self.drafts.get(&id).is_some_and(|d| d.contains(skill))
    }

    pub fn is_complete(&self, id: CharacterId) -> bool {
        self.drafts.get(&id).is_some_and(SelectionDraft::is_complete)
    }

    /// Tick or untick. A third tick is ignored and reported as `false`.
    pub fn toggle(&mut self, id: CharacterId, skill: CatalogEntryId) -> bool {
        self.drafts.entry(id).or_default().toggle(skill)
    }

    /// The pick to submit for `character`, checked before any request goes out.
    pub fn submission(&self, character: &Character) -> Result<SkillSelection, ClientError> {
        let draft = self.drafts.get(&character.id).cloned().unwrap_or_default();
        Ok(draft.to_selection(&character.offered_ids())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures;

    fn character(id: i64, offered: &[(i64, &str)], selected: &[(i64, &str)]) -> Character {
        Character {
            owner: Some("ana".into()),
            options_offered: fixtures::entries(offered),
            selection: fixtures::entries(selected),
            ..fixtures::character(id, &format!("pj{id}"))
        }
    }

    fn skill(raw: i64) -> CatalogEntryId {
        CatalogEntryId::new(raw)
    }

    const OFFERED: &[(i64, &str)] = &[(1, "Sigilo"), (2, "Fuerza"), (3, "Sabiduría")];

    #[test]
    fn option_drafts_seed_from_offered() {
        let drafts = OptionDrafts::seed(&[character(1, &OFFERED[..2], &[])]);
        assert_eq!(
            drafts.get(CharacterId::new(1)).slots(),
            [Some(skill(1)), Some(skill(2)), None]
        );
        assert_eq!(drafts.get(CharacterId::new(99)), SkillOptions::default());
    }

    #[test]
    fn option_slot_edits_stay_per_character() {
        let mut drafts = OptionDrafts::seed(&[character(1, &[], &[]), character(2, &[], &[])]);
        drafts.set_slot(CharacterId::new(1), 2, Some(skill(3)));
        assert_eq!(drafts.get(CharacterId::new(1)).slot(2), Some(skill(3)));
        assert_eq!(drafts.get(CharacterId::new(2)).slot(2), None);
    }

    #[test]
    fn third_tick_is_ignored() {
        let pj = character(1, OFFERED, &[]);
        let mut drafts = SelectionDrafts::seed(&[pj.clone()]);

        assert!(drafts.toggle(pj.id, skill(1)));
        assert!(drafts.toggle(pj.id, skill(2)));
        assert!(!drafts.toggle(pj.id, skill(3)));
        assert!(!drafts.is_ticked(pj.id, skill(3)));
        assert!(drafts.is_complete(pj.id));
    }

    #[test]
    fn submission_requires_exactly_two() {
        let pj = character(1, OFFERED, &[]);
        let mut drafts = SelectionDrafts::seed(&[pj.clone()]);
        drafts.toggle(pj.id, skill(3));

        assert!(matches!(drafts.submission(&pj), Err(ClientError::Validation(_))));

        drafts.toggle(pj.id, skill(1));
        let selection = drafts.submission(&pj).unwrap();
        assert_eq!(selection.ids(), [skill(3), skill(1)]);
    }

    #[test]
    fn seeded_from_current_selection() {
        let pj = character(1, OFFERED, &[(2, "Fuerza"), (3, "Sabiduría")]);
        let drafts = SelectionDrafts::seed(&[pj.clone()]);
        assert!(drafts.is_ticked(pj.id, skill(2)));
        assert!(drafts.is_complete(pj.id));
    }
}

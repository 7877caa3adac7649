//! Characters view - player mode
//!
//! Two lists: the characters this player owns, each with its skill picker,
//! and the unowned pool with a claim button per entry.

use std::sync::Arc;

use dioxus::prelude::*;
use roster_domain::{CatalogEntryId, Character, CharacterId};

use crate::application::services::CharacterService;
use crate::application::view_models::PlayerSnapshot;
use crate::infrastructure::spawn_task;
use crate::presentation::components::{AlertBanner, CharacterCard, SkillPicker};
use crate::presentation::services::use_character_service;
use crate::presentation::state::PlayerRosterState;
use crate::{use_platform, Platform};

const CLAIM_FALLBACK: &str = "Could not claim the character.";
const SELECTION_FALLBACK: &str = "Could not save your skills.";

async fn reload(mut state: PlayerRosterState, characters: &CharacterService) {
    let result = PlayerSnapshot::load(characters).await;
    state.apply(result);
}

async fn claim(
    id: CharacterId,
    state: PlayerRosterState,
    platform: Platform,
    characters: Arc<CharacterService>,
) {
    match characters.claim(id).await {
        Ok(()) => reload(state, &characters).await,
        Err(e) => {
            tracing::warn!(%id, error = %e, "claim failed");
            platform.alert(&e.user_message(CLAIM_FALLBACK));
        }
    }
}

async fn save_selection(
    character: Character,
    state: PlayerRosterState,
    platform: Platform,
    characters: Arc<CharacterService>,
) {
    // Rejected locally unless exactly two offered skills are ticked.
    let selection = match state.selections.peek().submission(&character) {
        Ok(selection) => selection,
        Err(e) => {
            platform.alert(&e.user_message(SELECTION_FALLBACK));
            return;
        }
    };
    match characters.choose_skills(character.id, &selection).await {
        Ok(()) => reload(state, &characters).await,
        Err(e) => {
            tracing::warn!(id = %character.id, error = %e, "skill selection failed");
            platform.alert(&e.user_message(SELECTION_FALLBACK));
        }
    }
}

#[component]
pub fn CharactersPlayerView() -> Element {
    let platform = use_platform();
    let characters = use_character_service();
    let mut state = use_hook(PlayerRosterState::new);

    {
        let characters = characters.clone();
        use_effect(move || {
            let characters = characters.clone();
            spawn_task(async move { reload(state, &characters).await });
        });
    }

    let on_claim = {
        let platform = platform.clone();
        let characters = characters.clone();
        use_callback(move |id: CharacterId| {
            spawn_task(claim(id, state, platform.clone(), characters.clone()));
        })
    };

    let on_save = use_callback(move |character: Character| {
        spawn_task(save_selection(
            character,
            state,
            platform.clone(),
            characters.clone(),
        ));
    });

    let snapshot = state.snapshot.read();
    let selections = state.selections.read();

    rsx! {
        div {
            class: "characters-view",

            AlertBanner { message: state.banner.read().clone() }

            section {
                class: "mine",
                h2 { "My characters" }

                if *state.loading.read() {
                    p { class: "empty-state", "Loading..." }
                } else if snapshot.mine.is_empty() {
                    p { class: "empty-state", "None assigned yet. Claim one from the pool below." }
                }

                for character in snapshot.mine.iter().cloned() {
                    CharacterCard {
                        key: "{character.id}",
                        character: character.clone(),
                        show_selection: true,
                        SkillPicker {
                            offered: character.options_offered.clone(),
                            ticked: ticked_ids(&character, |skill| selections.is_ticked(character.id, skill)),
                            on_toggle: {
                                let id = character.id;
                                move |skill| {
                                    // A refused third pick changes nothing.
                                    state.selections.write().toggle(id, skill);
                                }
                            },
                            on_save: {
                                let character = character.clone();
                                move |_| on_save.call(character.clone())
                            },
                        }
                    }
                }
            }

            section {
                class: "pool",
                h2 { "Available characters" }

                if !*state.loading.read() && snapshot.available.is_empty() {
                    p { class: "empty-state", "No characters available." }
                }

                for character in snapshot.available.iter().cloned() {
                    CharacterCard {
                        key: "{character.id}",
                        character: character.clone(),
                        if !character.is_owned() {
                            button {
                                class: "btn btn-primary",
                                onclick: {
                                    let id = character.id;
                                    move |_| on_claim.call(id)
                                },
                                "Claim"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn ticked_ids(character: &Character, is_ticked: impl Fn(CatalogEntryId) -> bool) -> Vec<CatalogEntryId> {
    character
        .offered_ids()
        .into_iter()
        .filter(|id| is_ticked(*id))
        .collect()
}

//! Characters view - GM mode
//!
//! Every mutation ends in a full reload of catalogs, roster and pool; the
//! only state carried across a reload is the scroll position, captured
//! before the request and restored once the reloaded list has painted.

use std::sync::Arc;

use dioxus::prelude::*;
use roster_domain::{Character, CharacterId, CharacterState};

use crate::application::services::{CatalogService, CharacterService};
use crate::application::view_models::{FormMode, GmSnapshot, ScrollAnchor};
use crate::infrastructure::spawn_task;
use crate::presentation::components::{
    AlertBanner, CharacterCard, CharacterEditor, SkillOptionsEditor,
};
use crate::presentation::services::{use_catalog_service, use_character_service};
use crate::presentation::state::GmRosterState;
use crate::{use_platform, Platform};

const SAVE_FALLBACK: &str = "Could not save the character.";

/// A per-row action; each one is a single request followed by a reload.
#[derive(Clone, Copy, Debug, PartialEq)]
enum RowAction {
    LevelUp(CharacterId),
    ChangeState(CharacterId, CharacterState),
    Release(CharacterId),
    Delete(CharacterId),
    SaveOptions(CharacterId),
}

impl RowAction {
    fn failure_text(self) -> &'static str {
        match self {
            Self::LevelUp(_) => "Could not level up.",
            Self::ChangeState(..) => "Could not change the state.",
            Self::Release(_) => "Could not release the character.",
            Self::Delete(_) => "Could not delete the character.",
            Self::SaveOptions(_) => "Could not save the skill options.",
        }
    }
}

async fn reload(
    mut state: GmRosterState,
    catalog: &CatalogService,
    characters: &CharacterService,
) {
    let result = GmSnapshot::load(catalog, characters).await;
    state.apply(result);
}

async fn run_row_action(
    action: RowAction,
    mut state: GmRosterState,
    platform: Platform,
    catalog: Arc<CatalogService>,
    characters: Arc<CharacterService>,
) {
    if let RowAction::Delete(_) = action {
        if !platform.confirm("Delete this character? This cannot be undone.").await {
            return;
        }
    }

    state.anchor.set(ScrollAnchor::capture(platform.as_ref()).await);

    let result = match action {
        RowAction::LevelUp(id) => characters.level_up(id).await,
        RowAction::ChangeState(id, next) => characters.change_state(id, next).await,
        RowAction::Release(id) => characters.release(id).await,
        RowAction::Delete(id) => characters.delete(id).await,
        RowAction::SaveOptions(id) => {
            let draft = state.options.peek().get(id);
            characters.set_options(id, &draft).await
        }
    };

    match result {
        Ok(()) => reload(state, &catalog, &characters).await,
        Err(e) => {
            tracing::warn!(?action, error = %e, "row action failed");
            state.anchor.write().discard();
            platform.alert(&e.user_message(action.failure_text()));
        }
    }
}

#[component]
pub fn CharactersGmView() -> Element {
    let platform = use_platform();
    let catalog = use_catalog_service();
    let characters = use_character_service();
    let mut state = use_hook(GmRosterState::new);

    // Initial load.
    {
        let catalog = catalog.clone();
        let characters = characters.clone();
        use_effect(move || {
            let catalog = catalog.clone();
            let characters = characters.clone();
            spawn_task(async move { reload(state, &catalog, &characters).await });
        });
    }

    // Put the viewport back where it was once a reload has painted.
    {
        let platform = platform.clone();
        use_effect(move || {
            let _ = state.snapshot.read();
            let mut anchor = *state.anchor.peek();
            if anchor.is_pending() {
                anchor.restore(platform.as_ref());
                state.anchor.set(anchor);
            }
        });
    }

    let row_action = {
        let platform = platform.clone();
        let catalog = catalog.clone();
        let characters = characters.clone();
        use_callback(move |action: RowAction| {
            spawn_task(run_row_action(
                action,
                state,
                platform.clone(),
                catalog.clone(),
                characters.clone(),
            ));
        })
    };

    let submit = {
        let catalog = catalog.clone();
        let characters = characters.clone();
        use_callback(move |_: ()| {
            let Some(started) = state.form.write().begin_submit() else {
                return;
            };
            let (mode, payload) = match started {
                Ok(started) => started,
                Err(e) => {
                    state.banner.set(Some(e.user_message(SAVE_FALLBACK)));
                    return;
                }
            };
            let catalog = catalog.clone();
            let characters = characters.clone();
            spawn_task(async move {
                let result = match mode {
                    FormMode::Create => characters.create(&payload).await,
                    FormMode::Edit(id) => characters.update(id, &payload).await,
                };
                match result {
                    Ok(()) => {
                        state.form.write().reset();
                        reload(state, &catalog, &characters).await;
                    }
                    Err(e) => {
                        state.form.write().finish_submit();
                        state.banner.set(Some(e.user_message(SAVE_FALLBACK)));
                    }
                }
            });
        })
    };

    let begin_edit = {
        let platform = platform.clone();
        use_callback(move |character: Character| {
            let catalogs = state.snapshot.peek().catalogs.clone();
            state.form.write().begin_edit(&character, &catalogs);
            // The form sits at the top of the page.
            platform.scroll_to_top();
        })
    };

    let snapshot = state.snapshot.read();
    let options = state.options.read();

    rsx! {
        div {
            class: "characters-view",

            AlertBanner { message: state.banner.read().clone() }

            CharacterEditor {
                form: state.form.read().clone(),
                catalogs: snapshot.catalogs.clone(),
                on_change: move |next| state.form.set(next),
                on_submit: move |_| submit.call(()),
                on_cancel: move |_| state.form.write().reset(),
            }

            section {
                class: "roster",
                h2 { "All characters" }

                if *state.loading.read() {
                    p { class: "empty-state", "Loading..." }
                } else if snapshot.roster.is_empty() {
                    p { class: "empty-state", "No characters yet." }
                }

                for character in snapshot.roster.iter().cloned() {
                    CharacterCard {
                        key: "{character.id}",
                        character: character.clone(),
                        show_offered: true,
                        show_selection: true,
                        GmRowControls {
                            character: character.clone(),
                            on_action: row_action,
                            on_edit: begin_edit,
                        }
                        SkillOptionsEditor {
                            skills: snapshot.catalogs.skills.clone(),
                            draft: options.get(character.id),
                            on_slot: {
                                let id = character.id;
                                move |(slot, value)| state.options.write().set_slot(id, slot, value)
                            },
                            on_save: {
                                let id = character.id;
                                move |_| row_action.call(RowAction::SaveOptions(id))
                            },
                        }
                    }
                }
            }

            section {
                class: "pool",
                h2 { "Available pool" }
                if snapshot.available.is_empty() {
                    p { class: "empty-state", "No characters available." }
                } else {
                    ul {
                        for character in snapshot.available.iter() {
                            li { key: "{character.id}", "{character.name} (level {character.level})" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GmRowControls(
    character: Character,
    on_action: Callback<RowAction>,
    on_edit: Callback<Character>,
) -> Element {
    let id = character.id;
    let dead = character.state.is_dead();
    let owned = character.is_owned();
    let current_state = character.state.as_wire_str();

    rsx! {
        div {
            class: "row-controls",
            button {
                class: "btn btn-secondary",
                onclick: move |_| on_edit.call(character.clone()),
                "Edit"
            }
            button {
                class: "btn btn-secondary",
                disabled: dead,
                onclick: move |_| on_action.call(RowAction::LevelUp(id)),
                "Level up"
            }
            select {
                value: "{current_state}",
                onchange: move |e| {
                    if let Ok(next) = e.value().parse::<CharacterState>() {
                        on_action.call(RowAction::ChangeState(id, next));
                    }
                },
                for option_state in CharacterState::ALL {
                    option {
                        key: "{option_state.as_wire_str()}",
                        value: "{option_state.as_wire_str()}",
                        selected: option_state.as_wire_str() == current_state,
                        "{option_state}"
                    }
                }
            }
            if owned {
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_action.call(RowAction::Release(id)),
                    "Release"
                }
            }
            button {
                class: "btn btn-danger",
                onclick: move |_| on_action.call(RowAction::Delete(id)),
                "Delete"
            }
        }
    }
}

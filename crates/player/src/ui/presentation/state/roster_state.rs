//! Roster state for the two character views

use dioxus::prelude::*;

use crate::application::view_models::{
    CharacterForm, GmSnapshot, OptionDrafts, PlayerSnapshot, ScrollAnchor, SelectionDrafts,
};
use crate::application::ClientError;

const LOAD_FALLBACK: &str = "Could not load characters.";

/// Everything the GM roster view renders or drafts.
#[derive(Clone, Copy)]
pub struct GmRosterState {
    pub snapshot: Signal<GmSnapshot>,
    /// Offered-skill drafts, reseeded from every reload
    pub options: Signal<OptionDrafts>,
    pub form: Signal<CharacterForm>,
    /// Form-level and load errors
    pub banner: Signal<Option<String>>,
    pub anchor: Signal<ScrollAnchor>,
    pub loading: Signal<bool>,
}

impl GmRosterState {
    pub fn new() -> Self {
        Self {
            snapshot: Signal::new(GmSnapshot::default()),
            options: Signal::new(OptionDrafts::default()),
            form: Signal::new(CharacterForm::default()),
            banner: Signal::new(None),
            anchor: Signal::new(ScrollAnchor::default()),
            loading: Signal::new(true),
        }
    }

    /// Replace the view's data with a reload result. On failure the previous
    /// data stays on screen under an error banner and any captured scroll
    /// offset is dropped, since nothing new will paint.
    pub fn apply(&mut self, result: Result<GmSnapshot, ClientError>) {
        match result {
            Ok(snapshot) => {
                self.options.set(snapshot.option_drafts());
                self.snapshot.set(snapshot);
                self.banner.set(None);
            }
            Err(e) => {
                tracing::warn!(error = %e, "gm roster reload failed");
                self.anchor.write().discard();
                self.banner.set(Some(e.user_message(LOAD_FALLBACK)));
            }
        }
        self.loading.set(false);
    }
}

#[derive(Clone, Copy)]
pub struct PlayerRosterState {
    pub snapshot: Signal<PlayerSnapshot>,
    pub selections: Signal<SelectionDrafts>,
    pub banner: Signal<Option<String>>,
    pub loading: Signal<bool>,
}

impl PlayerRosterState {
    pub fn new() -> Self {
        Self {
            snapshot: Signal::new(PlayerSnapshot::default()),
            selections: Signal::new(SelectionDrafts::default()),
            banner: Signal::new(None),
            loading: Signal::new(true),
        }
    }

    pub fn apply(&mut self, result: Result<PlayerSnapshot, ClientError>) {
        match result {
            Ok(snapshot) => {
                self.selections.set(snapshot.selection_drafts());
                self.snapshot.set(snapshot);
                self.banner.set(None);
            }
            Err(e) => {
                tracing::warn!(error = %e, "player roster reload failed");
                self.banner.set(Some(e.user_message(LOAD_FALLBACK)));
            }
        }
        self.loading.set(false);
    }
}

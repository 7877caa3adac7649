//! Full-state reloads for the two character views
//!
//! Each view loads everything it shows in one concurrent, all-or-nothing
//! join and replaces its state wholesale with the result.

use futures_util::future::try_join3;

use roster_domain::Character;

use crate::application::error::ClientError;
use crate::application::services::{CatalogLists, CatalogService, CharacterService};
use crate::application::view_models::{OptionDrafts, SelectionDrafts};

/// Everything the GM roster view renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GmSnapshot {
    pub catalogs: CatalogLists,
    pub roster: Vec<Character>,
    pub available: Vec<Character>,
}

impl GmSnapshot {
    pub async fn load(
        catalog: &CatalogService,
        characters: &CharacterService,
    ) -> Result<Self, ClientError> {
        let (catalogs, roster, available) =
            try_join3(catalog.list_all(), characters.list(), characters.available()).await?;
        tracing::debug!(roster = roster.len(), available = available.len(), "gm state loaded");
        Ok(Self {
            catalogs,
            roster,
            available,
        })
    }

    pub fn option_drafts(&self) -> OptionDrafts {
        OptionDrafts::seed(&self.roster)
    }
}

/// Everything the player view renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerSnapshot {
    pub mine: Vec<Character>,
    pub available: Vec<Character>,
}

impl PlayerSnapshot {
    pub async fn load(characters: &CharacterService) -> Result<Self, ClientError> {
        let (mine, available) =
            futures_util::future::try_join(characters.list(), characters.available()).await?;
        tracing::debug!(mine = mine.len(), available = available.len(), "player state loaded");
        Ok(Self { mine, available })
    }

    pub fn selection_drafts(&self) -> SelectionDrafts {
        SelectionDrafts::seed(&self.mine)
    }
}

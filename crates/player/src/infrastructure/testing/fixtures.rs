//! Simple test fixtures used across unit tests.

use roster_domain::{CatalogEntry, CatalogRef, Character, CharacterId, CharacterState};

use crate::ports::outbound::ApiError;

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

pub fn api_rejection(status: u16, body: &str) -> ApiError {
    ApiError::HttpError {
        status,
        body: body.to_string(),
    }
}

/// An unowned, freshly created character.
pub fn character(id: i64, name: &str) -> Character {
    Character {
        id: CharacterId::new(id),
        name: name.to_string(),
        level: 1,
        state: CharacterState::Alive,
        race: CatalogRef::default(),
        power: CatalogRef::default(),
        equipment: CatalogRef::default(),
        owner: None,
        options_offered: Vec::new(),
        selection: Vec::new(),
    }
}

pub fn entries(raw: &[(i64, &str)]) -> Vec<CatalogEntry> {
    raw.iter().map(|(id, name)| CatalogEntry::new(*id, *name)).collect()
}

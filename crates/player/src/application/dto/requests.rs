//! Application-layer request DTOs
//!
//! Built by services from validated domain values, so every request that
//! reaches the wire has already passed the client-side checks.

use serde::{Deserialize, Serialize};

use roster_domain::{CatalogEntryId, CharacterState, SkillOptions, SkillSelection};

// ============================================================================
// Auth Requests
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
}

// ============================================================================
// Catalog Requests
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateCatalogEntryRequest {
    #[serde(rename = "nombre")]
    pub name: String,
}

// ============================================================================
// Character Requests
// ============================================================================

/// Full field set for character create and edit; unset references go as `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "raza")]
    pub race: Option<CatalogEntryId>,
    #[serde(rename = "poder")]
    pub power: Option<CatalogEntryId>,
    #[serde(rename = "equipamiento")]
    pub equipment: Option<CatalogEntryId>,
}

/// The GM's three offered-skill slots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetOptionsRequest {
    pub opcion_hab1: Option<CatalogEntryId>,
    pub opcion_hab2: Option<CatalogEntryId>,
    pub opcion_hab3: Option<CatalogEntryId>,
}

impl From<&SkillOptions> for SetOptionsRequest {
    fn from(options: &SkillOptions) -> Self {
        let [opcion_hab1, opcion_hab2, opcion_hab3] = options.slots();
        Self {
            opcion_hab1,
            opcion_hab2,
            opcion_hab3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChooseSkillsRequest {
    #[serde(rename = "habilidades")]
    pub skills: Vec<CatalogEntryId>,
}

impl From<&SkillSelection> for ChooseSkillsRequest {
    fn from(selection: &SkillSelection) -> Self {
        Self {
            skills: selection.ids().to_vec(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeStateRequest {
    #[serde(rename = "estado")]
    pub state: CharacterState,
}

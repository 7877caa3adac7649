//! Application-layer response DTOs

use serde::{Deserialize, Serialize};

use roster_domain::{
    CatalogEntry, CatalogEntryId, CatalogRef, Character, CharacterId, CharacterState,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, rename = "usuario")]
    pub username: Option<String>,
    #[serde(rename = "rol")]
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterTokens {
    pub access: String,
}

/// Registration answers with either `{tokens: {access}}` or a flat `{access}`.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub tokens: Option<RegisterTokens>,
    #[serde(default)]
    pub access: Option<String>,
}

impl RegisterResponse {
    pub fn access_token(self) -> Option<String> {
        self.tokens
            .map(|t| t.access)
            .or(self.access)
            .filter(|token| !token.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntryDto {
    pub id: CatalogEntryId,
    #[serde(rename = "nombre")]
    pub name: String,
}

impl From<CatalogEntryDto> for CatalogEntry {
    fn from(dto: CatalogEntryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}

/// Character as listed by `/personajes/` and `/personajes/disponibles/`.
///
/// List responses carry the names of the race/power/equipment; the ids are
/// only present on some backends, hence the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterDto {
    pub id: CharacterId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "nivel", default = "first_level")]
    pub level: u32,
    #[serde(rename = "estado", default)]
    pub state: CharacterState,
    #[serde(rename = "raza", default)]
    pub race_id: Option<CatalogEntryId>,
    #[serde(rename = "raza_nombre", default)]
    pub race_name: Option<String>,
    #[serde(rename = "poder", default)]
    pub power_id: Option<CatalogEntryId>,
    #[serde(rename = "poder_nombre", default)]
    pub power_name: Option<String>,
    #[serde(rename = "equipamiento", default)]
    pub equipment_id: Option<CatalogEntryId>,
    #[serde(rename = "equipamiento_nombre", default)]
    pub equipment_name: Option<String>,
    #[serde(rename = "propietario_username", default)]
    pub owner: Option<String>,
    #[serde(rename = "opciones", default)]
    pub options: Vec<CatalogEntryDto>,
    #[serde(rename = "seleccion", default)]
    pub selection: Vec<CatalogEntryDto>,
}

fn first_level() -> u32 {
    1
}

impl From<CharacterDto> for Character {
    fn from(dto: CharacterDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            level: dto.level.max(1),
            state: dto.state,
            race: CatalogRef {
                id: dto.race_id,
                name: dto.race_name,
            },
            power: CatalogRef {
                id: dto.power_id,
                name: dto.power_name,
            },
            equipment: CatalogRef {
                id: dto.equipment_id,
                name: dto.equipment_name,
            },
            owner: dto.owner.filter(|o| !o.is_empty()),
            options_offered: dto.options.into_iter().map(Into::into).collect(),
            selection: dto.selection.into_iter().map(Into::into).collect(),
        }
    }
}

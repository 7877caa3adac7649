//! Character lifecycle state enum

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;

/// Character lifecycle state
///
/// The GM may move a character between any two states; the backend refuses
/// level-ups and skill changes for dead characters.
///
/// ```text
/// Alive <-> Frozen
/// Alive <-> Dead
/// Frozen <-> Dead
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CharacterState {
    #[default]
    #[serde(rename = "VIVO")]
    Alive,
    #[serde(rename = "CONGELADO")]
    Frozen,
    #[serde(rename = "MUERTO")]
    Dead,
}

impl CharacterState {
    /// Every state, in the order the GM controls show them.
    pub const ALL: [CharacterState; 3] = [Self::Alive, Self::Frozen, Self::Dead];

    /// Wire tag understood by the backend.
    pub fn as_wire_str(self) -> &'static str {
        match self {
            Self::Alive => "VIVO",
            Self::Frozen => "CONGELADO",
            Self::Dead => "MUERTO",
        }
    }

    #[inline]
    pub fn is_dead(self) -> bool {
        matches!(self, Self::Dead)
    }
}

impl std::fmt::Display for CharacterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alive => write!(f, "Alive"),
            Self::Frozen => write!(f, "Frozen"),
            Self::Dead => write!(f, "Dead"),
        }
    }
}

impl FromStr for CharacterState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "VIVO" | "ALIVE" => Ok(Self::Alive),
            "CONGELADO" | "FROZEN" => Ok(Self::Frozen),
            "MUERTO" | "DEAD" => Ok(Self::Dead),
            other => Err(DomainError::parse(format!("Unknown character state: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_alive() {
        assert_eq!(CharacterState::default(), CharacterState::Alive);
    }

    #[test]
    fn wire_tags_match_serde() {
        for state in CharacterState::ALL {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.as_wire_str()));
        }
    }

    #[test]
    fn from_str_accepts_wire_and_display_forms() {
        assert_eq!("MUERTO".parse::<CharacterState>().unwrap(), CharacterState::Dead);
        assert_eq!("frozen".parse::<CharacterState>().unwrap(), CharacterState::Frozen);
        assert!("ZOMBIE".parse::<CharacterState>().is_err());
    }
}

//! Session role of the signed-in user.

use serde::{Deserialize, Serialize};

/// Role of the signed-in user, as reported by the backend's whoami call.
///
/// Closed two-variant type: every role-conditional branch in the client
/// matches on this exhaustively instead of comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Game Master - curates the catalog and the roster
    #[serde(rename = "GM")]
    Gm,
    /// Player - claims characters and picks skills
    #[serde(rename = "JUGADOR")]
    Player,
}

impl Role {
    /// Tag used by the backend and in persisted client storage.
    pub fn as_tag(self) -> &'static str {
        match self {
            Role::Gm => "GM",
            Role::Player => "JUGADOR",
        }
    }

    /// Interpret a backend/storage tag.
    ///
    /// Only the exact `GM` tag grants GM; anything else (including an empty
    /// or unknown tag) is a player, which is the least-privileged reading.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim() == "GM" {
            Role::Gm
        } else {
            Role::Player
        }
    }

    pub fn is_gm(self) -> bool {
        matches!(self, Role::Gm)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Gm => write!(f, "GM"),
            Role::Player => write!(f, "Player"),
        }
    }
}

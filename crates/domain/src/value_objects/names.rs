//! Validated name newtypes for catalog entries and characters
//!
//! These newtypes carry only the client-side presence/length checks; the
//! backend applies its own (stricter) rules and its message is shown verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length accepted by the name inputs
pub const MAX_NAME_LENGTH: usize = 50;

fn validated(name: &str, label: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{label} cannot be empty.")));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "{label} cannot exceed {MAX_NAME_LENGTH} characters."
        )));
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// CatalogName
// ============================================================================

/// A validated catalog entry name (non-empty, <=50 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CatalogName(String);

impl CatalogName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validated(&name.into(), "Name").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CatalogName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CatalogName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CatalogName> for String {
    fn from(name: CatalogName) -> String {
        name.0
    }
}

// ============================================================================
// CharacterName
// ============================================================================

/// A validated character name (non-empty, <=50 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validated(&name.into(), "Character name").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}

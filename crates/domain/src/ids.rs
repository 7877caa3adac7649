use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifiers are plain integers; the client never mints them.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self).map_err(|_| {
                    crate::error::DomainError::invalid_id(format!(
                        "{} must be an integer, got {:?}",
                        stringify!($name),
                        s
                    ))
                })
            }
        }
    };
}

define_id!(CharacterId);
define_id!(CatalogEntryId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_from_form_values() {
        let id: CharacterId = " 42 ".parse().unwrap();
        assert_eq!(id.get(), 42);
        assert!("".parse::<CatalogEntryId>().is_err());
        assert!("abc".parse::<CatalogEntryId>().is_err());
    }

    #[test]
    fn ids_serialize_as_bare_integers() {
        let json = serde_json::to_string(&CatalogEntryId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: CatalogEntryId = serde_json::from_str("7").unwrap();
        assert_eq!(back, CatalogEntryId::new(7));
    }
}

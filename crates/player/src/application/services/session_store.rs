//! Session store: the access credential and the role that came with it
//!
//! Both live in platform storage under the fixed `token` / `rol` keys, so a
//! session survives a reload and is only dropped by an explicit `clear()`.

use roster_domain::Role;

use crate::ports::outbound::{storage_keys, CredentialPort, StorageProvider};
use crate::state::PlatformStorageAdapter;

/// What the route guard and the header need to know about the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub role: Option<Role>,
}

impl SessionSnapshot {
    pub fn is_gm(&self) -> bool {
        self.role.is_some_and(Role::is_gm)
    }
}

/// Credential + role persistence.
///
/// A role is only meaningful next to the credential that produced it:
/// storing a new credential forgets the old role, and no role is reported
/// while there is no credential.
#[derive(Clone)]
pub struct SessionStore<S: StorageProvider = PlatformStorageAdapter> {
    storage: S,
}

impl<S: StorageProvider> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn set_credential(&self, token: &str) {
        self.storage.remove(storage_keys::ROLE);
        self.storage.save(storage_keys::TOKEN, token);
    }

    pub fn credential(&self) -> Option<String> {
        self.storage
            .load(storage_keys::TOKEN)
            .filter(|token| !token.is_empty())
    }

    pub fn set_role(&self, role: Role) {
        self.storage.save(storage_keys::ROLE, role.as_tag());
    }

    pub fn role(&self) -> Option<Role> {
        self.credential()?;
        self.storage
            .load(storage_keys::ROLE)
            .map(|tag| Role::from_tag(&tag))
    }

    /// Drop both the credential and the role.
    pub fn clear(&self) {
        self.storage.remove(storage_keys::TOKEN);
        self.storage.remove(storage_keys::ROLE);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            authenticated: self.credential().is_some(),
            role: self.role(),
        }
    }
}

impl<S: StorageProvider + Send + Sync> CredentialPort for SessionStore<S> {
    fn bearer_token(&self) -> Option<String> {
        self.credential()
    }
}

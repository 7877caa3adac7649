//! Credential Port - where the HTTP adapter gets its bearer token from

/// Source of the current access credential.
///
/// Absence of a credential is not an error: the request goes out without an
/// `Authorization` header and the backend decides.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait CredentialPort: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

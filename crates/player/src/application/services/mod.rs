//! Application services
//!
//! Services implement the client's use cases on top of the typed `Api` and
//! the session store. They depend on port traits, not concrete
//! infrastructure implementations.

pub mod auth_service;
pub mod catalog_service;
pub mod character_service;
pub mod session_store;

pub use auth_service::{
    login_failure_message, register_failure_message, AuthService, LoginForm, RegisterForm,
};
pub use catalog_service::{collection_path, CatalogLists, CatalogService};
pub use character_service::CharacterService;
pub use session_store::{SessionSnapshot, SessionStore};

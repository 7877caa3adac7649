//! Service providers for the presentation layer
//!
//! This module provides Dioxus context providers for application services.
//! Components can use `use_context` to access services without depending
//! on infrastructure implementations.
//!
//! ## Architecture Note
//!
//! The presentation layer depends on application-level services and port traits.
//! It should not depend directly on infrastructure adapter types.
use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::Api;
use crate::application::services::{AuthService, CatalogService, CharacterService, SessionStore};

/// All services wrapped for context provision
///
/// Every service shares one `Api`, whose transport reads the bearer token
/// from the same `SessionStore` handed to the auth service.
#[derive(Clone)]
pub struct Services {
    pub session: SessionStore,
    pub auth: Arc<AuthService>,
    pub catalog: Arc<CatalogService>,
    pub character: Arc<CharacterService>,
}

impl Services {
    pub fn new(api: Api, session: SessionStore) -> Self {
        Self {
            auth: Arc::new(AuthService::new(api.clone(), session.clone())),
            catalog: Arc::new(CatalogService::new(api.clone())),
            character: Arc::new(CharacterService::new(api)),
            session,
        }
    }
}

/// Hook to access the SessionStore from context
pub fn use_session() -> SessionStore {
    let services = use_context::<Services>();
    services.session.clone()
}

/// Hook to access the AuthService from context
pub fn use_auth_service() -> Arc<AuthService> {
    let services = use_context::<Services>();
    services.auth.clone()
}

/// Hook to access the CatalogService from context
pub fn use_catalog_service() -> Arc<CatalogService> {
    let services = use_context::<Services>();
    services.catalog.clone()
}

/// Hook to access the CharacterService from context
pub fn use_character_service() -> Arc<CharacterService> {
    let services = use_context::<Services>();
    services.character.clone()
}

//! Shared wiring for the flow tests.

use std::sync::Arc;

use roster_domain::{CatalogKind, CatalogName, Character, Role};

use crate::application::api::Api;
use crate::application::services::{
    AuthService, CatalogService, CharacterService, LoginForm, SessionStore,
};
use crate::infrastructure::platform::mock::InMemoryStorageProvider;
use crate::infrastructure::testing::FakeBackend;

pub const GM: (&str, &str) = ("gm", "gm-secret");
pub const PLAYER: (&str, &str) = ("ana", "ana-secret");

/// One browser tab: its own storage, its own services, a shared backend.
pub struct TestSession {
    pub session: SessionStore<InMemoryStorageProvider>,
    pub auth: AuthService<InMemoryStorageProvider>,
    pub catalog: CatalogService,
    pub characters: CharacterService,
}

pub fn backend() -> FakeBackend {
    FakeBackend::new()
        .with_user(GM.0, GM.1, Role::Gm)
        .with_user(PLAYER.0, PLAYER.1, Role::Player)
}

pub fn open_session(backend: &FakeBackend) -> TestSession {
    let session = SessionStore::new(InMemoryStorageProvider::default());
    let api = Api::new(Arc::new(backend.client(Arc::new(session.clone()))));
    TestSession {
        auth: AuthService::new(api.clone(), session.clone()),
        catalog: CatalogService::new(api.clone()),
        characters: CharacterService::new(api),
        session,
    }
}

pub async fn logged_in(backend: &FakeBackend, (username, password): (&str, &str)) -> TestSession {
    let tab = open_session(backend);
    tab.auth
        .login(&LoginForm {
            username: username.into(),
            password: password.into(),
        })
        .await
        .expect("fixture login");
    tab
}

pub async fn create_entry(tab: &TestSession, kind: CatalogKind, name: &str) {
    tab.catalog
        .create(kind, &CatalogName::new(name).expect("valid name"))
        .await
        .expect("fixture catalog create");
}

pub fn named<'a>(characters: &'a [Character], name: &str) -> Option<&'a Character> {
    characters.iter().find(|c| c.name == name)
}

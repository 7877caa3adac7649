//! In-memory backend speaking the REST contract the client consumes
//!
//! One `FakeBackend` holds users, tokens, catalogs and characters; each
//! `FakeClient` is a `RawApiPort` reading its bearer token from a
//! `CredentialPort`, so several sessions can share one backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use roster_domain::{CharacterState, Role};

use crate::ports::outbound::{ApiError, CredentialPort, RawApiPort};

const COLLECTIONS: [&str; 4] = ["razas", "habilidades", "poderes", "equipamientos"];

#[derive(Clone, Debug)]
struct User {
    id: i64,
    username: String,
    password: String,
    role: Role,
}

#[derive(Clone, Debug)]
struct Record {
    id: i64,
    name: String,
    level: u32,
    state: CharacterState,
    race: Option<i64>,
    power: Option<i64>,
    equipment: Option<i64>,
    owner: Option<i64>,
    options: [Option<i64>; 3],
    selection: Vec<i64>,
}

#[derive(Default)]
struct State {
    next_id: i64,
    users: Vec<User>,
    tokens: HashMap<String, i64>,
    catalogs: HashMap<String, Vec<(i64, String)>>,
    characters: Vec<Record>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn issue_token(&mut self, user_id: i64) -> String {
        let token = format!("token-{}-{}", user_id, self.next_id());
        self.tokens.insert(token.clone(), user_id);
        token
    }

    fn catalog_name(&self, collection: &str, id: Option<i64>) -> Value {
        id.and_then(|id| {
            self.catalogs
                .get(collection)?
                .iter()
                .find(|(entry_id, _)| *entry_id == id)
                .map(|(_, name)| Value::String(name.clone()))
        })
        .unwrap_or(Value::Null)
    }

    fn entry(&self, id: i64) -> Value {
        let name = self.catalog_name("habilidades", Some(id));
        json!({"id": id, "nombre": name})
    }

    fn render(&self, record: &Record) -> Value {
        let owner = record
            .owner
            .and_then(|id| self.users.iter().find(|u| u.id == id))
            .map(|u| Value::String(u.username.clone()))
            .unwrap_or(Value::Null);
        json!({
            "id": record.id,
            "nombre": record.name,
            "nivel": record.level,
            "estado": record.state,
            "raza_nombre": self.catalog_name("razas", record.race),
            "poder_nombre": self.catalog_name("poderes", record.power),
            "equipamiento_nombre": self.catalog_name("equipamientos", record.equipment),
            "propietario_username": owner,
            "opciones": record.options.iter().flatten().map(|id| self.entry(*id)).collect::<Vec<_>>(),
            "seleccion": record.selection.iter().map(|id| self.entry(*id)).collect::<Vec<_>>(),
        })
    }
}

fn reject(status: u16, body: Value) -> ApiError {
    ApiError::HttpError {
        status,
        body: body.to_string(),
    }
}

fn not_authenticated() -> ApiError {
    reject(
        401,
        json!({"detail": "Authentication credentials were not provided."}),
    )
}

fn forbidden() -> ApiError {
    reject(
        403,
        json!({"detail": "You do not have permission to perform this action."}),
    )
}

fn not_found() -> ApiError {
    reject(404, json!({"detail": "Not found."}))
}

fn field<'a>(body: Option<&'a Value>, name: &str) -> Option<&'a Value> {
    body?.get(name)
}

fn text(body: Option<&Value>, name: &str) -> String {
    field(body, name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn opt_id(body: Option<&Value>, name: &str) -> Option<i64> {
    field(body, name).and_then(Value::as_i64)
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<State>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, username: &str, password: &str, role: Role) -> Self {
        let _ = self.with_state(|state| {
            let id = state.next_id();
            state.users.push(User {
                id,
                username: username.to_string(),
                password: password.to_string(),
                role,
            });
            Ok(())
        });
        self
    }

    /// A client whose requests carry whatever `credentials` yields.
    pub fn client(&self, credentials: Arc<dyn CredentialPort>) -> FakeClient {
        FakeClient {
            backend: self.clone(),
            credentials,
        }
    }

    /// Insert an unowned character directly, bypassing permissions.
    pub fn seed_character(&self, name: &str) -> i64 {
        self.with_state(|state| {
            let id = state.next_id();
            state.characters.push(Record {
                id,
                name: name.to_string(),
                level: 1,
                state: CharacterState::Alive,
                race: None,
                power: None,
                equipment: None,
                owner: None,
                options: [None; 3],
                selection: Vec::new(),
            });
            Ok(id)
        })
        .unwrap_or_default()
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut State) -> Result<R, ApiError>) -> Result<R, ApiError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ApiError::RequestFailed("fake backend poisoned".into()))?;
        f(&mut state)
    }

    fn handle(
        &self,
        method: &str,
        path: &str,
        token: Option<String>,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        self.with_state(|state| {
            let caller = token
                .as_deref()
                .and_then(|t| state.tokens.get(t).copied())
                .and_then(|id| state.users.iter().find(|u| u.id == id).cloned());

            match (method, segments.as_slice()) {
                ("POST", ["token"]) => login(state, body),
                ("POST", ["auth", "register"]) => register(state, body),
                ("GET", ["yo"]) => {
                    let user = caller.ok_or_else(not_authenticated)?;
                    Ok(json!({"id": user.id, "usuario": user.username, "rol": user.role}))
                }
                (_, [collection]) if COLLECTIONS.contains(collection) => {
                    let user = caller.ok_or_else(not_authenticated)?;
                    if !user.role.is_gm() {
                        return Err(forbidden());
                    }
                    catalog(state, method, collection, body)
                }
                (_, ["personajes", rest @ ..]) => {
                    let user = caller.ok_or_else(not_authenticated)?;
                    characters(state, &user, method, rest, body)
                }
                _ => Err(not_found()),
            }
        })
    }
}

fn login(state: &mut State, body: Option<&Value>) -> Result<Value, ApiError> {
    let username = text(body, "username");
    let password = text(body, "password");
    let user_id = state
        .users
        .iter()
        .find(|u| u.username == username && u.password == password)
        .map(|u| u.id)
        .ok_or_else(|| {
            reject(
                401,
                json!({"detail": "No active account found with the given credentials"}),
            )
        })?;
    let access = state.issue_token(user_id);
    Ok(json!({"access": access, "refresh": "unused"}))
}

fn register(state: &mut State, body: Option<&Value>) -> Result<Value, ApiError> {
    let username = text(body, "username");
    if state
        .users
        .iter()
        .any(|u| u.username.eq_ignore_ascii_case(&username))
    {
        return Err(reject(400, json!({"username": ["That username already exists."]})));
    }
    if text(body, "password") != text(body, "password2") {
        return Err(reject(400, json!({"password2": ["Passwords do not match."]})));
    }
    let id = state.next_id();
    state.users.push(User {
        id,
        username: username.clone(),
        password: text(body, "password"),
        role: Role::Player,
    });
    let access = state.issue_token(id);
    Ok(json!({
        "user": {"id": id, "username": username, "rol": Role::Player},
        "tokens": {"refresh": "unused", "access": access}
    }))
}

fn catalog(
    state: &mut State,
    method: &str,
    collection: &str,
    body: Option<&Value>,
) -> Result<Value, ApiError> {
    match method {
        "GET" => {
            let entries = state.catalogs.get(collection).cloned().unwrap_or_default();
            Ok(Value::Array(
                entries
                    .into_iter()
                    .map(|(id, name)| json!({"id": id, "nombre": name}))
                    .collect(),
            ))
        }
        "POST" => {
            let name = text(body, "nombre");
            if name.trim().is_empty() {
                return Err(reject(400, json!({"nombre": ["This field may not be blank."]})));
            }
            let id = state.next_id();
            state
                .catalogs
                .entry(collection.to_string())
                .or_default()
                .push((id, name.clone()));
            Ok(json!({"id": id, "nombre": name}))
        }
        _ => Err(not_found()),
    }
}

fn characters(
    state: &mut State,
    user: &User,
    method: &str,
    rest: &[&str],
    body: Option<&Value>,
) -> Result<Value, ApiError> {
    let gm = user.role.is_gm();
    match (method, rest) {
        ("GET", []) => {
            let visible: Vec<Value> = state
                .characters
                .iter()
                .filter(|c| gm || c.owner == Some(user.id))
                .map(|c| state.render(c))
                .collect();
            Ok(Value::Array(visible))
        }
        ("GET", ["disponibles"]) => {
            let pool: Vec<Value> = state
                .characters
                .iter()
                .filter(|c| c.owner.is_none())
                .map(|c| state.render(c))
                .collect();
            Ok(Value::Array(pool))
        }
        ("POST", []) => {
            if !gm {
                return Err(forbidden());
            }
            let id = state.next_id();
            let record = Record {
                id,
                name: text(body, "nombre"),
                level: 1,
                state: CharacterState::Alive,
                race: opt_id(body, "raza"),
                power: opt_id(body, "poder"),
                equipment: opt_id(body, "equipamiento"),
                owner: None,
                options: [None; 3],
                selection: Vec::new(),
            };
            let rendered = state.render(&record);
            state.characters.push(record);
            Ok(rendered)
        }
        (_, [id, action @ ..]) => {
            let id: i64 = id.parse().map_err(|_| not_found())?;
            let index = state
                .characters
                .iter()
                .position(|c| c.id == id)
                .ok_or_else(not_found)?;
            character_action(state, user, method, index, action, body)
        }
        _ => Err(not_found()),
    }
}

fn character_action(
    state: &mut State,
    user: &User,
    method: &str,
    index: usize,
    action: &[&str],
    body: Option<&Value>,
) -> Result<Value, ApiError> {
    let gm = user.role.is_gm();
    let owned = state.characters[index].owner == Some(user.id);
    let dead = state.characters[index].state.is_dead();
    let record = &mut state.characters[index];

    match (method, action) {
        ("POST", ["elegir"]) => {
            if record.owner.is_some() {
                return Err(reject(400, json!({"detalle": "This character already has an owner."})));
            }
            if dead {
                return Err(reject(400, json!({"detalle": "You cannot pick a dead character."})));
            }
            record.owner = Some(user.id);
            Ok(json!({"ok": true}))
        }
        _ if !gm && !owned => Err(not_found()),
        ("PATCH", []) => {
            if !gm {
                return Err(forbidden());
            }
            record.name = text(body, "nombre");
            record.race = opt_id(body, "raza");
            record.power = opt_id(body, "poder");
            record.equipment = opt_id(body, "equipamiento");
            Ok(json!({"id": record.id}))
        }
        ("DELETE", []) => {
            if !gm {
                return Err(forbidden());
            }
            state.characters.remove(index);
            Ok(Value::Null)
        }
        ("PATCH", ["set-opciones"]) => {
            if !gm {
                return Err(forbidden());
            }
            record.options = [
                opt_id(body, "opcion_hab1"),
                opt_id(body, "opcion_hab2"),
                opt_id(body, "opcion_hab3"),
            ];
            let offered: Vec<i64> = record.options.iter().flatten().copied().collect();
            record.selection.retain(|id| offered.contains(id));
            Ok(json!({"ok": true}))
        }
        ("POST", ["elegir-habilidades"]) => {
            if !owned {
                return Err(forbidden());
            }
            if dead {
                return Err(reject(400, json!({"detalle": "Dead characters cannot change skills."})));
            }
            let picked: Vec<i64> = field(body, "habilidades")
                .and_then(Value::as_array)
                .map(|ids| ids.iter().filter_map(Value::as_i64).collect())
                .unwrap_or_default();
            let offered: Vec<i64> = record.options.iter().flatten().copied().collect();
            if picked.len() != 2 || picked[0] == picked[1] {
                return Err(reject(
                    400,
                    json!({"non_field_errors": ["You must pick exactly 2 different skills."]}),
                ));
            }
            if !picked.iter().all(|id| offered.contains(id)) {
                return Err(reject(
                    400,
                    json!({"non_field_errors": ["Chosen skills must be among the offered options."]}),
                ));
            }
            record.selection = picked;
            Ok(json!({"ok": true}))
        }
        ("POST", ["subir_nivel"]) if gm => {
            if dead {
                return Err(reject(400, json!({"detalle": "A dead character cannot level up."})));
            }
            record.level += 1;
            Ok(json!({"ok": true, "nivel": record.level}))
        }
        ("POST", ["cambiar_estado"]) if gm => {
            let next: CharacterState = field(body, "estado")
                .cloned()
                .and_then(|v| serde_json::from_value(v).ok())
                .ok_or_else(|| reject(400, json!({"detalle": "Invalid state."})))?;
            record.state = next;
            Ok(json!({"ok": true, "estado": next}))
        }
        ("POST", ["liberar"]) if gm => {
            record.owner = None;
            record.selection.clear();
            Ok(json!({"ok": true}))
        }
        ("POST", _) => Err(forbidden()),
        _ => Err(not_found()),
    }
}

/// `RawApiPort` over a shared `FakeBackend`.
#[derive(Clone)]
pub struct FakeClient {
    backend: FakeBackend,
    credentials: Arc<dyn CredentialPort>,
}

impl FakeClient {
    fn call(&self, method: &str, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        self.backend
            .handle(method, path, self.credentials.bearer_token(), body)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RawApiPort for FakeClient {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.call("GET", path, None)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.call("POST", path, Some(body))
    }

    async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        self.call("POST", path, Some(body)).map(|_| ())
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.call("POST", path, None).map(|_| ())
    }

    async fn patch_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.call("PATCH", path, Some(body))
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.call("DELETE", path, None).map(|_| ())
    }
}

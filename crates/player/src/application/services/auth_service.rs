//! Auth service - login, registration, whoami, logout
//!
//! Every successful path ends with both a credential and a role in the
//! session store; every failed path ends with neither.

use roster_domain::{DomainError, Role};

use crate::application::api::Api;
use crate::application::dto::{
    LoginRequest, RegisterRequest, RegisterResponse, TokenResponse, WhoAmIResponse,
};
use crate::application::error::ClientError;
use crate::application::services::session_store::SessionStore;
use crate::ports::outbound::{ApiPort, StorageProvider};
use crate::state::PlatformStorageAdapter;

pub const MIN_PASSWORD_LENGTH: usize = 6;

const LOGIN_FALLBACK: &str = "Invalid credentials.";
const LOCKOUT_MESSAGE: &str = "Too many failed attempts. Please wait a few minutes and try again.";
const REGISTER_FALLBACK: &str = "Could not register.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Presence checks; the username is trimmed, the password is sent as typed.
    pub fn to_request(&self) -> Result<LoginRequest, DomainError> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            return Err(DomainError::validation(
                "Enter your username and password.",
            ));
        }
        Ok(LoginRequest {
            username: username.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
}

impl RegisterForm {
    /// Checks run in order: presence, length, match.
    pub fn to_request(&self) -> Result<RegisterRequest, DomainError> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() || self.password2.is_empty() {
            return Err(DomainError::validation(
                "Fill in the username and both passwords.",
            ));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::validation(format!(
                "The password must be at least {MIN_PASSWORD_LENGTH} characters long."
            )));
        }
        if self.password != self.password2 {
            return Err(DomainError::validation("The passwords do not match."));
        }
        Ok(RegisterRequest {
            username: username.to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            password2: self.password2.clone(),
        })
    }
}

/// Banner text for a failed login.
pub fn login_failure_message(err: &ClientError) -> String {
    let message = err.user_message(LOGIN_FALLBACK);
    let lowered = message.to_lowercase();
    if lowered.contains("locked out") || lowered.contains("demasiados intentos") {
        LOCKOUT_MESSAGE.to_string()
    } else {
        message
    }
}

/// Banner text for a failed registration.
pub fn register_failure_message(err: &ClientError) -> String {
    if let ClientError::Validation(e) = err {
        return e.to_string();
    }
    let detail = match err {
        ClientError::BackendRejection { body: Some(body), .. } => body
            .get("detail")
            .and_then(|d| d.as_str())
            .map(str::to_string),
        other => other.backend_message().map(str::to_string),
    };
    detail
        .or_else(|| err.field_message("username"))
        .or_else(|| err.field_message("email"))
        .or_else(|| err.field_message("password2"))
        .unwrap_or_else(|| REGISTER_FALLBACK.to_string())
}

#[derive(Clone)]
pub struct AuthService<S: StorageProvider = PlatformStorageAdapter> {
    api: Api,
    session: SessionStore<S>,
}

impl<S: StorageProvider> AuthService<S> {
    pub fn new(api: Api, session: SessionStore<S>) -> Self {
        Self { api, session }
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Exchange credentials for a token, then resolve the role.
    pub async fn login(&self, form: &LoginForm) -> Result<Role, ClientError> {
        let request = form.to_request()?;
        // No stale bearer on the token call.
        self.session.clear();

        let result = self.exchange_token(&request).await;
        self.settle("login", result)
    }

    /// Create an account and sign straight in with the returned token.
    pub async fn register(&self, form: &RegisterForm) -> Result<Role, ClientError> {
        let request = form.to_request()?;
        self.session.clear();

        let result = self.create_account(&request).await;
        self.settle("register", result)
    }

    /// Ask the backend who the stored credential belongs to and store the role.
    pub async fn whoami(&self) -> Result<Role, ClientError> {
        let me: WhoAmIResponse = self.api.get("/yo/").await?;
        let role = Role::from_tag(&me.role);
        self.session.set_role(role);
        tracing::info!(role = %role, "role resolved");
        Ok(role)
    }

    async fn exchange_token(&self, request: &LoginRequest) -> Result<Role, ClientError> {
        let token: TokenResponse = self.api.post("/token/", request).await?;
        self.session.set_credential(&token.access);
        self.whoami().await
    }

    async fn create_account(&self, request: &RegisterRequest) -> Result<Role, ClientError> {
        let response: RegisterResponse = self.api.post("/auth/register/", request).await?;
        let token = response.access_token().ok_or_else(|| {
            ClientError::TransportFailure("registration response carried no token".into())
        })?;
        self.session.set_credential(&token);
        self.whoami().await
    }

    pub fn logout(&self) {
        self.session.clear();
        tracing::info!("logged out");
    }

    fn settle(&self, action: &str, result: Result<Role, ClientError>) -> Result<Role, ClientError> {
        match result {
            Ok(role) => {
                tracing::info!(action, "session established");
                Ok(role)
            }
            Err(e) => {
                tracing::warn!(action, error = %e, "authentication failed");
                self.session.clear();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::InMemoryStorageProvider;
    use crate::infrastructure::testing::fixtures;
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use serde_json::json;
    use std::sync::Arc;

    fn service(raw: MockRawApiPort) -> (AuthService<InMemoryStorageProvider>, InMemoryStorageProvider) {
        let storage = InMemoryStorageProvider::default();
        let service = AuthService::new(
            Api::new(Arc::new(raw)),
            SessionStore::new(storage.clone()),
        );
        (service, storage)
    }

    fn login_form(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn login_stores_credential_and_role() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| {
                path == "/token/" && *body == json!({"username": "gm", "password": "secret"})
            })
            .times(1)
            .returning(|_, _| Ok(json!({"access": "tok", "refresh": "r"})));
        raw.expect_get_json()
            .withf(|path| path == "/yo/")
            .times(1)
            .returning(|_| Ok(json!({"id": 1, "usuario": "gm", "rol": "GM"})));

        let (service, storage) = service(raw);
        let role = service.login(&login_form("  gm ", "secret")).await.unwrap();

        assert_eq!(role, Role::Gm);
        assert_eq!(storage.load("token").as_deref(), Some("tok"));
        assert_eq!(storage.load("rol").as_deref(), Some("GM"));
    }

    #[tokio::test]
    async fn failed_login_leaves_no_session_and_keeps_backend_message() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json().returning(|_, _| {
            Err(ApiError::HttpError {
                status: 401,
                body: r#"{"detail":"No active account found with the given credentials"}"#.into(),
            })
        });

        let (service, storage) = service(raw);
        storage.save("token", "stale");
        storage.save("rol", "GM");

        let err = service.login(&login_form("gm", "wrong")).await.unwrap_err();
        assert_eq!(
            login_failure_message(&err),
            "No active account found with the given credentials"
        );
        assert_eq!(storage.load("token"), None);
        assert_eq!(storage.load("rol"), None);
    }

    #[tokio::test]
    async fn whoami_failure_after_token_clears_the_half_session() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(|_, _| Ok(json!({"access": "tok"})));
        raw.expect_get_json()
            .returning(|_| Err(fixtures::api_request_failed("connection reset")));

        let (service, storage) = service(raw);
        let err = service.login(&login_form("gm", "secret")).await.unwrap_err();

        assert_eq!(login_failure_message(&err), "Invalid credentials.");
        assert_eq!(storage.load("token"), None);
    }

    #[tokio::test]
    async fn blank_login_never_reaches_the_network() {
        let raw = MockRawApiPort::new();
        let (service, _) = service(raw);

        let err = service.login(&login_form("   ", "secret")).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        let err = service.login(&login_form("gm", "")).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[test]
    fn lockout_messages_are_replaced() {
        let err = ClientError::Unauthorized {
            status: 403,
            message: Some("Account locked out: too many login attempts".into()),
        };
        assert_eq!(login_failure_message(&err), LOCKOUT_MESSAGE);

        let err = ClientError::BackendRejection {
            status: 429,
            message: Some("Demasiados intentos fallidos".into()),
            body: None,
        };
        assert_eq!(login_failure_message(&err), LOCKOUT_MESSAGE);
    }

    #[test]
    fn register_checks_run_in_order() {
        let mut form = RegisterForm::default();
        assert_eq!(
            form.to_request().unwrap_err().to_string(),
            "Fill in the username and both passwords."
        );

        form.username = "ana".into();
        form.password = "abc".into();
        form.password2 = "xyz".into();
        assert_eq!(
            form.to_request().unwrap_err().to_string(),
            "The password must be at least 6 characters long."
        );

        form.password = "abcdef".into();
        assert_eq!(
            form.to_request().unwrap_err().to_string(),
            "The passwords do not match."
        );

        form.password2 = "abcdef".into();
        form.email = " ana@example.com ".into();
        let request = form.to_request().unwrap();
        assert_eq!(request.email, "ana@example.com");
    }

    #[tokio::test]
    async fn register_accepts_nested_token_and_resolves_role() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, _| path == "/auth/register/")
            .returning(|_, _| Ok(json!({"user": {"id": 3}, "tokens": {"access": "new"}})));
        raw.expect_get_json()
            .returning(|_| Ok(json!({"rol": "JUGADOR"})));

        let (service, storage) = service(raw);
        let form = RegisterForm {
            username: "ana".into(),
            email: String::new(),
            password: "abcdef".into(),
            password2: "abcdef".into(),
        };

        assert_eq!(service.register(&form).await.unwrap(), Role::Player);
        assert_eq!(storage.load("token").as_deref(), Some("new"));
        assert_eq!(storage.load("rol").as_deref(), Some("JUGADOR"));
    }

    #[tokio::test]
    async fn register_error_prefers_field_order() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json().returning(|_, _| {
            Err(ApiError::HttpError {
                status: 400,
                body: r#"{"password2":["Too common."],"email":["Enter a valid email address."]}"#
                    .into(),
            })
        });

        let (service, storage) = service(raw);
        let form = RegisterForm {
            username: "ana".into(),
            email: "nope".into(),
            password: "abcdef".into(),
            password2: "abcdef".into(),
        };

        let err = service.register(&form).await.unwrap_err();
        assert_eq!(register_failure_message(&err), "Enter a valid email address.");
        assert_eq!(storage.load("token"), None);
    }

    #[test]
    fn register_failure_without_details_uses_fallback() {
        let err = ClientError::TransportFailure("HTTP 500".into());
        assert_eq!(register_failure_message(&err), "Could not register.");
    }

    #[test]
    fn logout_clears_session() {
        let (service, storage) = service(MockRawApiPort::new());
        storage.save("token", "tok");
        storage.save("rol", "GM");
        service.logout();
        assert!(!service.session().snapshot().authenticated);
    }
}

use roster_domain::Role;

use super::*;
use crate::application::services::{login_failure_message, LoginForm, RegisterForm};
use crate::ports::outbound::CredentialPort;
use crate::ui::routes::guard::{evaluate, Access, GuardDecision};

#[tokio::test]
async fn gm_login_populates_credential_and_role() {
    let backend = backend();
    let tab = logged_in(&backend, GM).await;

    let snapshot = tab.session.snapshot();
    assert!(snapshot.authenticated);
    assert_eq!(snapshot.role, Some(Role::Gm));
    assert!(tab.session.bearer_token().is_some());
    assert_eq!(evaluate(Access::GmOnly, &snapshot), GuardDecision::Allow);
}

#[tokio::test]
async fn bad_password_leaves_nothing_stored() {
    let backend = backend();
    let tab = open_session(&backend);

    let err = tab
        .auth
        .login(&LoginForm {
            username: GM.0.into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(
        login_failure_message(&err),
        "No active account found with the given credentials"
    );
    assert_eq!(tab.session.credential(), None);
    assert_eq!(
        evaluate(Access::Authenticated, &tab.session.snapshot()),
        GuardDecision::RedirectToLogin
    );
}

#[tokio::test]
async fn player_is_kept_out_of_the_catalog() {
    let backend = backend();
    let tab = logged_in(&backend, PLAYER).await;

    let snapshot = tab.session.snapshot();
    assert_eq!(snapshot.role, Some(Role::Player));
    assert_eq!(
        evaluate(Access::GmOnly, &snapshot),
        GuardDecision::RedirectToCharacters
    );
    let err = tab.catalog.list_all().await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn registration_signs_in_as_player() {
    let backend = backend();
    let tab = open_session(&backend);

    let role = tab
        .auth
        .register(&RegisterForm {
            username: "bruno".into(),
            email: "bruno@example.com".into(),
            password: "abcdef".into(),
            password2: "abcdef".into(),
        })
        .await
        .unwrap();

    assert_eq!(role, Role::Player);
    assert!(tab.session.snapshot().authenticated);
}

#[tokio::test]
async fn logout_closes_protected_routes() {
    let backend = backend();
    let tab = logged_in(&backend, GM).await;

    tab.auth.logout();
    assert_eq!(
        evaluate(Access::Authenticated, &tab.session.snapshot()),
        GuardDecision::RedirectToLogin
    );
}

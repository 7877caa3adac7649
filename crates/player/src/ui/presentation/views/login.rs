//! Login view

use dioxus::prelude::*;

use crate::application::services::{login_failure_message, LoginForm};
use crate::infrastructure::spawn_task;
use crate::presentation::components::AlertBanner;
use crate::presentation::services::use_auth_service;
use crate::routes::Route;

#[component]
pub fn LoginView() -> Element {
    let auth = use_auth_service();
    let navigator = use_navigator();

    let mut form = use_signal(LoginForm::default);
    let mut error: Signal<Option<String>> = use_signal(|| None);
    let mut is_submitting = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if is_submitting() {
            return;
        }
        let auth = auth.clone();
        let current = form.read().clone();
        is_submitting.set(true);
        error.set(None);

        spawn_task(async move {
            let result = auth.login(&current).await;
            is_submitting.set(false);
            match result {
                Ok(role) => {
                    tracing::info!(%role, "signed in");
                    navigator.push(Route::CharactersRoute {});
                }
                Err(e) => error.set(Some(login_failure_message(&e))),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: submit,

                h2 { "Sign in" }

                AlertBanner { message: error() }

                label {
                    class: "field",
                    span { class: "field-label", "Username" }
                    input {
                        r#type: "text",
                        autocomplete: "username",
                        value: "{form.read().username}",
                        oninput: move |e| form.write().username = e.value(),
                    }
                }
                label {
                    class: "field",
                    span { class: "field-label", "Password" }
                    input {
                        r#type: "password",
                        autocomplete: "current-password",
                        value: "{form.read().password}",
                        oninput: move |e| form.write().password = e.value(),
                    }
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: is_submitting(),
                    if is_submitting() { "Signing in..." } else { "Sign in" }
                }

                p {
                    class: "auth-switch",
                    "No account? "
                    Link { to: Route::RegisterRoute {}, "Register" }
                }
            }
        }
    }
}

//! Registration view

use dioxus::prelude::*;

use crate::application::services::{register_failure_message, RegisterForm};
use crate::infrastructure::spawn_task;
use crate::presentation::components::AlertBanner;
use crate::presentation::services::use_auth_service;
use crate::routes::Route;

#[component]
pub fn RegisterView() -> Element {
    let auth = use_auth_service();
    let navigator = use_navigator();

    let mut form = use_signal(RegisterForm::default);
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
            let result = auth.register(&current).await;
            is_submitting.set(false);
            match result {
                Ok(role) => {
                    tracing::info!(%role, "account created");
                    navigator.push(Route::CharactersRoute {});
                }
                Err(e) => error.set(Some(register_failure_message(&e))),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: submit,

                h2 { "Create account" }

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
                    span { class: "field-label", "Email (optional)" }
                    input {
                        r#type: "email",
                        autocomplete: "email",
                        value: "{form.read().email}",
                        oninput: move |e| form.write().email = e.value(),
                    }
                }
                label {
                    class: "field",
                    span { class: "field-label", "Password" }
                    input {
                        r#type: "password",
                        autocomplete: "new-password",
                        value: "{form.read().password}",
                        oninput: move |e| form.write().password = e.value(),
                    }
                }
                label {
                    class: "field",
                    span { class: "field-label", "Repeat password" }
                    input {
                        r#type: "password",
                        autocomplete: "new-password",
                        value: "{form.read().password2}",
                        oninput: move |e| form.write().password2 = e.value(),
                    }
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: is_submitting(),
                    if is_submitting() { "Creating..." } else { "Create account" }
                }

                p {
                    class: "auth-switch",
                    "Already registered? "
                    Link { to: Route::LoginRoute {}, "Sign in" }
                }
            }
        }
    }
}

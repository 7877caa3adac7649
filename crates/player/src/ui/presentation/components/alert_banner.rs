//! Inline banner for form-level errors

use dioxus::prelude::*;

#[component]
pub fn AlertBanner(message: Option<String>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "alert-banner",
            role: "alert",
            "{message}"
        }
    }
}

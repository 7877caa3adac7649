//! ProtectedLayout - shared wrapper for every signed-in route
//!
//! This component wraps the characters and catalog views with:
//! - The route guard, re-evaluated on every render
//! - Page title management
//! - The navigation header

use dioxus::prelude::*;

use crate::presentation::components::Header;
use crate::presentation::services::use_session;
use crate::use_platform;

use super::guard::{evaluate, Access, GuardDecision};
use super::Route;

/// Props for ProtectedLayout
#[derive(Props, Clone, PartialEq)]
pub struct ProtectedLayoutProps {
    /// Which gate(s) the wrapped view sits behind
    pub access: Access,
    /// Page title shown in the window or browser tab
    pub page_title: &'static str,
    /// Child content to render once the guard allows it
    pub children: Element,
}

#[component]
pub fn ProtectedLayout(props: ProtectedLayoutProps) -> Element {
    let platform = use_platform();
    let session = use_session();

    let title = props.page_title;
    use_effect(move || {
        platform.set_page_title(title);
    });

    match evaluate(props.access, &session.snapshot()) {
        GuardDecision::Allow => rsx! {
            div {
                class: "protected-layout",
                Header {}
                main {
                    class: "page",
                    {props.children}
                }
            }
        },
        GuardDecision::RedirectToLogin => rsx! {
            Redirect { to: Route::LoginRoute {} }
        },
        GuardDecision::RedirectToCharacters => rsx! {
            Redirect { to: Route::CharactersRoute {} }
        },
    }
}

/// Replace the current history entry with `to` once mounted.
#[component]
pub fn Redirect(to: Route) -> Element {
    let navigator = use_navigator();
    use_effect(move || {
        navigator.replace(to.clone());
    });

    rsx! {}
}

//! Route table and route components
//!
//! Route components only gate and title; the views under
//! `presentation::views` do the work.

use dioxus::prelude::*;

pub mod guard;
mod protected_layout;

use crate::presentation::services::use_session;
use crate::presentation::views::{
    CatalogView, CharactersGmView, CharactersPlayerView, LoginView, RegisterView,
};
use crate::use_platform;

pub use guard::{evaluate, Access, GuardDecision};
use protected_layout::{ProtectedLayout, Redirect};

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    HomeRoute {},
    #[route("/login")]
    LoginRoute {},
    #[route("/register")]
    RegisterRoute {},
    #[route("/characters")]
    CharactersRoute {},
    #[route("/catalog")]
    CatalogRoute {},
    #[route("/:..segments")]
    NotFoundRoute { segments: Vec<String> },
}

#[component]
fn HomeRoute() -> Element {
    rsx! { LoginRoute {} }
}

#[component]
fn LoginRoute() -> Element {
    let platform = use_platform();
    use_effect(move || {
        platform.set_page_title("Sign in");
    });

    rsx! { LoginView {} }
}

#[component]
fn RegisterRoute() -> Element {
    let platform = use_platform();
    use_effect(move || {
        platform.set_page_title("Create account");
    });

    rsx! { RegisterView {} }
}

#[component]
fn CharactersRoute() -> Element {
    let is_gm = use_session().snapshot().is_gm();

    rsx! {
        ProtectedLayout {
            access: Access::Authenticated,
            page_title: "Characters",
            if is_gm {
                CharactersGmView {}
            } else {
                CharactersPlayerView {}
            }
        }
    }
}

#[component]
fn CatalogRoute() -> Element {
    rsx! {
        ProtectedLayout {
            access: Access::GmOnly,
            page_title: "Catalog",
            CatalogView {}
        }
    }
}

/// Unknown paths fall through to the characters page, which applies its own guard.
#[component]
fn NotFoundRoute(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "unknown route");
    rsx! {
        Redirect { to: Route::CharactersRoute {} }
    }
}

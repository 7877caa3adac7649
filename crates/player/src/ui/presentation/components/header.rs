//! Header - navigation bar shown on every signed-in page
//!
//! The catalog link is only rendered for the GM. On the mobile shell the
//! links collapse behind a menu toggle.

use dioxus::prelude::*;

use crate::presentation::services::{use_auth_service, use_session};
use crate::routes::Route;
use crate::ShellKind;

#[component]
pub fn Header() -> Element {
    let navigator = use_navigator();
    let auth = use_auth_service();
    let shell = use_context::<ShellKind>();
    let mut menu_open = use_signal(|| false);

    let snapshot = use_session().snapshot();
    let is_gm = snapshot.is_gm();
    let role_label = snapshot.role.map(|r| r.to_string()).unwrap_or_default();
    let show_links = shell == ShellKind::Desktop || menu_open();

    let logout = move |_| {
        auth.logout();
        menu_open.set(false);
        navigator.push(Route::LoginRoute {});
    };

    rsx! {
        header {
            class: "app-header",

            span { class: "brand", "Roster" }

            if shell == ShellKind::Mobile {
                button {
                    class: "menu-toggle",
                    aria_expanded: "{menu_open}",
                    onclick: move |_| {
                        let open = menu_open();
                        menu_open.set(!open);
                    },
                    "Menu"
                }
            }

            if show_links {
                nav {
                    class: "app-nav",
                    Link {
                        to: Route::CharactersRoute {},
                        onclick: move |_| menu_open.set(false),
                        "Characters"
                    }
                    if is_gm {
                        Link {
                            to: Route::CatalogRoute {},
                            onclick: move |_| menu_open.set(false),
                            "Catalog"
                        }
                    }
                    span { class: "role-label", "{role_label}" }
                    button {
                        class: "btn btn-secondary",
                        onclick: logout,
                        "Log out"
                    }
                }
            }
        }
    }
}

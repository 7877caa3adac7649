//! Catalog view - the GM's four reference lists

use dioxus::prelude::*;
use roster_domain::CatalogKind;

use crate::application::view_models::{submit_entry, CatalogBoard};
use crate::infrastructure::spawn_task;
use crate::presentation::components::{AlertBanner, CatalogBox};
use crate::presentation::services::use_catalog_service;

#[component]
pub fn CatalogView() -> Element {
    let service = use_catalog_service();
    let mut board = use_signal(CatalogBoard::default);

    // Initial load: all four lists or none.
    let loader = service.clone();
    use_effect(move || {
        let service = loader.clone();
        spawn_task(async move {
            let result = service.list_all().await;
            board.write().apply_load(result);
        });
    });

    // Only the network work runs in the task; the board is touched before
    // and after it, never held across the await.
    let create = use_callback(move |kind: CatalogKind| {
        let Some(name) = board.write().begin_create(kind) else {
            return;
        };
        let service = service.clone();
        spawn_task(async move {
            let outcome = submit_entry(&service, kind, &name).await;
            board.write().finish_create(kind, &name, outcome);
        });
    });

    let current = board.read();

    rsx! {
        div {
            class: "catalog-view",

            h2 { "Catalog" }

            AlertBanner { message: current.message.clone() }

            div {
                class: "catalog-grid",
                for kind in CatalogKind::ALL {
                    CatalogBox {
                        key: "{kind}",
                        kind,
                        entries: current.lists.get(kind).to_vec(),
                        draft: current.draft(kind).to_string(),
                        busy: current.is_busy(kind),
                        on_draft: move |value: String| board.write().set_draft(kind, value),
                        on_create: move |_| create.call(kind),
                    }
                }
            }
        }
    }
}

//! CatalogBox - one catalog list with its "add" input
//!
//! The catalog page renders one of these per `CatalogKind`; nothing in here
//! is specific to a kind beyond the labels it asks the kind for.

use dioxus::prelude::*;
use roster_domain::{CatalogEntry, CatalogKind, MAX_NAME_LENGTH};

#[derive(Props, Clone, PartialEq)]
pub struct CatalogBoxProps {
    pub kind: CatalogKind,
    pub entries: Vec<CatalogEntry>,
    /// Current contents of the add input
    pub draft: String,
    /// A create for this kind is in flight
    #[props(default)]
    pub busy: bool,
    pub on_draft: EventHandler<String>,
    pub on_create: EventHandler<()>,
}

#[component]
pub fn CatalogBox(props: CatalogBoxProps) -> Element {
    let title = props.kind.title();
    let placeholder = props.kind.placeholder();
    let empty_text = format!("No {} yet.", title.to_lowercase());
    let can_submit = !props.busy && !props.draft.trim().is_empty();

    rsx! {
        section {
            class: "catalog-box",

            h3 { "{title}" }

            form {
                class: "inline-form",
                onsubmit: move |e| {
                    e.prevent_default();
                    props.on_create.call(());
                },
                input {
                    r#type: "text",
                    placeholder: "{placeholder}",
                    maxlength: "{MAX_NAME_LENGTH}",
                    value: "{props.draft}",
                    oninput: move |e| props.on_draft.call(e.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: !can_submit,
                    if props.busy { "Adding..." } else { "Add" }
                }
            }

            if props.entries.is_empty() {
                p { class: "empty-state", "{empty_text}" }
            } else {
                ul {
                    class: "catalog-list",
                    for entry in props.entries.iter() {
                        li { key: "{entry.id}", "{entry.name}" }
                    }
                }
            }
        }
    }
}

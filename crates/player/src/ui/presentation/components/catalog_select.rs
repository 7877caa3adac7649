//! `<select>` over one catalog list, with an empty "none" choice

use dioxus::prelude::*;
use roster_domain::{CatalogEntry, CatalogEntryId};

use crate::application::view_models::parse_choice;

#[derive(Props, Clone, PartialEq)]
pub struct CatalogSelectProps {
    pub label: String,
    pub entries: Vec<CatalogEntry>,
    pub value: Option<CatalogEntryId>,
    pub on_select: EventHandler<Option<CatalogEntryId>>,
}

#[component]
pub fn CatalogSelect(props: CatalogSelectProps) -> Element {
    let current = props.value.map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{props.label}" }
            select {
                value: "{current}",
                onchange: move |e| props.on_select.call(parse_choice(&e.value())),
                option { value: "", selected: props.value.is_none(), "-" }
                for entry in props.entries.iter() {
                    option {
                        key: "{entry.id}",
                        value: "{entry.id}",
                        selected: props.value == Some(entry.id),
                        "{entry.name}"
                    }
                }
            }
        }
    }
}

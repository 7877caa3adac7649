//! SkillOptionsEditor - the GM's three offered-skill slots for one character

use dioxus::prelude::*;
use roster_domain::{CatalogEntry, CatalogEntryId, SkillOptions, OFFERED_SLOTS};

use crate::presentation::components::CatalogSelect;

#[derive(Props, Clone, PartialEq)]
pub struct SkillOptionsEditorProps {
    pub skills: Vec<CatalogEntry>,
    pub draft: SkillOptions,
    pub on_slot: EventHandler<(usize, Option<CatalogEntryId>)>,
    pub on_save: EventHandler<()>,
}

#[component]
pub fn SkillOptionsEditor(props: SkillOptionsEditorProps) -> Element {
    rsx! {
        div {
            class: "skill-options",
            for slot in 0..OFFERED_SLOTS {
                CatalogSelect {
                    key: "{slot}",
                    label: "Option {slot + 1}",
                    entries: props.skills.clone(),
                    value: props.draft.slot(slot),
                    on_select: move |value| props.on_slot.call((slot, value)),
                }
            }
            button {
                class: "btn btn-secondary",
                onclick: move |_| props.on_save.call(()),
                "Save options"
            }
        }
    }
}

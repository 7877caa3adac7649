//! SkillPicker - the owner's checkboxes over the offered skills
//!
//! Once two boxes are ticked the rest are disabled; the draft behind it
//! refuses a third pick as well.

use dioxus::prelude::*;
use roster_domain::{CatalogEntry, CatalogEntryId, SELECTION_SIZE};

#[derive(Props, Clone, PartialEq)]
pub struct SkillPickerProps {
    pub offered: Vec<CatalogEntry>,
    pub ticked: Vec<CatalogEntryId>,
    pub on_toggle: EventHandler<CatalogEntryId>,
    pub on_save: EventHandler<()>,
}

#[component]
pub fn SkillPicker(props: SkillPickerProps) -> Element {
    if props.offered.is_empty() {
        return rsx! {
            p { class: "empty-state", "No skills offered yet." }
        };
    }

    let complete = props.ticked.len() == SELECTION_SIZE;

    rsx! {
        fieldset {
            class: "skill-picker",
            legend { "Choose {SELECTION_SIZE} skills" }
            for (skill, ticked) in props.offered.iter().map(|s| (s, props.ticked.contains(&s.id))) {
                label {
                    key: "{skill.id}",
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: ticked,
                        // Full pick: only unticking is possible.
                        disabled: complete && !ticked,
                        onchange: {
                            let id = skill.id;
                            move |_| props.on_toggle.call(id)
                        },
                    }
                    "{skill.name}"
                }
            }
            button {
                class: "btn btn-primary",
                disabled: !complete,
                onclick: move |_| props.on_save.call(()),
                "Save skills"
            }
        }
    }
}

//! CharacterEditor - the GM's shared create/edit form

use dioxus::prelude::*;
use roster_domain::MAX_NAME_LENGTH;

use crate::application::services::CatalogLists;
use crate::application::view_models::CharacterForm;
use crate::presentation::components::CatalogSelect;

#[derive(Props, Clone, PartialEq)]
pub struct CharacterEditorProps {
    pub form: CharacterForm,
    pub catalogs: CatalogLists,
    pub on_change: EventHandler<CharacterForm>,
    pub on_submit: EventHandler<()>,
    pub on_cancel: EventHandler<()>,
}

#[component]
pub fn CharacterEditor(props: CharacterEditorProps) -> Element {
    let editing = props.form.is_editing();
    let heading = if editing { "Edit character" } else { "New character" };
    let submitting = props.form.is_submitting();
    let submit_label = match (submitting, editing) {
        (true, _) => "Saving...",
        (false, true) => "Save changes",
        (false, false) => "Create",
    };

    // Each field edit hands the whole updated form back up.
    let on_change = props.on_change;
    let form_name = props.form.clone();
    let form_race = props.form.clone();
    let form_power = props.form.clone();
    let form_equipment = props.form.clone();

    rsx! {
        form {
            id: "character-editor",
            class: "character-editor",
            onsubmit: move |e| {
                e.prevent_default();
                props.on_submit.call(());
            },

            h3 { "{heading}" }

            label {
                class: "field",
                span { class: "field-label", "Name" }
                input {
                    r#type: "text",
                    maxlength: "{MAX_NAME_LENGTH}",
                    value: "{props.form.name}",
                    oninput: move |e| {
                        let mut next = form_name.clone();
                        next.name = e.value();
                        on_change.call(next);
                    },
                }
            }

            CatalogSelect {
                label: "Race",
                entries: props.catalogs.races.clone(),
                value: props.form.race,
                on_select: move |race| {
                    let mut next = form_race.clone();
                    next.race = race;
                    on_change.call(next);
                },
            }
            CatalogSelect {
                label: "Power",
                entries: props.catalogs.powers.clone(),
                value: props.form.power,
                on_select: move |power| {
                    let mut next = form_power.clone();
                    next.power = power;
                    on_change.call(next);
                },
            }
            CatalogSelect {
                label: "Equipment",
                entries: props.catalogs.equipment.clone(),
                value: props.form.equipment,
                on_select: move |equipment| {
                    let mut next = form_equipment.clone();
                    next.equipment = equipment;
                    on_change.call(next);
                },
            }

            div {
                class: "form-actions",
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: submitting,
                    "{submit_label}"
                }
                if editing {
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: move |_| props.on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

//! CharacterCard - one character's sheet summary
//!
//! Actions are passed in as children so the GM and player views can hang
//! different controls off the same card.

use dioxus::prelude::*;
use roster_domain::{CatalogEntry, Character, CharacterState};

#[derive(Props, Clone, PartialEq)]
pub struct CharacterCardProps {
    pub character: Character,
    /// Show the skills the GM has offered
    #[props(default = false)]
    pub show_offered: bool,
    /// Show the two skills the owner picked
    #[props(default = false)]
    pub show_selection: bool,
    pub children: Element,
}

fn state_tone(state: CharacterState) -> &'static str {
    match state {
        CharacterState::Alive => "badge badge-alive",
        CharacterState::Frozen => "badge badge-frozen",
        CharacterState::Dead => "badge badge-dead",
    }
}

fn names(entries: &[CatalogEntry]) -> String {
    if entries.is_empty() {
        return "-".to_string();
    }
    entries
        .iter()
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[component]
pub fn CharacterCard(props: CharacterCardProps) -> Element {
    let c = &props.character;
    let owner = c.owner.clone().unwrap_or_else(|| "Unassigned".to_string());

    rsx! {
        article {
            class: "character-card",

            div {
                class: "card-header",
                h4 { "{c.name}" }
                span { class: "level", "Level {c.level}" }
                span { class: state_tone(c.state), "{c.state}" }
            }

            dl {
                class: "card-details",
                dt { "Race" }
                dd { "{c.race.display_name()}" }
                dt { "Power" }
                dd { "{c.power.display_name()}" }
                dt { "Equipment" }
                dd { "{c.equipment.display_name()}" }
                dt { "Owner" }
                dd { "{owner}" }
                if props.show_offered {
                    dt { "Offered skills" }
                    dd { {names(&c.options_offered)} }
                }
                if props.show_selection {
                    dt { "Chosen skills" }
                    dd { {names(&c.selection)} }
                }
            }

            div {
                class: "card-actions",
                {props.children}
            }
        }
    }
}

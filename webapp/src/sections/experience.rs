use dioxus::prelude::*;

use common::{config::Experience, section::Section};

#[component]
fn ExperienceCard(entry: Experience) -> Element {
    rsx! {
        div { class: "card",
            h4 { class: "card-title", "{entry.company}" }
            p { class: "card-subtitle", "{entry.role} • {entry.period}" }
            ul { class: "highlights",
                for highlight in entry.highlights.iter() {
                    li { "{highlight}" }
                }
            }
        }
    }
}

#[component]
pub fn ExperienceSection(entries: Vec<Experience>) -> Element {
    rsx! {
        section { id: Section::Experience.anchor_id(), class: "section section-wide",
            h3 { class: "section-title", {Section::Experience.label()} }
            div { class: "experience-list",
                for entry in entries {
                    ExperienceCard { key: "{entry.company}-{entry.period}", entry }
                }
            }
        }
    }
}

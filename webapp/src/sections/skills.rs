use dioxus::prelude::*;

use common::section::Section;

#[component]
pub fn SkillsSection(skills: Vec<String>) -> Element {
    rsx! {
        section { id: Section::Skills.anchor_id(), class: "section section-xwide",
            h3 { class: "section-title", {Section::Skills.label()} }
            div { class: "skills-grid",
                for skill in skills {
                    div { key: "{skill}", class: "card skill", "{skill}" }
                }
            }
        }
    }
}

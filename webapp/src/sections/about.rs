use dioxus::prelude::*;

use common::section::Section;

#[component]
pub fn AboutSection(about: String) -> Element {
    rsx! {
        section { id: Section::About.anchor_id(), class: "section section-medium",
            h3 { class: "section-title", "About Me" }
            p { class: "about-text", "{about}" }
        }
    }
}

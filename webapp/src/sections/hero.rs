use dioxus::prelude::*;

use common::{config::Owner, section::Section};

use crate::components::profile_card::ProfileCard;

#[derive(Clone, PartialEq, Props)]
pub struct HeroSectionProps {
    owner: Owner,
    profile_card: bool,
}

#[component]
pub fn HeroSection(props: HeroSectionProps) -> Element {
    let owner = props.owner;

    rsx! {
        section { id: Section::Home.anchor_id(), class: "section hero",
            if props.profile_card {
                ProfileCard { owner: owner.clone() }
            }

            h2 { class: "hero-title fade-up", "Hi, I'm {owner.name}" }
            p { class: "hero-tagline fade-in delay-1", "{owner.tagline}" }

            div { class: "hero-links fade-in delay-2",
                a {
                    href: owner.github.clone(),
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "GitHub"
                }
                a {
                    href: owner.linkedin.clone(),
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "LinkedIn"
                }
                a { href: owner.mail_href(), "Mail" }
                if let Some(resume) = owner.resume.clone() {
                    a { class: "btn", href: resume, download: "", "Download Resume" }
                }
            }
        }
    }
}

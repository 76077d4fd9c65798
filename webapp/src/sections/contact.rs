use dioxus::prelude::*;
use tracing::info;

use common::section::Section;

// the form is decorative: nothing is sent anywhere, submitting only logs
#[component]
pub fn ContactSection(blurb: String) -> Element {
    rsx! {
        section { id: Section::Contact.anchor_id(), class: "section section-narrow contact",
            h3 { class: "section-title", {Section::Contact.label()} }
            p { class: "contact-blurb", "{blurb}" }
            form {
                class: "contact-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    info!("contact form submitted, but no backend is configured");
                },
                input { class: "field", r#type: "text", placeholder: "Your Name" }
                input { class: "field", r#type: "email", placeholder: "Your Email" }
                textarea { class: "field", rows: "4", placeholder: "Your Message" }
                div {
                    button { class: "btn", r#type: "submit", "Send" }
                }
            }
        }
    }
}

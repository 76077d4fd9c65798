use dioxus::prelude::*;

use common::config::Owner;

// contact card shown above the hero in the light variant
#[component]
pub fn ProfileCard(owner: Owner) -> Element {
    rsx! {
        div { class: "card profile-card fade-in",
            if let Some(photo) = owner.photo.clone() {
                img {
                    class: "profile-photo",
                    src: photo,
                    alt: owner.name.clone(),
                }
            }
            div {
                h4 { class: "card-title", "{owner.name}" }
                p { class: "card-subtitle", "{owner.role}" }
                if let Some(phone) = owner.phone.clone() {
                    p {
                        a { href: "tel:{phone}", "{phone}" }
                    }
                }
                if let Some(email) = owner.email.clone() {
                    p {
                        a { href: "mailto:{email}", "{email}" }
                    }
                }
            }
        }
    }
}

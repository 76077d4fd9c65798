use dioxus::prelude::*;

use common::section::Section;

use crate::nav;

#[derive(Clone, PartialEq, Props)]
struct NavBarLinkProps {
    section: Section,
}

#[component]
fn NavBarLink(props: NavBarLinkProps) -> Element {
    let section = props.section;

    rsx! {
        li {
            a {
                class: if nav::is_active(section) { "nav-link active" } else { "nav-link" },
                href: section.href(),
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    nav::select_section(section);
                },
                "{section}"
            }
        }
    }
}

// the compact list stays mounted and is shown/hidden by class, so the scroll
// animation spawned from one of its links outlives the menu closing
#[component]
fn CompactMenu() -> Element {
    rsx! {
        ul { class: if nav::menu_expanded() { "compact-menu open" } else { "compact-menu" },
            for section in Section::all().iter().copied() {
                NavBarLink { key: "{section}", section }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    brand: String,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    rsx! {
        header { class: "site-header",
            nav { class: "nav-container",
                h1 { class: "brand", "{props.brand}" }

                ul { class: "nav-links",
                    for section in Section::all().iter().copied() {
                        NavBarLink { key: "{section}", section }
                    }
                }

                button {
                    class: "menu-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| nav::toggle_menu(),
                    if nav::menu_expanded() {
                        "✕"
                    } else {
                        "☰"
                    }
                }
            }

            CompactMenu {}
        }
    }
}

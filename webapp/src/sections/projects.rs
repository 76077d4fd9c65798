use dioxus::prelude::*;

use common::{config::Project, section::Section};

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    rsx! {
        div { class: "card card-lg",
            h4 { class: "card-title", "{project.title}" }
            p { class: "project-summary", "{project.summary}" }
            if let Some(link) = project.link.clone() {
                a {
                    class: "project-link",
                    href: link,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "View Project"
                }
            }
        }
    }
}

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> Element {
    rsx! {
        section { id: Section::Projects.anchor_id(), class: "section section-xwide",
            h3 { class: "section-title", {Section::Projects.label()} }
            div { class: "projects-grid",
                for project in projects {
                    ProjectCard { key: "{project.title}", project }
                }
            }
        }
    }
}

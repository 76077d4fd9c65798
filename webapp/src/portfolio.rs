use anyhow::Result;
use dioxus::prelude::*;
use tracing::{debug, error};

use common::{
    config::{SiteConfig, default_config},
    theme::{Theme, ThemeName},
};

use crate::{
    components::navigation::NavBar,
    nav,
    scroll::use_scroll_spy,
    sections::{
        AboutSection, ContactSection, ExperienceSection, HeroSection, ProjectsSection,
        SkillsSection,
    },
};

fn load_site() -> Result<SiteConfig, String> {
    let site: Result<SiteConfig> = default_config();

    site.map_err(|err| {
        error!("failed to load site config: {err:#}");
        format!("{err:#}")
    })
}

// "/" renders the theme named in the site config
#[component]
pub fn Portfolio() -> Element {
    rsx! {
        PortfolioPage {}
    }
}

// "/theme/:theme" forces one of the variants
#[component]
pub fn ThemedPortfolio(theme: ThemeName) -> Element {
    rsx! {
        PortfolioPage { theme }
    }
}

#[component]
fn PortfolioPage(theme: Option<ThemeName>) -> Element {
    let site = use_hook(load_site);

    match site {
        Ok(site) => {
            let theme = theme.unwrap_or(site.theme).theme();
            rsx! {
                SitePage { site, theme }
            }
        }
        Err(msg) => rsx! {
            div { class: "config-error",
                h3 { "The site configuration could not be loaded" }
                p { "{msg}" }
            }
        },
    }
}

#[derive(Clone, PartialEq, Props)]
struct SitePageProps {
    site: SiteConfig,
    theme: Theme,
}

// the one page template; both theme variants render through here
#[component]
fn SitePage(props: SitePageProps) -> Element {
    let site = props.site;
    let theme = props.theme;

    let scroll = site.scroll;
    use_effect(move || {
        debug!({ theme = %theme.name }, "configuring navigation");
        nav::configure(scroll);
    });

    use_scroll_spy(site.spy, site.scroll.offset_px);

    let variables = theme.css_variables();

    rsx! {
        style { "{variables}" }

        div { class: "site",
            NavBar { brand: site.brand.clone() }

            main {
                HeroSection { owner: site.owner.clone(), profile_card: theme.profile_card }
                ExperienceSection { entries: site.experience.clone() }
                AboutSection { about: site.about.clone() }
                SkillsSection { skills: site.skills.clone() }
                ProjectsSection { projects: site.projects.clone() }
                ContactSection { blurb: site.contact.blurb.clone() }
            }

            footer { class: "site-footer", "© {site.copyright}" }
        }
    }
}

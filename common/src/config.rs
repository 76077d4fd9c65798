use std::collections::HashSet;

use anyhow::{Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{
    EMAIL_REGEX, PHONE_REGEX, URL_REGEX, scroll::ScrollSettings, spy::SpySettings,
    theme::ThemeName,
};

// the site that ships with the webapp
pub const DEFAULT_SITE: &str = include_str!("../../config/site.toml");

// site configuration
//
// everything that is content rather than layout: who the page is about, what they
// did, and how the page should scroll.  both theme variants render from this
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    pub brand: String,
    #[serde(default)]
    pub theme: ThemeName,
    pub copyright: String,

    pub owner: Owner,
    pub about: String,

    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,

    pub contact: Contact,

    #[serde(default)]
    pub scroll: ScrollSettings,
    #[serde(default)]
    pub spy: SpySettings,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Owner {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub github: String,
    pub linkedin: String,

    // without an email the mail icon just jumps to the contact section
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo: Option<String>,
    // downloadable cv/resume
    pub resume: Option<String>,
}

impl Owner {
    pub fn mail_href(&self) -> String {
        match &self.email {
            Some(email) => format!("mailto:{email}"),
            None => String::from("#contact"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Contact {
    pub blurb: String,
}

// the site table lives under [site] so the file can carry other tables later
// (build settings, deploy targets) without them leaking into the page
#[derive(Debug, Deserialize, Serialize)]
struct TomlSiteFile {
    site: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlSiteFile = toml::from_str(doc)?;

    data.site.validate()?;

    debug!("successfully parsed site config");
    Ok(data.site)
}

pub fn default_config() -> Result<SiteConfig> {
    parse_config(DEFAULT_SITE)
}

impl SiteConfig {
    pub fn validate(&self) -> Result<()> {
        let url = Regex::new(URL_REGEX)?;
        let email = Regex::new(EMAIL_REGEX)?;
        let phone = Regex::new(PHONE_REGEX)?;

        if self.brand.trim().is_empty() {
            bail!("site brand must not be empty");
        }

        if self.owner.name.trim().is_empty() {
            bail!("owner name must not be empty");
        }

        for (field, value) in [("github", &self.owner.github), ("linkedin", &self.owner.linkedin)] {
            if !url.is_match(value) {
                bail!("owner {field} is not an http(s) link: {value}");
            }
        }

        if let Some(value) = &self.owner.email {
            if !email.is_match(value) {
                bail!("owner email is malformed: {value}");
            }
        }

        if let Some(value) = &self.owner.phone {
            if !phone.is_match(value) {
                bail!("owner phone is malformed: {value}");
            }
        }

        if self.scroll.duration_ms == 0 {
            bail!("scroll duration must be greater than zero");
        }

        for entry in &self.experience {
            if entry.company.trim().is_empty() {
                bail!("experience entry has no company");
            }
        }

        for project in &self.projects {
            if project.title.trim().is_empty() {
                bail!("project has no title");
            }

            if let Some(link) = &project.link {
                if !url.is_match(link) {
                    bail!("project {} link is not an http(s) link: {link}", project.title);
                }
            }
        }

        let mut seen = HashSet::new();
        for skill in &self.skills {
            if !seen.insert(skill.to_lowercase()) {
                bail!("skill listed twice: {skill}");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::{DEFAULT_SCROLL_DURATION_MS, DEFAULT_SCROLL_OFFSET_PX};

    const MINIMAL: &str = r#"
[site]
brand = "Example.dev"
copyright = "2025 Example"
about = "About text"

[site.owner]
name = "Example Person"
role = "Engineer"
tagline = "Hello"
github = "https://github.com/example"
linkedin = "https://www.linkedin.com/in/example"

[site.contact]
blurb = "Say hi"
"#;

    fn minimal() -> SiteConfig {
        parse_config(MINIMAL).unwrap()
    }

    #[test]
    fn shipped_site_is_valid() {
        let site = default_config().unwrap();

        assert_eq!(site.theme, ThemeName::Dark);
        assert_eq!(site.scroll, ScrollSettings::default());
        assert!(site.spy.enabled);
        assert!(!site.experience.is_empty());
        assert!(!site.projects.is_empty());
        assert!(!site.skills.is_empty());
    }

    #[test]
    fn missing_tables_use_defaults() {
        let site = minimal();

        assert_eq!(site.theme, ThemeName::Dark);
        assert_eq!(site.scroll.duration_ms, DEFAULT_SCROLL_DURATION_MS);
        assert_eq!(site.scroll.offset_px, DEFAULT_SCROLL_OFFSET_PX);
        assert_eq!(site.spy, SpySettings::default());
        assert!(site.skills.is_empty());
        assert_eq!(site.owner.mail_href(), "#contact");
    }

    #[test]
    fn partial_scroll_table_keeps_other_default() {
        let doc = format!("{MINIMAL}\n[site.scroll]\nduration_ms = 750\n");
        let site = parse_config(&doc).unwrap();

        assert_eq!(site.scroll.duration_ms, 750);
        assert_eq!(site.scroll.offset_px, DEFAULT_SCROLL_OFFSET_PX);
    }

    #[test]
    fn mail_href_prefers_email() {
        let mut site = minimal();
        site.owner.email = Some(String::from("someone@example.com"));

        assert!(site.validate().is_ok());
        assert_eq!(site.owner.mail_href(), "mailto:someone@example.com");
    }

    #[test]
    fn rejects_syntax_errors() {
        assert!(parse_config("[site").is_err());
        assert!(parse_config("[other]\nkey = 1\n").is_err());
    }

    #[test]
    fn rejects_bad_fields() {
        let mut site = minimal();
        site.brand = String::from("  ");
        assert!(site.validate().is_err());

        let mut site = minimal();
        site.owner.github = String::from("github.com/example");
        assert!(site.validate().is_err());

        let mut site = minimal();
        site.owner.email = Some(String::from("not-an-email"));
        assert!(site.validate().is_err());

        let mut site = minimal();
        site.owner.phone = Some(String::from("call me"));
        assert!(site.validate().is_err());

        let mut site = minimal();
        site.owner.phone = Some(String::from("+91 98765 43210"));
        assert!(site.validate().is_ok());

        let mut site = minimal();
        site.scroll.duration_ms = 0;
        assert!(site.validate().is_err());
    }

    #[test]
    fn rejects_bad_lists() {
        let mut site = minimal();
        site.skills = vec![String::from("Rust"), String::from("rust")];
        assert!(site.validate().is_err());

        let mut site = minimal();
        site.projects.push(Project {
            title: String::from("Thing"),
            summary: String::from("A thing"),
            link: Some(String::from("ftp://example.com")),
        });
        assert!(site.validate().is_err());

        let mut site = minimal();
        site.experience.push(Experience {
            company: String::new(),
            role: String::from("Engineer"),
            period: String::from("2024"),
            highlights: vec![],
        });
        assert!(site.validate().is_err());
    }
}

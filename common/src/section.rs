use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

// page sections
//
// the order of the variants is the order of the nav links and the order of the
// anchors on the page, so SECTIONS must stay in sync with the enum
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Home,
    Experience,
    About,
    Skills,
    Projects,
    Contact,
}

pub const SECTIONS: [Section; 6] = [
    Section::Home,
    Section::Experience,
    Section::About,
    Section::Skills,
    Section::Projects,
    Section::Contact,
];

impl Section {
    pub fn all() -> &'static [Section] {
        &SECTIONS
    }

    pub fn first() -> Section {
        SECTIONS[0]
    }

    pub fn last() -> Section {
        SECTIONS[SECTIONS.len() - 1]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Experience => "Experience",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    // the anchor is the lowercased label, used both as the element id and the
    // fragment of the nav link
    pub fn anchor_id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Experience => "experience",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor_id())
    }

    pub fn position(self) -> usize {
        SECTIONS
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    // accepts either the label or the anchor id, case-insensitively
    pub fn from_label(value: &str) -> Option<Section> {
        let value = value.trim().trim_start_matches('#');

        SECTIONS
            .iter()
            .copied()
            .find(|s| s.label().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::from_label(s).ok_or_else(|| anyhow::Error::msg(format!("unknown section: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_in_page_order() {
        let labels: Vec<&str> = Section::all().iter().map(|s| s.label()).collect();

        assert_eq!(
            labels,
            vec!["Home", "Experience", "About", "Skills", "Projects", "Contact"]
        );
        assert_eq!(Section::first(), Section::Home);
        assert_eq!(Section::last(), Section::Contact);
    }

    #[test]
    fn anchor_is_lowercased_label() {
        for section in Section::all() {
            assert_eq!(section.anchor_id(), section.label().to_lowercase());
            assert_eq!(section.href(), format!("#{}", section.anchor_id()));
        }
    }

    #[test]
    fn position_matches_sequence() {
        for (idx, section) in SECTIONS.iter().enumerate() {
            assert_eq!(section.position(), idx);
        }
    }

    #[test]
    fn parses_labels_and_anchors() {
        assert_eq!(Section::from_label("Projects"), Some(Section::Projects));
        assert_eq!(Section::from_label("projects"), Some(Section::Projects));
        assert_eq!(Section::from_label("#contact"), Some(Section::Contact));
        assert_eq!(Section::from_label(" About "), Some(Section::About));
        assert_eq!(Section::from_label("Blog"), None);
        assert!("Blog".parse::<Section>().is_err());
        assert_eq!("skills".parse::<Section>().unwrap(), Section::Skills);
    }
}

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    pub fn all() -> Vec<Self> {
        vec![Self::Dark, Self::Light]
    }

    pub fn theme(self) -> Theme {
        match self {
            Self::Dark => Theme::DARK,
            Self::Light => Theme::LIGHT,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dark => "dark",
            Self::Light => "light",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ThemeName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(anyhow::Error::msg(format!("unknown theme: {s}"))),
        }
    }
}

// Theme
//
// both variants of the page render from the same template; everything that differs
// between them lives here.  the colors end up as css custom properties, see
// css_variables() below
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: ThemeName,
    pub background: &'static str,
    pub surface: &'static str,
    pub header: &'static str,
    pub accent: &'static str,
    pub accent_strong: &'static str,
    pub text: &'static str,
    pub text_body: &'static str,
    pub text_muted: &'static str,

    // the light variant carries an extra card with photo and phone number
    pub profile_card: bool,
}

impl Theme {
    pub const DARK: Theme = Theme {
        name: ThemeName::Dark,
        background: "#030712",
        surface: "#1F2937",
        header: "#111827",
        accent: "#22D3EE",
        accent_strong: "#06B6D4",
        text: "#FFFFFF",
        text_body: "#D1D5DB",
        text_muted: "#9CA3AF",
        profile_card: false,
    };

    pub const LIGHT: Theme = Theme {
        name: ThemeName::Light,
        background: "#F9FAFB",
        surface: "#FFFFFF",
        header: "#FFFFFF",
        accent: "#0891B2",
        accent_strong: "#0E7490",
        text: "#111827",
        text_body: "#374151",
        text_muted: "#6B7280",
        profile_card: true,
    };

    pub fn css_variables(&self) -> String {
        format!(
            r#"
:root {{
  --background: {};
  --surface: {};
  --header: {};
  --accent: {};
  --accent-strong: {};
  --text: {};
  --text-body: {};
  --text-muted: {};
}}"#,
            self.background,
            self.surface,
            self.header,
            self.accent,
            self.accent_strong,
            self.text,
            self.text_body,
            self.text_muted,
        )
    }
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Theme {
        name.theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_router_segments() {
        for name in ThemeName::all() {
            assert_eq!(name.to_string().parse::<ThemeName>().unwrap(), name);
        }
        assert_eq!("LIGHT".parse::<ThemeName>().unwrap(), ThemeName::Light);
        assert!("sepia".parse::<ThemeName>().is_err());
    }

    #[test]
    fn presets_differ_only_where_expected() {
        assert!(!Theme::DARK.profile_card);
        assert!(Theme::LIGHT.profile_card);
        assert_ne!(Theme::DARK.background, Theme::LIGHT.background);
        assert_eq!(Theme::from(ThemeName::Light), Theme::LIGHT);
    }

    #[test]
    fn css_variables_carry_every_token() {
        let css = Theme::DARK.css_variables();

        assert!(css.contains("--background: #030712;"));
        assert!(css.contains("--surface: #1F2937;"));
        assert!(css.contains("--accent: #22D3EE;"));
        assert!(css.contains("--text-muted: #9CA3AF;"));
        assert!(css.trim_start().starts_with(":root {"));
        assert!(css.trim_end().ends_with('}'));
    }
}

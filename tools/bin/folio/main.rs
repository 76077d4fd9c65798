use std::{fmt::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, arg, command};
use tracing::{Level, debug, instrument};

use common::{
    config::{DEFAULT_SITE, SiteConfig, parse_config},
    section::Section,
    theme::ThemeName,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// site config file, defaults to the one bundled with the webapp
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// parse and validate the site config
    Check,

    /// show the sections, their anchors and the scroll settings
    Sections,

    /// print the css custom properties for a theme
    Theme {
        /// dark or light
        #[arg()]
        name: ThemeName,
    },
}

#[instrument(level=Level::DEBUG)]
async fn read_config(filename: Option<PathBuf>) -> Result<SiteConfig> {
    let doc = match filename {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            debug!("using bundled site config");
            String::from(DEFAULT_SITE)
        }
    };

    parse_config(&doc).context("invalid site config")
}

fn summary(site: &SiteConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "site:       {}", site.brand);
    let _ = writeln!(out, "owner:      {} ({})", site.owner.name, site.owner.role);
    let _ = writeln!(out, "theme:      {}", site.theme);
    let _ = writeln!(out, "experience: {}", site.experience.len());
    let _ = writeln!(out, "skills:     {}", site.skills.len());
    let _ = writeln!(out, "projects:   {}", site.projects.len());
    let _ = writeln!(
        out,
        "scroll-spy: {}",
        match (site.spy.enabled, site.spy.proximity) {
            (false, _) => "off",
            (true, false) => "on",
            (true, true) => "on, nearest section",
        }
    );

    out
}

fn section_table(site: &SiteConfig) -> String {
    let mut out = String::new();

    for section in Section::all() {
        let _ = writeln!(out, "{:<12} {}", section.label(), section.href());
    }

    let _ = writeln!(
        out,
        "jumps scroll over {}ms and stop {}px from the top",
        site.scroll.duration_ms, site.scroll.offset_px
    );

    out
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match cli.command {
        Commands::Check => {
            let site = read_config(cli.config).await?;
            print!("{}", summary(&site));
            println!("ok");
        }
        Commands::Sections => {
            let site = read_config(cli.config).await?;
            print!("{}", section_table(&site));
        }
        Commands::Theme { name } => {
            println!("{}", name.theme().css_variables().trim());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_theme_command() {
        let cli = Cli::try_parse_from(["folio", "theme", "light"]).unwrap();

        match cli.command {
            Commands::Theme { name } => assert_eq!(name, ThemeName::Light),
            _ => panic!("expected theme command"),
        }
        assert!(Cli::try_parse_from(["folio", "theme", "sepia"]).is_err());
    }

    #[test]
    fn parses_config_flag() {
        let cli = Cli::try_parse_from(["folio", "-c", "site.toml", "check"]).unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn section_table_lists_every_anchor() {
        let site = parse_config(DEFAULT_SITE).unwrap();
        let table = section_table(&site);

        for section in Section::all() {
            assert!(table.contains(&section.href()));
        }
        assert!(table.contains("500ms"));
        assert!(table.contains("-96px"));
    }

    #[test]
    fn summary_counts_content() {
        let site = parse_config(DEFAULT_SITE).unwrap();
        let text = summary(&site);

        assert!(text.contains("site:       Harmy.dev"));
        assert!(text.contains(&format!("projects:   {}", site.projects.len())));
        assert!(text.contains("scroll-spy: on, nearest section"));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let err = read_config(Some(PathBuf::from("/nonexistent/site.toml")))
            .await
            .unwrap_err();

        assert!(format!("{err:#}").contains("failed to read"));
    }

    #[tokio::test]
    async fn bundled_config_is_default() {
        let site = read_config(None).await.unwrap();

        assert_eq!(site.brand, "Harmy.dev");
    }
}

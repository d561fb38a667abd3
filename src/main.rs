mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Settings;

const DEFAULT_LOG_FILTER: &str =
    "hustle_calendar=info,hustle_calendar_core=info,hustle_calendar_google=info";

#[derive(Parser)]
#[command(name = "hustle-calendar", version)]
#[command(about = "Mirror the Radio Hustle competitions feed into a Google calendar")]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
struct Cli {
    /// Calendar to synchronize
    #[arg(required = true)]
    calendar_id: Option<String>,

    /// File with the Google service account key
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    credentials: Option<PathBuf>,

    /// Config file (defaults to ~/.config/hustle-calendar/config.toml)
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Show what would change without modifying the calendar
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the service account's calendars
    Calendar {
        #[command(subcommand)]
        action: CalendarAction,
    },
}

#[derive(Subcommand)]
enum CalendarAction {
    /// List calendars with their last update and sharing rules
    List,
    /// Create a publicly readable calendar
    Create,
    /// Delete a calendar
    Del {
        /// Calendar ID
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?.with_credentials(cli.credentials);

    match cli.command {
        Some(Commands::Calendar { action }) => match action {
            CalendarAction::List => commands::calendar::list(&settings).await,
            CalendarAction::Create => commands::calendar::create(&settings).await,
            CalendarAction::Del { id } => commands::calendar::delete(&settings, &id).await,
        },
        None => match cli.calendar_id {
            Some(calendar_id) => commands::sync::run(&settings, &calendar_id, cli.dry_run).await,
            None => anyhow::bail!("Missing calendar ID"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_sync_args() {
        let cli = Cli::try_parse_from([
            "hustle-calendar",
            "--credentials",
            "sa.json",
            "--dry-run",
            "abc@group.calendar.google.com",
        ])
        .unwrap();

        assert_eq!(cli.calendar_id.as_deref(), Some("abc@group.calendar.google.com"));
        assert_eq!(cli.credentials, Some(PathBuf::from("sa.json")));
        assert!(cli.dry_run);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_calendar_id_is_required() {
        assert!(Cli::try_parse_from(["hustle-calendar"]).is_err());
    }

    #[test]
    fn test_calendar_del_with_global_credentials() {
        let cli = Cli::try_parse_from([
            "hustle-calendar",
            "calendar",
            "del",
            "old@group.calendar.google.com",
            "--credentials",
            "sa.json",
        ])
        .unwrap();

        assert!(cli.calendar_id.is_none());
        assert_eq!(cli.credentials, Some(PathBuf::from("sa.json")));
        assert!(matches!(
            cli.command,
            Some(Commands::Calendar {
                action: CalendarAction::Del { ref id }
            }) if id == "old@group.calendar.google.com"
        ));
    }

    #[test]
    fn test_calendar_del_requires_id() {
        assert!(Cli::try_parse_from(["hustle-calendar", "calendar", "del"]).is_err());
    }
}

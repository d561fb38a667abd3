use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use hustle_calendar_core::HustleError;
use hustle_calendar_core::constants::{
    DEFAULT_CALENDAR_DESCRIPTION, DEFAULT_CALENDAR_SUMMARY, DEFAULT_FEED_URL,
};
use hustle_calendar_core::sync::CalendarProfile;
use serde::Deserialize;

const ENV_PREFIX: &str = "HUSTLE_CALENDAR";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Service account key file
    pub credentials: Option<PathBuf>,

    /// Competitions feed endpoint
    pub feed_url: String,

    /// Title the synced calendar is given
    pub calendar_summary: String,

    /// Description the synced calendar is given
    pub calendar_description: String,
}

/// Get the config file path (~/.config/hustle-calendar/config.toml)
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("hustle-calendar");
    Ok(config_dir.join("config.toml"))
}

impl Settings {
    /// Load settings from defaults, the config file and `HUSTLE_CALENDAR_*`
    /// environment variables, later sources overriding earlier ones.
    ///
    /// `config_path` must exist when given. Without it the default path is
    /// used if there is a file there.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let file = match config_path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                Some((path.to_path_buf(), true))
            }
            None => default_config_path().ok().map(|path| (path, false)),
        };

        Ok(Self::from_sources(file, Environment::with_prefix(ENV_PREFIX))?)
    }

    fn from_sources(
        file: Option<(PathBuf, bool)>,
        env: Environment,
    ) -> Result<Self, HustleError> {
        let mut builder = Config::builder()
            .set_default("feed_url", DEFAULT_FEED_URL)
            .and_then(|b| b.set_default("calendar_summary", DEFAULT_CALENDAR_SUMMARY))
            .and_then(|b| b.set_default("calendar_description", DEFAULT_CALENDAR_DESCRIPTION))
            .map_err(|e| HustleError::Config(e.to_string()))?;

        if let Some((path, required)) = file {
            builder = builder.add_source(File::from(path).required(required));
        }

        builder
            .add_source(env)
            .build()
            .map_err(|e| HustleError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| HustleError::Config(e.to_string()))
    }

    /// Apply command-line overrides.
    pub fn with_credentials(mut self, credentials: Option<PathBuf>) -> Self {
        if credentials.is_some() {
            self.credentials = credentials;
        }
        self
    }

    pub fn credentials_path(&self) -> Result<&Path> {
        self.credentials.as_deref().context(
            "No service account credentials.\n\
            Pass --credentials <file> or set HUSTLE_CALENDAR_CREDENTIALS.",
        )
    }

    pub fn profile(&self) -> CalendarProfile {
        CalendarProfile {
            summary: self.calendar_summary.clone(),
            description: self.calendar_description.clone(),
        }
    }
}

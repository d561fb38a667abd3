//! Error types for hustle-calendar.

use thiserror::Error;

/// Errors that can occur while fetching or reconciling calendars.
#[derive(Error, Debug)]
pub enum HustleError {
    #[error("Feed request failed: {0}")]
    Feed(#[from] reqwest::Error),

    #[error("Malformed feed payload: {0}")]
    FeedPayload(#[from] serde_json::Error),

    #[error("Calendar error: {0}")]
    Calendar(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for hustle-calendar operations.
pub type HustleResult<T> = Result<T, HustleError>;

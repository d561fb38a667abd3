//! Client for the competitions feed.

use tracing::info;

use crate::competition::Competition;
use crate::error::HustleResult;

/// Fetches the full competitions list (the feed has no paging).
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
}

impl FeedClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub async fn fetch_competitions(&self) -> HustleResult<Vec<Competition>> {
        info!("Getting competitions from {}", self.url);

        let body = self
            .http
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let competitions: Vec<Competition> = serde_json::from_str(&body)?;

        info!("Received competitions: {}", competitions.len());

        Ok(competitions)
    }
}

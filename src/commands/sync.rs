use anyhow::Result;
use hustle_calendar_core::{
    CalendarBackend,
    feed::FeedClient,
    sync::{CalendarProfile, Reconciler, SyncResult},
};
use hustle_calendar_google::{GoogleClient, share_link};
use tracing::info;

use crate::config::Settings;

pub async fn run(settings: &Settings, calendar_id: &str, dry_run: bool) -> Result<()> {
    let client = GoogleClient::connect(settings.credentials_path()?).await?;
    let feed = FeedClient::new(settings.feed_url.clone());

    let result = sync_calendar(&client, &feed, calendar_id, settings.profile(), dry_run).await?;

    if dry_run {
        info!("Dry run, nothing changed. {}", result);
    } else {
        info!("{}", result);
    }

    Ok(())
}

/// Mirror the feed into `calendar_id`. With `dry_run` the planned changes are
/// logged and counted but not applied.
pub async fn sync_calendar<B: CalendarBackend + ?Sized>(
    backend: &B,
    feed: &FeedClient,
    calendar_id: &str,
    profile: CalendarProfile,
    dry_run: bool,
) -> Result<SyncResult> {
    let calendar = backend.get_calendar(calendar_id).await?;
    info!("Working with calendar {} {}", calendar.summary, calendar.id);
    info!("Calendar link: {}", share_link(&calendar.id));

    let competitions = feed.fetch_competitions().await?;

    let reconciler = Reconciler::new(backend, calendar_id, profile);
    let pairings = reconciler.prepare(competitions).await?;

    if dry_run {
        let changes = reconciler.plan(&pairings);
        for change in &changes {
            info!("{}", change);
        }
        return Ok(changes.iter().map(|c| c.kind()).collect());
    }

    Ok(reconciler.sync(&pairings).await?)
}

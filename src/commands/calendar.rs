use anyhow::Result;
use hustle_calendar_google::{GoogleClient, create_public_calendar, describe_calendars};
use tracing::info;

use crate::config::Settings;

pub async fn list(settings: &Settings) -> Result<()> {
    let client = GoogleClient::connect(settings.credentials_path()?).await?;

    info!("Calendars:");
    for overview in describe_calendars(&client).await? {
        info!("ID: {}", overview.entry.id);
        info!("  Summary: {}", overview.entry.summary);
        match overview.updated {
            Some(updated) => info!("  Updated: {}", updated.to_rfc3339()),
            None => info!("  Updated: -"),
        }
        for rule in &overview.acl {
            info!("  {} {}", rule.role, rule.id);
        }
    }

    Ok(())
}

pub async fn create(settings: &Settings) -> Result<()> {
    let client = GoogleClient::connect(settings.credentials_path()?).await?;

    let calendar = create_public_calendar(
        &client,
        &settings.calendar_summary,
        &settings.calendar_description,
    )
    .await?;

    info!("Calendar created, made publicly visible, ID: {}", calendar.id);

    Ok(())
}

pub async fn delete(settings: &Settings, calendar_id: &str) -> Result<()> {
    let client = GoogleClient::connect(settings.credentials_path()?).await?;

    client.delete_calendar(calendar_id).await?;

    info!("Calendar deleted, ID: {}", calendar_id);

    Ok(())
}

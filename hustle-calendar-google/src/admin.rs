//! Calendar administration: listing, public calendar creation.

use anyhow::Result;
use chrono::{DateTime, Utc};
use google_calendar::types::{AclRule, Calendar, CalendarListEntry, Event, Scope};

use crate::api::GoogleClient;

/// A calendar visible to the service account, with its sharing rules.
#[derive(Debug, Clone)]
pub struct CalendarOverview {
    pub entry: CalendarListEntry,
    /// Most recent modification among the calendar's events
    pub updated: Option<DateTime<Utc>>,
    pub acl: Vec<AclRule>,
}

/// Anyone can see event details.
pub fn public_reader_rule() -> AclRule {
    AclRule {
        role: "reader".to_string(),
        scope: Some(Scope {
            type_: "default".to_string(),
            value: String::new(),
        }),
        etag: String::new(),
        id: String::new(),
        kind: String::new(),
    }
}

fn last_updated(events: &[Event]) -> Option<DateTime<Utc>> {
    events.iter().filter_map(|e| e.updated).max()
}

/// Collect an overview of every calendar in the account's calendar list.
pub async fn describe_calendars(client: &GoogleClient) -> Result<Vec<CalendarOverview>> {
    let entries = client.list_calendars().await?;

    let mut overviews = Vec::with_capacity(entries.len());
    for entry in entries {
        let events = client.list_events(&entry.id).await?;
        let acl = client.list_acl(&entry.id).await?;
        overviews.push(CalendarOverview {
            updated: last_updated(&events),
            entry,
            acl,
        });
    }

    Ok(overviews)
}

/// Create a calendar and make it readable by anyone.
pub async fn create_public_calendar(
    client: &GoogleClient,
    summary: &str,
    description: &str,
) -> Result<Calendar> {
    let calendar = client
        .insert_calendar(&Calendar {
            summary: summary.to_string(),
            description: description.to_string(),
            conference_properties: None,
            etag: String::new(),
            id: String::new(),
            kind: String::new(),
            location: String::new(),
            time_zone: String::new(),
        })
        .await?;

    client
        .insert_acl(&calendar.id, &public_reader_rule())
        .await?;

    Ok(calendar)
}

//! Google Calendar v3 client for one service account.

use std::path::Path;

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use google_calendar::Client;
use google_calendar::types::{
    AclRule, Calendar, CalendarListEntry, Event, MinAccessRole, OrderBy, SendUpdates,
};
use tracing::{debug, info};

use crate::auth;
use crate::credentials::ServiceAccountKey;

/// Public web link for a calendar, as shown in the Google Calendar UI.
pub fn share_link(calendar_id: &str) -> String {
    format!(
        "https://calendar.google.com/calendar?cid={}",
        STANDARD.encode(calendar_id)
    )
}

/// Whether a failed request only says the resource is already gone.
fn is_gone(error: &str) -> bool {
    error.contains("410") || error.contains("Gone")
}

/// Authenticated client for one service account.
///
/// The access token is fetched once in `connect` and lives for an hour,
/// which covers a sync run. There is no refresh token.
pub struct GoogleClient {
    client: Client,
}

impl GoogleClient {
    /// Load the service-account key at `credentials_path` and authenticate.
    pub async fn connect(credentials_path: &Path) -> Result<Self> {
        info!("Getting Google Calendar service");

        let key = ServiceAccountKey::load(credentials_path)?;
        let token = auth::fetch_access_token(&reqwest::Client::new(), &key).await?;

        Ok(Self::with_access_token(token.access_token))
    }

    /// Client using an already issued bearer token.
    pub fn with_access_token(access_token: impl Into<String>) -> Self {
        let client = Client::new(
            String::new(),
            String::new(),
            String::new(),
            access_token.into(),
            String::new(),
        );
        Self { client }
    }

    // -------------------------------------------------------------------------
    // Calendars
    // -------------------------------------------------------------------------

    pub async fn get_calendar(&self, calendar_id: &str) -> Result<Calendar> {
        let response = self
            .client
            .calendars()
            .get(calendar_id)
            .await
            .with_context(|| format!("Failed to get calendar {}", calendar_id))?;
        Ok(response.body)
    }

    pub async fn update_calendar(&self, calendar: &Calendar) -> Result<Calendar> {
        let response = self
            .client
            .calendars()
            .update(&calendar.id, calendar)
            .await
            .with_context(|| format!("Failed to update calendar {}", calendar.id))?;
        Ok(response.body)
    }

    pub async fn insert_calendar(&self, calendar: &Calendar) -> Result<Calendar> {
        let response = self
            .client
            .calendars()
            .insert(calendar)
            .await
            .with_context(|| format!("Failed to create calendar {}", calendar.summary))?;
        Ok(response.body)
    }

    pub async fn delete_calendar(&self, calendar_id: &str) -> Result<()> {
        self.client
            .calendars()
            .delete(calendar_id)
            .await
            .with_context(|| format!("Failed to delete calendar {}", calendar_id))?;
        Ok(())
    }

    /// Every calendar in the account's calendar list.
    pub async fn list_calendars(&self) -> Result<Vec<CalendarListEntry>> {
        let response = self
            .client
            .calendar_list()
            .list_all(MinAccessRole::default(), false, false)
            .await
            .context("Failed to list calendars")?;

        Ok(response
            .body
            .into_iter()
            .filter(|c| !c.id.is_empty())
            .collect())
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Every event of the calendar (all pages), without a time window.
    pub async fn list_events(&self, calendar_id: &str) -> Result<Vec<Event>> {
        let response = self
            .client
            .events()
            .list_all(
                calendar_id,
                "",
                0,
                OrderBy::default(),
                &[],
                "",
                &[],
                false,
                false,
                false,
                "",
                "",
                "",
                "",
            )
            .await
            .with_context(|| format!("Failed to list events of {}", calendar_id))?;

        debug!("Fetched {} events of {}", response.body.len(), calendar_id);

        Ok(response.body)
    }

    /// Insert `event`; its `id` becomes the event identifier.
    pub async fn insert_event(&self, calendar_id: &str, event: &Event) -> Result<Event> {
        let response = self
            .client
            .events()
            .insert(calendar_id, 0, 0, false, SendUpdates::None, false, event)
            .await
            .with_context(|| format!("Failed to create event {}", event.id))?;
        Ok(response.body)
    }

    pub async fn update_event(&self, calendar_id: &str, event: &Event) -> Result<Event> {
        let response = self
            .client
            .events()
            .update(
                calendar_id,
                &event.id,
                0,
                0,
                false,
                SendUpdates::None,
                false,
                event,
            )
            .await
            .with_context(|| format!("Failed to update event {}", event.id))?;
        Ok(response.body)
    }

    /// Delete an event. An event that is already gone counts as deleted.
    pub async fn delete_event(&self, calendar_id: &str, event_id: &str) -> Result<()> {
        let result = self
            .client
            .events()
            .delete(calendar_id, event_id, false, SendUpdates::None)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_gone(&e.to_string()) => {
                debug!("Event {} already deleted", event_id);
                Ok(())
            }
            Err(e) => Err(e).with_context(|| format!("Failed to delete event {}", event_id)),
        }
    }

    // -------------------------------------------------------------------------
    // Access control
    // -------------------------------------------------------------------------

    pub async fn list_acl(&self, calendar_id: &str) -> Result<Vec<AclRule>> {
        let response = self
            .client
            .acl()
            .list_all(calendar_id, false)
            .await
            .with_context(|| format!("Failed to list access rules of {}", calendar_id))?;
        Ok(response.body)
    }

    /// Add an access rule without notifying anyone.
    pub async fn insert_acl(&self, calendar_id: &str, rule: &AclRule) -> Result<AclRule> {
        let response = self
            .client
            .acl()
            .insert(calendar_id, false, rule)
            .await
            .with_context(|| {
                format!("Failed to add {} access rule to {}", rule.role, calendar_id)
            })?;
        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_link() {
        assert_eq!(
            share_link("abc@group.calendar.google.com"),
            "https://calendar.google.com/calendar?cid=YWJjQGdyb3VwLmNhbGVuZGFyLmdvb2dsZS5jb20="
        );
    }

    #[test]
    fn test_share_link_is_standard_base64() {
        let link = share_link("en.russian#holiday@group.v.calendar.google.com");
        let encoded = link.trim_start_matches("https://calendar.google.com/calendar?cid=");

        assert_eq!(
            STANDARD.decode(encoded).unwrap(),
            b"en.russian#holiday@group.v.calendar.google.com"
        );
    }

    #[test]
    fn test_is_gone() {
        assert!(is_gone("code: 410 Gone, uri: https://www.googleapis.com/calendar/v3/..."));
        assert!(!is_gone("code: 404 Not Found"));
        assert!(!is_gone("code: 403 Forbidden"));
    }
}

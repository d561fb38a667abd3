//! `CalendarBackend` for Google Calendar.

use async_trait::async_trait;
use hustle_calendar_core::{
    Calendar, CalendarBackend, CalendarEvent, EventPage, HustleError, HustleResult,
};

use crate::api::GoogleClient;
use crate::convert::{from_google_calendar, from_google_event, to_google_calendar, to_google_event};

fn calendar_error(err: anyhow::Error) -> HustleError {
    HustleError::Calendar(format!("{:#}", err))
}

/// Convert a listing, skipping cancelled and id-less entries.
fn live_events(events: Vec<google_calendar::types::Event>) -> Vec<CalendarEvent> {
    events
        .into_iter()
        .filter(|e| e.status != "cancelled" && !e.id.is_empty())
        .map(from_google_event)
        .collect()
}

#[async_trait]
impl CalendarBackend for GoogleClient {
    async fn get_calendar(&self, calendar_id: &str) -> HustleResult<Calendar> {
        let calendar = GoogleClient::get_calendar(self, calendar_id)
            .await
            .map_err(calendar_error)?;
        Ok(from_google_calendar(calendar))
    }

    async fn update_calendar(&self, calendar: &Calendar) -> HustleResult<Calendar> {
        let updated = GoogleClient::update_calendar(self, &to_google_calendar(calendar))
            .await
            .map_err(calendar_error)?;
        Ok(from_google_calendar(updated))
    }

    /// The client follows page tokens itself, so the first page is the
    /// whole listing and carries no continuation token.
    async fn list_events_page(
        &self,
        calendar_id: &str,
        page_token: Option<&str>,
    ) -> HustleResult<EventPage> {
        if page_token.is_some() {
            return Ok(EventPage::default());
        }

        let events = self
            .list_events(calendar_id)
            .await
            .map_err(calendar_error)?;

        Ok(EventPage {
            items: live_events(events),
            next_page_token: None,
        })
    }

    async fn insert_event(
        &self,
        calendar_id: &str,
        event: &CalendarEvent,
    ) -> HustleResult<CalendarEvent> {
        let created = GoogleClient::insert_event(self, calendar_id, &to_google_event(event))
            .await
            .map_err(calendar_error)?;
        Ok(from_google_event(created))
    }

    async fn update_event(
        &self,
        calendar_id: &str,
        event: &CalendarEvent,
    ) -> HustleResult<CalendarEvent> {
        let updated = GoogleClient::update_event(self, calendar_id, &to_google_event(event))
            .await
            .map_err(calendar_error)?;
        Ok(from_google_event(updated))
    }

    async fn delete_event(&self, calendar_id: &str, event_id: &str) -> HustleResult<()> {
        GoogleClient::delete_event(self, calendar_id, event_id)
            .await
            .map_err(calendar_error)
    }
}

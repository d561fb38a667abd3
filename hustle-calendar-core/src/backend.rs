//! The calendar capability the reconciler works against.

use async_trait::async_trait;

use crate::error::HustleResult;
use crate::event::{Calendar, CalendarEvent};

/// One page of an event listing.
#[derive(Debug, Clone, Default)]
pub struct EventPage {
    pub items: Vec<CalendarEvent>,
    /// Continuation token; `None` or empty when this is the last page
    pub next_page_token: Option<String>,
}

impl EventPage {
    pub fn next_token(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Operations a calendar provider exposes to the sync engine.
///
/// Implementations talk to the remote service; every call is a single
/// request and failures are returned, never retried.
#[async_trait]
pub trait CalendarBackend: Send + Sync {
    async fn get_calendar(&self, calendar_id: &str) -> HustleResult<Calendar>;

    async fn update_calendar(&self, calendar: &Calendar) -> HustleResult<Calendar>;

    /// Fetch one page of events. `page_token` is the token returned by the
    /// previous page, `None` for the first one.
    async fn list_events_page(
        &self,
        calendar_id: &str,
        page_token: Option<&str>,
    ) -> HustleResult<EventPage>;

    /// Insert `event` using its own `id` as the event identifier.
    async fn insert_event(
        &self,
        calendar_id: &str,
        event: &CalendarEvent,
    ) -> HustleResult<CalendarEvent>;

    /// Replace the fields of the event identified by `event.id`.
    async fn update_event(
        &self,
        calendar_id: &str,
        event: &CalendarEvent,
    ) -> HustleResult<CalendarEvent>;

    async fn delete_event(&self, calendar_id: &str, event_id: &str) -> HustleResult<()>;
}

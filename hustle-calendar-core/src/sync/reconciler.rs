use tracing::{debug, info};

use crate::backend::CalendarBackend;
use crate::competition::Competition;
use crate::constants::{DEFAULT_CALENDAR_DESCRIPTION, DEFAULT_CALENDAR_SUMMARY};
use crate::error::HustleResult;
use crate::event::CalendarEvent;
use crate::sync::{EventChange, Pairing, SyncResult, build_pairings};

/// Title and description the synced calendar should carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarProfile {
    pub summary: String,
    pub description: String,
}

impl Default for CalendarProfile {
    fn default() -> Self {
        Self {
            summary: DEFAULT_CALENDAR_SUMMARY.to_string(),
            description: DEFAULT_CALENDAR_DESCRIPTION.to_string(),
        }
    }
}

/// Mirrors a competitions list into one calendar.
///
/// The backend is borrowed for the lifetime of the reconciler, which covers a
/// single sync run. The first failing backend call aborts the run; changes
/// applied before it stay applied.
pub struct Reconciler<'a, B: CalendarBackend + ?Sized> {
    backend: &'a B,
    calendar_id: String,
    profile: CalendarProfile,
}

impl<'a, B: CalendarBackend + ?Sized> Reconciler<'a, B> {
    pub fn new(backend: &'a B, calendar_id: impl Into<String>, profile: CalendarProfile) -> Self {
        Self {
            backend,
            calendar_id: calendar_id.into(),
            profile,
        }
    }

    /// Fetch every event of the calendar, following continuation tokens
    /// until the backend reports the last page.
    pub async fn fetch_events(&self) -> HustleResult<Vec<CalendarEvent>> {
        info!("Getting calendar events");

        let mut events = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self
                .backend
                .list_events_page(&self.calendar_id, page_token.as_deref())
                .await?;

            let next = page.next_token().map(str::to_string);
            events.extend(page.items);

            match next {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        info!("Received calendar events: {}", events.len());

        Ok(events)
    }

    /// Fetch the calendar's events and pair them with `competitions`.
    pub async fn prepare(&self, competitions: Vec<Competition>) -> HustleResult<Vec<Pairing>> {
        let events = self.fetch_events().await?;
        Ok(build_pairings(events, competitions))
    }

    /// Classify every pairing without touching the calendar.
    pub fn plan(&self, pairings: &[Pairing]) -> Vec<EventChange> {
        pairings.iter().map(Pairing::classify).collect()
    }

    /// Set the calendar's summary and description to the profile's.
    /// Returns whether an update was issued.
    pub async fn sync_metadata(&self) -> HustleResult<bool> {
        let mut calendar = self.backend.get_calendar(&self.calendar_id).await?;

        if calendar.summary == self.profile.summary
            && calendar.description.as_deref() == Some(self.profile.description.as_str())
        {
            debug!("Calendar metadata up to date");
            return Ok(false);
        }

        calendar.summary = self.profile.summary.clone();
        calendar.description = Some(self.profile.description.clone());
        self.backend.update_calendar(&calendar).await?;

        info!("Calendar metadata updated: {}", calendar.summary);

        Ok(true)
    }

    /// Perform the backend call for one change. Up-to-date changes issue none.
    pub async fn apply(&self, change: &EventChange) -> HustleResult<()> {
        match change {
            EventChange::Create(event) => {
                let created = self.backend.insert_event(&self.calendar_id, event).await?;
                info!("Event created: {}", created);
            }
            EventChange::Update { new, .. } => {
                let updated = self.backend.update_event(&self.calendar_id, new).await?;
                info!(
                    "Event updated: {} ({})",
                    updated,
                    change.changed_fields().join(", ")
                );
            }
            EventChange::Delete(event) => {
                self.backend
                    .delete_event(&self.calendar_id, &event.id)
                    .await?;
                info!("Event deleted: {}", event);
            }
            EventChange::UpToDate(event) => {
                debug!("Event up to date: {}", event);
            }
        }

        Ok(())
    }

    /// Bring the calendar in line with `pairings`: metadata first, then one
    /// call per discrepancy, in pairing order.
    pub async fn sync(&self, pairings: &[Pairing]) -> HustleResult<SyncResult> {
        self.sync_metadata().await?;

        let mut result = SyncResult::default();
        for pairing in pairings {
            let change = pairing.classify();
            self.apply(&change).await?;
            result.record(change.kind());
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::*;
    use crate::backend::EventPage;
    use crate::error::HustleError;
    use crate::event::Calendar;
    use crate::sync::SyncKind;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        GetCalendar,
        UpdateCalendar(Calendar),
        ListEvents(Option<String>),
        Insert(CalendarEvent),
        Update(CalendarEvent),
        Delete(String),
    }

    /// In-memory backend serving fixed pages and recording every call.
    struct FakeBackend {
        calendar: Calendar,
        pages: Vec<EventPage>,
        fail_insert: bool,
        calls: Mutex<Vec<Call>>,
    }

    impl FakeBackend {
        fn new(pages: Vec<EventPage>) -> Self {
            let profile = CalendarProfile::default();
            Self {
                calendar: Calendar {
                    id: "cal".to_string(),
                    summary: profile.summary,
                    description: Some(profile.description),
                    time_zone: None,
                },
                pages,
                fail_insert: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn with_events(events: Vec<CalendarEvent>) -> Self {
            Self::new(vec![EventPage {
                items: events,
                next_page_token: None,
            }])
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn mutations(&self) -> Vec<Call> {
            self.calls()
                .into_iter()
                .filter(|c| matches!(c, Call::Insert(_) | Call::Update(_) | Call::Delete(_)))
                .collect()
        }
    }

    #[async_trait]
    impl CalendarBackend for FakeBackend {
        async fn get_calendar(&self, _calendar_id: &str) -> HustleResult<Calendar> {
            self.record(Call::GetCalendar);
            Ok(self.calendar.clone())
        }

        async fn update_calendar(&self, calendar: &Calendar) -> HustleResult<Calendar> {
            self.record(Call::UpdateCalendar(calendar.clone()));
            Ok(calendar.clone())
        }

        async fn list_events_page(
            &self,
            _calendar_id: &str,
            page_token: Option<&str>,
        ) -> HustleResult<EventPage> {
            self.record(Call::ListEvents(page_token.map(str::to_string)));
            let index = match page_token {
                None => 0,
                Some(token) => token
                    .trim_start_matches("page-")
                    .parse::<usize>()
                    .map_err(|e| HustleError::Calendar(e.to_string()))?,
            };
            self.pages
                .get(index)
                .cloned()
                .ok_or_else(|| HustleError::Calendar(format!("no page {}", index)))
        }

        async fn insert_event(
            &self,
            _calendar_id: &str,
            event: &CalendarEvent,
        ) -> HustleResult<CalendarEvent> {
            if self.fail_insert {
                return Err(HustleError::Calendar("insert rejected".to_string()));
            }
            self.record(Call::Insert(event.clone()));
            Ok(event.clone())
        }

        async fn update_event(
            &self,
            _calendar_id: &str,
            event: &CalendarEvent,
        ) -> HustleResult<CalendarEvent> {
            self.record(Call::Update(event.clone()));
            Ok(event.clone())
        }

        async fn delete_event(&self, _calendar_id: &str, event_id: &str) -> HustleResult<()> {
            self.record(Call::Delete(event_id.to_string()));
            Ok(())
        }
    }

    fn make_competition(topic: &str) -> Competition {
        Competition {
            forum_topic_index: topic.to_string(),
            name: format!("comp {}", topic),
            city: format!("city {}", topic),
            date: NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
        }
    }

    fn make_event(id: &str) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            start: NaiveDate::from_ymd_opt(2023, 1, 1),
            end: NaiveDate::from_ymd_opt(2023, 1, 1),
            summary: "manual".to_string(),
            description: String::new(),
            location: String::new(),
        }
    }

    #[tokio::test]
    async fn test_fetch_events_follows_page_tokens() {
        let backend = FakeBackend::new(vec![
            EventPage {
                items: vec![make_event("a")],
                next_page_token: Some("page-1".to_string()),
            },
            EventPage {
                items: vec![make_event("b"), make_event("c")],
                next_page_token: Some("page-2".to_string()),
            },
            EventPage {
                items: vec![make_event("d")],
                next_page_token: Some(String::new()),
            },
        ]);
        let reconciler = Reconciler::new(&backend, "cal", CalendarProfile::default());

        let ids: Vec<String> = reconciler
            .fetch_events()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();

        assert_eq!(ids, vec!["a", "b", "c", "d"]);
        assert_eq!(
            backend.calls(),
            vec![
                Call::ListEvents(None),
                Call::ListEvents(Some("page-1".to_string())),
                Call::ListEvents(Some("page-2".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn test_sync_applies_each_kind_once() {
        let up_to_date = make_competition("1");
        let changed = make_competition("2");
        let new = make_competition("3");

        let mut stale = changed.expected_event();
        stale.location = "old city".to_string();

        let backend = FakeBackend::with_events(vec![
            make_event("event-with-no-competition"),
            up_to_date.expected_event(),
            stale,
        ]);
        let reconciler = Reconciler::new(&backend, "cal", CalendarProfile::default());

        let pairings = reconciler
            .prepare(vec![up_to_date, changed.clone(), new.clone()])
            .await
            .unwrap();
        let result = reconciler.sync(&pairings).await.unwrap();

        assert_eq!(
            result,
            SyncResult {
                added: 1,
                deleted: 1,
                updated: 1,
                up_to_date: 1,
            }
        );
        assert_eq!(
            backend.mutations(),
            vec![
                Call::Update(changed.expected_event()),
                Call::Insert(new.expected_event()),
                Call::Delete("event-with-no-competition".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_sync_up_to_date_issues_no_mutation() {
        let competition = make_competition("1");
        let backend = FakeBackend::with_events(vec![competition.expected_event()]);
        let reconciler = Reconciler::new(&backend, "cal", CalendarProfile::default());

        let pairings = reconciler.prepare(vec![competition]).await.unwrap();
        let result = reconciler.sync(&pairings).await.unwrap();

        assert_eq!(result.up_to_date, 1);
        assert_eq!(result.total(), 1);
        assert!(backend.mutations().is_empty());
        assert!(!backend
            .calls()
            .iter()
            .any(|c| matches!(c, Call::UpdateCalendar(_))));
    }

    #[tokio::test]
    async fn test_sync_metadata_updates_when_profile_differs() {
        let backend = FakeBackend::with_events(Vec::new());
        let profile = CalendarProfile {
            summary: "Hustle competitions".to_string(),
            description: "From Radio Hustle".to_string(),
        };
        let reconciler = Reconciler::new(&backend, "cal", profile);

        assert!(reconciler.sync_metadata().await.unwrap());

        let Some(Call::UpdateCalendar(updated)) = backend.calls().last().cloned() else {
            panic!("expected a calendar update");
        };
        assert_eq!(updated.summary, "Hustle competitions");
        assert_eq!(updated.description.as_deref(), Some("From Radio Hustle"));
        assert_eq!(updated.id, "cal");
    }

    #[tokio::test]
    async fn test_plan_does_not_touch_backend() {
        let backend = FakeBackend::with_events(vec![make_event("orphan")]);
        let reconciler = Reconciler::new(&backend, "cal", CalendarProfile::default());

        let pairings = reconciler
            .prepare(vec![make_competition("5")])
            .await
            .unwrap();
        let kinds: Vec<SyncKind> = reconciler
            .plan(&pairings)
            .iter()
            .map(EventChange::kind)
            .collect();

        assert_eq!(kinds, vec![SyncKind::Create, SyncKind::Delete]);
        assert_eq!(backend.calls(), vec![Call::ListEvents(None)]);
    }

    #[tokio::test]
    async fn test_sync_aborts_on_first_failure() {
        let mut backend = FakeBackend::with_events(vec![make_event("orphan")]);
        backend.fail_insert = true;
        let reconciler = Reconciler::new(&backend, "cal", CalendarProfile::default());

        let pairings = reconciler
            .prepare(vec![make_competition("5")])
            .await
            .unwrap();
        let err = reconciler.sync(&pairings).await.unwrap_err();

        assert!(matches!(err, HustleError::Calendar(_)));
        // the orphan comes after the failed insert and must not be deleted
        assert!(backend.mutations().is_empty());
    }
}

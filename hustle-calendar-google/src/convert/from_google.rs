use hustle_calendar_core::{Calendar, CalendarEvent};

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Convert a Google event into the provider-neutral snapshot.
///
/// Only whole-day dates are kept; timed events get `None` start/end so they
/// never compare equal to a competition's expected event.
pub fn from_google_event(event: google_calendar::types::Event) -> CalendarEvent {
    CalendarEvent {
        id: event.id,
        start: event.start.and_then(|s| s.date),
        end: event.end.and_then(|e| e.date),
        summary: event.summary,
        description: event.description,
        location: event.location,
    }
}

pub fn from_google_calendar(calendar: google_calendar::types::Calendar) -> Calendar {
    Calendar {
        id: calendar.id,
        summary: calendar.summary,
        description: non_empty(calendar.description),
        time_zone: non_empty(calendar.time_zone),
    }
}

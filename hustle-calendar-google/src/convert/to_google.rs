use hustle_calendar_core::{Calendar, CalendarEvent};

fn all_day(date: Option<chrono::NaiveDate>) -> Option<google_calendar::types::EventDateTime> {
    date.map(|d| google_calendar::types::EventDateTime {
        date: Some(d),
        date_time: None,
        time_zone: String::new(),
    })
}

/// Build the request body for inserting or replacing `event`.
pub fn to_google_event(event: &CalendarEvent) -> google_calendar::types::Event {
    google_calendar::types::Event {
        id: event.id.clone(),
        summary: event.summary.clone(),
        description: event.description.clone(),
        location: event.location.clone(),
        start: all_day(event.start),
        end: all_day(event.end),
        ..Default::default()
    }
}

pub fn to_google_calendar(calendar: &Calendar) -> google_calendar::types::Calendar {
    google_calendar::types::Calendar {
        id: calendar.id.clone(),
        summary: calendar.summary.clone(),
        description: calendar.description.clone().unwrap_or_default(),
        time_zone: calendar.time_zone.clone().unwrap_or_default(),
        conference_properties: None,
        etag: String::new(),
        kind: String::new(),
        location: String::new(),
    }
}

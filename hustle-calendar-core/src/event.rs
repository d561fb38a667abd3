//! Calendar-side snapshots (provider-neutral).

use std::fmt;

use chrono::NaiveDate;

use crate::constants::EVENT_DATE_FORMAT;

/// A calendar event as stored by the backend at fetch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: String,
    /// Whole-day start date; `None` for timed or undated events
    pub start: Option<NaiveDate>,
    /// Whole-day end date, same convention as `start`
    pub end: Option<NaiveDate>,
    pub summary: String,
    pub description: String,
    pub location: String,
}

impl CalendarEvent {
    /// Whether every synced field (dates, summary, description, location)
    /// is equal. Ids are not compared.
    pub fn same_content(&self, other: &CalendarEvent) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.summary == other.summary
            && self.description == other.description
            && self.location == other.location
    }

    /// Start date as `YYYY-MM-DD`, or an empty string for events without one.
    pub fn start_date_string(&self) -> String {
        self.start
            .map(|d| d.format(EVENT_DATE_FORMAT).to_string())
            .unwrap_or_default()
    }
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.start_date_string(), self.summary)
    }
}

/// Calendar metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    pub id: String,
    pub summary: String,
    pub description: Option<String>,
    pub time_zone: Option<String>,
}

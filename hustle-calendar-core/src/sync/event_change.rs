use std::fmt;

use crate::event::CalendarEvent;
use crate::sync::SyncKind;

/// The classified outcome for one pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventChange {
    /// Insert the expected event (its id is the derived key)
    Create(CalendarEvent),
    /// Replace the stored event's fields with the expected ones
    Update {
        old: CalendarEvent,
        new: CalendarEvent,
    },
    /// Remove an event no competition refers to anymore
    Delete(CalendarEvent),
    UpToDate(CalendarEvent),
}

impl EventChange {
    pub fn kind(&self) -> SyncKind {
        match self {
            EventChange::Create(_) => SyncKind::Create,
            EventChange::Update { .. } => SyncKind::Update,
            EventChange::Delete(_) => SyncKind::Delete,
            EventChange::UpToDate(_) => SyncKind::UpToDate,
        }
    }

    /// The event the change is about (the expected one when there is one).
    pub fn event(&self) -> &CalendarEvent {
        match self {
            EventChange::Create(event)
            | EventChange::Delete(event)
            | EventChange::UpToDate(event) => event,
            EventChange::Update { new, .. } => new,
        }
    }

    /// Names of the synced fields that differ, for updates.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let EventChange::Update { old, new } = self else {
            return Vec::new();
        };

        let mut fields = Vec::new();
        if old.start != new.start {
            fields.push("start");
        }
        if old.end != new.end {
            fields.push("end");
        }
        if old.summary != new.summary {
            fields.push("summary");
        }
        if old.description != new.description {
            fields.push("description");
        }
        if old.location != new.location {
            fields.push("location");
        }
        fields
    }
}

impl fmt::Display for EventChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.event())
    }
}

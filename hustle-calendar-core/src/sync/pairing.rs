use std::collections::BTreeMap;

use crate::competition::Competition;
use crate::event::CalendarEvent;
use crate::sync::EventChange;

/// A competition and/or the calendar event stored under its key.
///
/// At least one side is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pairing {
    /// Competition without a calendar event yet
    New(Competition),
    Matched {
        competition: Competition,
        event: CalendarEvent,
    },
    /// Calendar event without a competition in the feed
    Orphan(CalendarEvent),
}

impl Pairing {
    /// Event id of this pairing: the stored event's id when there is one,
    /// otherwise the key derived from the competition.
    pub fn key(&self) -> String {
        match self {
            Pairing::New(competition) => competition.event_key(),
            Pairing::Matched { event, .. } | Pairing::Orphan(event) => event.id.clone(),
        }
    }

    pub fn event(&self) -> Option<&CalendarEvent> {
        match self {
            Pairing::Matched { event, .. } | Pairing::Orphan(event) => Some(event),
            Pairing::New(_) => None,
        }
    }

    /// Decide what has to happen to the calendar for this pairing.
    pub fn classify(&self) -> EventChange {
        match self {
            Pairing::New(competition) => EventChange::Create(competition.expected_event()),
            Pairing::Orphan(event) => EventChange::Delete(event.clone()),
            Pairing::Matched { competition, event } => {
                let expected = competition.expected_event();
                if expected.same_content(event) {
                    EventChange::UpToDate(event.clone())
                } else {
                    EventChange::Update {
                        old: event.clone(),
                        new: expected,
                    }
                }
            }
        }
    }
}

/// Pair every competition with the event stored under its derived key.
///
/// Competition pairings come first, in feed order, followed by orphaned
/// events sorted by id. If two events share an id the last one wins.
pub fn build_pairings(events: Vec<CalendarEvent>, competitions: Vec<Competition>) -> Vec<Pairing> {
    let mut events_by_id: BTreeMap<String, CalendarEvent> =
        events.into_iter().map(|e| (e.id.clone(), e)).collect();

    let mut pairings = Vec::with_capacity(competitions.len() + events_by_id.len());

    for competition in competitions {
        let pairing = match events_by_id.remove(&competition.event_key()) {
            Some(event) => Pairing::Matched { competition, event },
            None => Pairing::New(competition),
        };
        pairings.push(pairing);
    }

    pairings.extend(events_by_id.into_values().map(Pairing::Orphan));

    pairings
}

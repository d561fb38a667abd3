//! Competitions as the Radio Hustle feed publishes them.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::constants::{EVENT_KEY_PREFIX, FEED_DATE_FORMAT, TOPIC_URL_PREFIX};
use crate::event::CalendarEvent;

/// A competition record from the feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Competition {
    /// Forum topic of the competition; stable and unique per competition
    #[serde(rename = "forumTopicIndex")]
    pub forum_topic_index: String,
    #[serde(rename = "compname")]
    pub name: String,
    pub city: String,
    #[serde(deserialize_with = "deserialize_feed_date")]
    pub date: NaiveDate,
}

impl Competition {
    /// Calendar event id this competition is stored under.
    pub fn event_key(&self) -> String {
        format!("{}{}", EVENT_KEY_PREFIX, self.forum_topic_index)
    }

    pub fn topic_url(&self) -> String {
        format!("{}{}", TOPIC_URL_PREFIX, self.forum_topic_index)
    }

    /// The whole-day event this competition should be represented by.
    pub fn expected_event(&self) -> CalendarEvent {
        CalendarEvent {
            id: self.event_key(),
            start: Some(self.date),
            end: Some(self.date),
            summary: self.name.clone(),
            description: self.topic_url(),
            location: self.city.clone(),
        }
    }
}

/// Parse a feed date (`DD.MM.YYYY`).
pub fn parse_feed_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, FEED_DATE_FORMAT)
}

fn deserialize_feed_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_feed_date(&raw).map_err(|e| {
        serde::de::Error::custom(format!("invalid competition date '{}': {}", raw, e))
    })
}

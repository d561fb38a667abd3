/// Prefix of calendar event ids derived from a competition's forum topic.
pub const EVENT_KEY_PREFIX: &str = "000";

/// Forum topic link placed in the event description, followed by the topic index.
pub const TOPIC_URL_PREFIX: &str = "http://hustle-sa.ru/forum/index.php?showtopic=";

/// Competitions feed published by Radio Hustle
pub const DEFAULT_FEED_URL: &str = "https://data.radiohustle.online/db/getCompetitions/";

pub const DEFAULT_CALENDAR_SUMMARY: &str = "Хастл турниры";

pub const DEFAULT_CALENDAR_DESCRIPTION: &str =
    "От Radio Hustle\nhttps://app.radiohustle.online/#/calendar";

/// Date format used by the feed (`29.08.2024`)
pub const FEED_DATE_FORMAT: &str = "%d.%m.%Y";

/// Date format of whole-day calendar events (`2024-08-29`)
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

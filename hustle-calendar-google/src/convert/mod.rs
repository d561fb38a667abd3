//! Conversions between Google wire types and hustle-calendar-core types.

mod from_google;
mod to_google;

pub use from_google::{from_google_calendar, from_google_event};
pub use to_google::{to_google_calendar, to_google_event};

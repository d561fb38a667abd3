//! Google Calendar backend for hustle-calendar.
//!
//! Authenticates as a service account and hands the bearer token to the
//! `google-calendar` client. `GoogleClient` implements `CalendarBackend` for
//! the sync engine; `admin` holds the calendar management used by the
//! `calendar` subcommands.

pub mod admin;
pub mod api;
pub mod auth;
mod backend;
pub mod convert;
pub mod credentials;

pub use admin::{CalendarOverview, create_public_calendar, describe_calendars};
pub use api::{GoogleClient, share_link};
pub use credentials::ServiceAccountKey;

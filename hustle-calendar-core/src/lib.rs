//! Core types for hustle-calendar.
//!
//! This crate provides everything except the concrete calendar provider:
//! - `Competition` records and the `feed` client that fetches them
//! - `CalendarEvent` / `Calendar` snapshots and the `CalendarBackend` trait
//! - the `sync` module that pairs, classifies and applies changes

pub mod backend;
pub mod competition;
pub mod constants;
pub mod error;
pub mod event;
pub mod feed;
pub mod sync;

pub use backend::{CalendarBackend, EventPage};
pub use competition::Competition;
pub use error::{HustleError, HustleResult};
pub use event::{Calendar, CalendarEvent};

//! Reconciliation of feed competitions against calendar events.

mod event_change;
mod pairing;
mod reconciler;
mod sync_kind;
mod sync_result;

pub use event_change::EventChange;
pub use pairing::{Pairing, build_pairings};
pub use reconciler::{CalendarProfile, Reconciler};
pub use sync_kind::SyncKind;
pub use sync_result::SyncResult;

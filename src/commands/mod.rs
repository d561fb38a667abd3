pub mod calendar;
pub mod sync;

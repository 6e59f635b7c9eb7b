//! Data model for interface statistics.

pub mod counter;
pub mod snapshot;

pub use counter::{COUNTER_COUNT, Counter, Direction, UnknownCounter};
pub use snapshot::{InterfaceCounters, StatsSnapshot};

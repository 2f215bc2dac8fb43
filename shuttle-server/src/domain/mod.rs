//! Domain types for the shuttle departures board.
//!
//! These types enforce their invariants at construction time, so the
//! schedule evaluators can trust any value they receive.

mod status;
mod time;

pub use status::DepartureStatus;
pub use time::{MINUTES_PER_DAY, TimeError, TimeOfDay};

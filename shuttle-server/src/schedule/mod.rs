//! Schedule model and the status/next-departure evaluators.
//!
//! Everything in this module is pure: the evaluators map a `TimeOfDay`
//! and an immutable schedule to plain result data, with no clock access
//! and no rendering concerns.

mod config;
mod fixed;
mod repeating;

pub use config::ScheduleConfig;
pub use fixed::FixedDeparture;
pub use repeating::{DepartureBoard, RepeatingSchedule, ScheduleError, Slot, SlotState};

//! The fleet's schedule configuration.
//!
//! Immutable for the lifetime of the process: built once at startup,
//! validated fail-fast, and only ever read afterwards.

use crate::domain::TimeOfDay;

use super::fixed::FixedDeparture;
use super::repeating::{RepeatingSchedule, ScheduleError};

/// Schedules for the two vehicles shown on the page.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// The charter van: one trip per day.
    pub charter: FixedDeparture,

    /// The shuttle loop: several trips per day.
    pub shuttle: RepeatingSchedule,
}

impl ScheduleConfig {
    /// The published timetable.
    ///
    /// Charter departs 08:00 with a 15 minute boarding window and a
    /// 60 minute run; the shuttle loops at 09:30, 11:00, 13:00, 15:30
    /// and 17:00.
    ///
    /// Fails if the built-in timetable is malformed, in which case the
    /// process should refuse to start rather than serve a broken board.
    pub fn builtin() -> Result<Self, ScheduleError> {
        let hm = |h, m| {
            // Constants below are all in range; from_hm only rejects
            // out-of-range components.
            TimeOfDay::from_hm(h, m).expect("builtin times are in range")
        };

        Ok(Self {
            charter: FixedDeparture::new(hm(8, 0), 15, 60),
            shuttle: RepeatingSchedule::new(vec![
                hm(9, 30),
                hm(11, 0),
                hm(13, 0),
                hm(15, 30),
                hm(17, 0),
            ])?,
        })
    }
}

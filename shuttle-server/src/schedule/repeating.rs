//! Next-departure evaluation for a vehicle with several daily departures.

use crate::domain::TimeOfDay;
use serde::Serialize;

/// Error returned when constructing an invalid repeating schedule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// The departure list is empty.
    #[error("schedule must have at least one departure")]
    Empty,

    /// The departure list is not strictly ascending (duplicates included).
    #[error("departures must be strictly ascending: {earlier} is not before {later}")]
    NotAscending {
        earlier: TimeOfDay,
        later: TimeOfDay,
    },
}

/// Classification of one departure slot relative to the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    /// Already left (a departure exactly at the current minute counts here).
    Departed,
    /// The earliest departure still in the future.
    Next,
    /// Later than the next departure.
    Upcoming,
}

/// One entry of an evaluated departure board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub time: TimeOfDay,
    pub state: SlotState,
}

/// The evaluated board for a repeating schedule: every departure classified,
/// in the schedule's original order.
///
/// `next` is `None` exactly when every departure has already left for the
/// day ("none remaining today").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureBoard {
    pub slots: Vec<Slot>,
    pub next: Option<TimeOfDay>,
}

impl DepartureBoard {
    /// True when no departure remains today.
    pub fn none_remaining(&self) -> bool {
        self.next.is_none()
    }
}

/// An ordered set of daily departure times for one vehicle.
///
/// Valid by construction: non-empty and strictly ascending. Duplicate
/// times are rejected rather than deduplicated, since a schedule listing
/// the same departure twice is a data error, not a convenience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatingSchedule {
    departures: Vec<TimeOfDay>,
}

impl RepeatingSchedule {
    /// Create a schedule from an ordered list of departures.
    ///
    /// # Examples
    ///
    /// ```
    /// use shuttle_server::domain::TimeOfDay;
    /// use shuttle_server::schedule::RepeatingSchedule;
    ///
    /// let t = |m| TimeOfDay::new(m).unwrap();
    /// assert!(RepeatingSchedule::new(vec![t(570), t(660)]).is_ok());
    ///
    /// // Empty, unsorted, and duplicated schedules are rejected
    /// assert!(RepeatingSchedule::new(vec![]).is_err());
    /// assert!(RepeatingSchedule::new(vec![t(660), t(570)]).is_err());
    /// assert!(RepeatingSchedule::new(vec![t(570), t(570)]).is_err());
    /// ```
    pub fn new(departures: Vec<TimeOfDay>) -> Result<Self, ScheduleError> {
        if departures.is_empty() {
            return Err(ScheduleError::Empty);
        }
        for pair in departures.windows(2) {
            if pair[0] >= pair[1] {
                return Err(ScheduleError::NotAscending {
                    earlier: pair[0],
                    later: pair[1],
                });
            }
        }
        Ok(Self { departures })
    }

    /// The departure times, strictly ascending.
    pub fn departures(&self) -> &[TimeOfDay] {
        &self.departures
    }

    /// Evaluate the board at the given time.
    ///
    /// Single ascending pass: the first departure strictly after `now` is
    /// `Next`, everything before it `Departed`, everything after it
    /// `Upcoming`. A departure exactly at `now` counts as departed, matching
    /// the fixed-departure rule that the departure minute is still a
    /// boarding/departing minute, not an upcoming one.
    pub fn board_at(&self, now: TimeOfDay) -> DepartureBoard {
        let mut slots = Vec::with_capacity(self.departures.len());
        let mut next = None;

        for &time in &self.departures {
            let state = if next.is_some() {
                SlotState::Upcoming
            } else if time > now {
                next = Some(time);
                SlotState::Next
            } else {
                SlotState::Departed
            };
            slots.push(Slot { time, state });
        }

        DepartureBoard { slots, next }
    }
}

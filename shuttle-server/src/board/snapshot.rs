//! The evaluated board: what the page displays at one moment in time.

use crate::domain::{DepartureStatus, TimeOfDay};
use crate::schedule::{DepartureBoard, ScheduleConfig};

/// Both vehicles' outputs, evaluated at a single clock reading.
///
/// Computed fresh on every refresh and never mutated in place; the
/// driver swaps whole outputs under its lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// Status of the fixed-departure charter.
    pub charter: DepartureStatus,

    /// Per-slot classification of the shuttle loop.
    pub shuttle: DepartureBoard,

    /// The clock reading the snapshot was evaluated at.
    pub generated_at: TimeOfDay,
}

impl BoardSnapshot {
    /// Evaluate both schedules at the given time.
    pub fn compute(config: &ScheduleConfig, now: TimeOfDay) -> Self {
        Self {
            charter: config.charter.status_at(now),
            shuttle: config.shuttle.board_at(now),
            generated_at: now,
        }
    }
}

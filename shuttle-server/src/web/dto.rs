//! Data transfer objects for the JSON API.

use serde::{Deserialize, Serialize};

use crate::board::BoardSnapshot;
use crate::domain::DepartureStatus;
use crate::schedule::SlotState;

/// Query parameters for the board endpoint.
#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    /// Optional "HH:MM" time to preview the board at, instead of now.
    pub at: Option<String>,
}

/// The full board as served by `GET /api/board`.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// The fixed-departure charter.
    pub charter: CharterResult,

    /// The repeating shuttle loop.
    pub shuttle: ShuttleResult,

    /// Time the board was evaluated at, "HH:MM".
    pub generated_at: String,
}

/// Charter status output.
#[derive(Debug, Serialize)]
pub struct CharterResult {
    /// Status tag (machine-readable).
    pub status: DepartureStatus,

    /// Badge label (human-readable).
    pub label: String,

    /// Badge style class, one of four mutually exclusive categories.
    pub css_class: String,
}

/// Shuttle board output.
#[derive(Debug, Serialize)]
pub struct ShuttleResult {
    /// Every departure slot, in timetable order.
    pub slots: Vec<SlotResult>,

    /// The highlighted next departure, "HH:MM".
    pub next: Option<String>,

    /// True when no departure remains today.
    pub none_remaining: bool,
}

/// One classified departure slot.
#[derive(Debug, Serialize)]
pub struct SlotResult {
    /// Departure time, "HH:MM".
    pub time: String,

    /// Classification relative to the evaluation time.
    pub state: SlotState,
}

impl BoardResponse {
    /// Build the API response from an evaluated snapshot.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Self {
        Self {
            charter: CharterResult {
                status: snapshot.charter,
                label: snapshot.charter.label().to_string(),
                css_class: snapshot.charter.css_class().to_string(),
            },
            shuttle: ShuttleResult {
                slots: snapshot
                    .shuttle
                    .slots
                    .iter()
                    .map(|s| SlotResult {
                        time: s.time.to_string(),
                        state: s.state,
                    })
                    .collect(),
                next: snapshot.shuttle.next.map(|t| t.to_string()),
                none_remaining: snapshot.shuttle.none_remaining(),
            },
            generated_at: snapshot.generated_at.to_string(),
        }
    }
}

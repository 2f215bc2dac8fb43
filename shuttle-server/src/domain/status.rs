//! Display status for the fixed-departure charter.

use serde::Serialize;
use std::fmt;

/// Status of a vehicle with a single fixed daily departure.
///
/// This is a closed set: every evaluation of the charter schedule lands in
/// exactly one of these four states, and there is no fifth fallback state
/// for unexpected input (malformed times are rejected before evaluation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartureStatus {
    /// Before the boarding window opens.
    Scheduled,
    /// Within the boarding window, up to and including the departure minute.
    Boarding,
    /// After departure, while the vehicle is still travelling.
    EnRoute,
    /// The day's trip is over.
    Concluded,
}

impl DepartureStatus {
    /// Human-readable badge label, as shown on the page.
    pub fn label(&self) -> &'static str {
        match self {
            DepartureStatus::Scheduled => "Scheduled",
            DepartureStatus::Boarding => "Boarding Now",
            DepartureStatus::EnRoute => "En Route",
            DepartureStatus::Concluded => "Concluded for Today",
        }
    }

    /// CSS class for the status badge. The four classes are mutually
    /// exclusive visual categories.
    pub fn css_class(&self) -> &'static str {
        match self {
            DepartureStatus::Scheduled => "status-badge status-scheduled",
            DepartureStatus::Boarding => "status-badge status-boarding",
            DepartureStatus::EnRoute => "status-badge status-en-route",
            DepartureStatus::Concluded => "status-badge status-concluded",
        }
    }
}

impl fmt::Display for DepartureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [DepartureStatus; 4] = [
        DepartureStatus::Scheduled,
        DepartureStatus::Boarding,
        DepartureStatus::EnRoute,
        DepartureStatus::Concluded,
    ];

    #[test]
    fn labels() {
        assert_eq!(DepartureStatus::Scheduled.label(), "Scheduled");
        assert_eq!(DepartureStatus::Boarding.label(), "Boarding Now");
        assert_eq!(DepartureStatus::EnRoute.label(), "En Route");
        assert_eq!(DepartureStatus::Concluded.label(), "Concluded for Today");
    }

    #[test]
    fn css_classes_are_distinct() {
        use std::collections::HashSet;
        let classes: HashSet<&str> = ALL.iter().map(|s| s.css_class()).collect();
        assert_eq!(classes.len(), ALL.len());
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&DepartureStatus::EnRoute).unwrap(),
            "\"en_route\""
        );
        assert_eq!(
            serde_json::to_string(&DepartureStatus::Scheduled).unwrap(),
            "\"scheduled\""
        );
    }
}

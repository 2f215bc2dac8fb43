//! Askama templates and their view models.

use askama::Template;

use crate::board::BoardSnapshot;
use crate::schedule::SlotState;

// ============================================================================
// Page Templates
// ============================================================================

/// The marketing page, server-rendered with the current board inlined.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub board: BoardView,
}

// ============================================================================
// Fragment Templates (polled by the page, no surrounding chrome)
// ============================================================================

/// Live board fragment, re-fetched by the page every refresh interval.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub board: BoardView,
}

// ============================================================================
// View Models
// ============================================================================

/// Board view model for templates.
#[derive(Debug, Clone)]
pub struct BoardView {
    /// Charter badge label.
    pub charter_label: &'static str,

    /// Charter badge style class.
    pub charter_class: &'static str,

    /// Shuttle departure slots, in timetable order.
    pub slots: Vec<SlotView>,

    /// Text for the "next departure" callout ("11:00" or "None").
    pub next_label: String,

    /// Style class for the callout: green while departures remain,
    /// red once the day is over.
    pub next_class: &'static str,

    /// Evaluation time, "HH:MM".
    pub generated_at: String,
}

/// One shuttle slot as rendered.
#[derive(Debug, Clone)]
pub struct SlotView {
    pub time: String,
    pub css_class: &'static str,
}

impl BoardView {
    /// Build the view from an evaluated snapshot.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Self {
        let slots = snapshot
            .shuttle
            .slots
            .iter()
            .map(|s| SlotView {
                time: s.time.to_string(),
                css_class: match s.state {
                    SlotState::Departed => "slot slot-departed",
                    SlotState::Next => "slot slot-next",
                    SlotState::Upcoming => "slot slot-upcoming",
                },
            })
            .collect();

        let (next_label, next_class) = match snapshot.shuttle.next {
            Some(t) => (t.to_string(), "next-callout next-available"),
            None => ("None".to_string(), "next-callout next-none"),
        };

        Self {
            charter_label: snapshot.charter.label(),
            charter_class: snapshot.charter.css_class(),
            slots,
            next_label,
            next_class,
            generated_at: snapshot.generated_at.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeOfDay;
    use crate::schedule::ScheduleConfig;

    fn view_at(mins: u16) -> BoardView {
        let config = ScheduleConfig::builtin().unwrap();
        let snap = BoardSnapshot::compute(&config, TimeOfDay::new(mins).unwrap());
        BoardView::from_snapshot(&snap)
    }

    #[test]
    fn highlights_next_slot() {
        let view = view_at(600); // 10:00

        assert_eq!(view.slots[0].css_class, "slot slot-departed");
        assert_eq!(view.slots[1].css_class, "slot slot-next");
        assert_eq!(view.slots[2].css_class, "slot slot-upcoming");
        assert_eq!(view.next_label, "11:00");
        assert_eq!(view.next_class, "next-callout next-available");
    }

    #[test]
    fn end_of_day_shows_none_in_red() {
        let view = view_at(1100); // 18:20

        assert!(view.slots.iter().all(|s| s.css_class == "slot slot-departed"));
        assert_eq!(view.next_label, "None");
        assert_eq!(view.next_class, "next-callout next-none");
        assert_eq!(view.charter_label, "Concluded for Today");
    }

    #[test]
    fn board_fragment_renders() {
        let template = BoardTemplate {
            board: view_at(470), // 07:50
        };
        let html = template.render().unwrap();

        assert!(html.contains("Boarding Now"));
        assert!(html.contains("09:30"));
        assert!(html.contains("slot-next"));
    }

    #[test]
    fn index_page_renders() {
        let template = IndexTemplate {
            board: view_at(600),
        };
        let html = template.render().unwrap();

        assert!(html.contains("11:00"));
        assert!(html.contains("/static/js/animations.js"));
    }
}

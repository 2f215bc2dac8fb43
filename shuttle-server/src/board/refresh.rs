//! The periodic refresh driver.
//!
//! Owns the shared snapshot and the 30-second tokio task that keeps it
//! current. The driver holds no state between ticks beyond the interval
//! timer and the snapshot itself.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::domain::TimeOfDay;
use crate::schedule::ScheduleConfig;

use super::clock::Clock;
use super::snapshot::BoardSnapshot;

/// How often the board re-reads the clock and re-evaluates the schedules.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// The live departures board.
///
/// Cheap to clone; all clones share the same snapshot and configuration.
#[derive(Clone)]
pub struct LiveBoard {
    config: Arc<ScheduleConfig>,
    clock: Arc<dyn Clock>,
    snapshot: Arc<RwLock<BoardSnapshot>>,
}

impl LiveBoard {
    /// Create a board and evaluate it once immediately, so the first
    /// request after startup never sees a stale or empty board.
    pub fn new(config: ScheduleConfig, clock: Arc<dyn Clock>) -> Self {
        let snapshot = BoardSnapshot::compute(&config, clock.now());
        Self {
            config: Arc::new(config),
            clock,
            snapshot: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// The current snapshot.
    pub async fn snapshot(&self) -> BoardSnapshot {
        self.snapshot.read().await.clone()
    }

    /// Evaluate the board at an arbitrary time without touching the
    /// stored snapshot. Used by the `?at=` preview.
    pub fn preview_at(&self, at: TimeOfDay) -> BoardSnapshot {
        BoardSnapshot::compute(&self.config, at)
    }

    /// Re-read the clock and re-evaluate both outputs.
    ///
    /// Each output is computed and written independently: a problem with
    /// one output never prevents the other from being refreshed.
    pub async fn refresh(&self) {
        let now = self.clock.now();

        let charter = self.config.charter.status_at(now);
        {
            let mut snap = self.snapshot.write().await;
            snap.charter = charter;
            snap.generated_at = now;
        }
        tracing::debug!(%now, status = %charter, "refreshed charter status");

        let shuttle = self.config.shuttle.board_at(now);
        let next = shuttle.next;
        {
            let mut snap = self.snapshot.write().await;
            snap.shuttle = shuttle;
            snap.generated_at = now;
        }
        match next {
            Some(next) => tracing::debug!(%now, %next, "refreshed shuttle board"),
            None => tracing::debug!(%now, "refreshed shuttle board, none remaining today"),
        }
    }

    /// Spawn the periodic refresh task.
    ///
    /// The returned handle stops the task on teardown; dropping it without
    /// calling [`RefreshHandle::stop`] leaves the task running for the
    /// life of the runtime, which is the normal server configuration.
    pub fn spawn_refresh(&self, interval: Duration) -> RefreshHandle {
        let board = self.clone();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(interval);
            interval.tick().await; // First tick is immediate; `new` already evaluated.
            loop {
                interval.tick().await;
                board.refresh().await;
            }
        });
        RefreshHandle { task }
    }
}

/// Handle to the periodic refresh task.
pub struct RefreshHandle {
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Stop the periodic task. Idempotent.
    pub fn stop(&self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::clock::FixedClock;
    use crate::domain::DepartureStatus;
    use crate::schedule::SlotState;

    fn t(mins: u16) -> TimeOfDay {
        TimeOfDay::new(mins).unwrap()
    }

    fn board_at(mins: u16) -> LiveBoard {
        let config = ScheduleConfig::builtin().unwrap();
        LiveBoard::new(config, Arc::new(FixedClock(t(mins))))
    }

    #[tokio::test]
    async fn initial_snapshot_is_evaluated() {
        let board = board_at(470); // 07:50
        let snap = board.snapshot().await;

        assert_eq!(snap.charter, DepartureStatus::Boarding);
        assert_eq!(snap.shuttle.next, Some(t(570)));
        assert_eq!(snap.generated_at, t(470));
    }

    #[tokio::test]
    async fn refresh_rewrites_both_outputs() {
        let config = ScheduleConfig::builtin().unwrap();
        let clock = Arc::new(std::sync::Mutex::new(t(470)));

        struct StepClock(Arc<std::sync::Mutex<TimeOfDay>>);
        impl Clock for StepClock {
            fn now(&self) -> TimeOfDay {
                *self.0.lock().unwrap()
            }
        }

        let board = LiveBoard::new(config, Arc::new(StepClock(clock.clone())));
        assert_eq!(board.snapshot().await.charter, DepartureStatus::Boarding);

        // Advance the clock to 10:00 and refresh.
        *clock.lock().unwrap() = t(600);
        board.refresh().await;

        let snap = board.snapshot().await;
        assert_eq!(snap.charter, DepartureStatus::Concluded);
        assert_eq!(snap.shuttle.slots[0].state, SlotState::Departed);
        assert_eq!(snap.shuttle.next, Some(t(660)));
        assert_eq!(snap.generated_at, t(600));
    }

    #[tokio::test]
    async fn preview_does_not_touch_snapshot() {
        let board = board_at(470);

        let preview = board.preview_at(t(1200));
        assert_eq!(preview.charter, DepartureStatus::Concluded);
        assert!(preview.shuttle.none_remaining());

        // The stored snapshot is unchanged.
        let snap = board.snapshot().await;
        assert_eq!(snap.generated_at, t(470));
        assert_eq!(snap.charter, DepartureStatus::Boarding);
    }

    #[tokio::test]
    async fn spawned_task_refreshes_and_stops() {
        let board = board_at(600);
        let handle = board.spawn_refresh(Duration::from_millis(5));

        // Give the task a couple of ticks, then stop it.
        tokio::time::sleep(Duration::from_millis(20)).await;
        handle.stop();

        let snap = board.snapshot().await;
        assert_eq!(snap.generated_at, t(600));
    }
}

//! The live board: clock source, snapshot evaluation, and the periodic
//! refresh driver.

mod clock;
mod refresh;
mod snapshot;

pub use clock::{Clock, FixedClock, SystemClock};
pub use refresh::{LiveBoard, REFRESH_INTERVAL, RefreshHandle};
pub use snapshot::BoardSnapshot;

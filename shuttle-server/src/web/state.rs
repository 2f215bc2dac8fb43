//! Application state for the web layer.

use crate::board::LiveBoard;

/// Shared application state.
///
/// The board is already internally shared, so the state is a thin
/// cloneable wrapper.
#[derive(Clone)]
pub struct AppState {
    /// The live departures board.
    pub board: LiveBoard,
}

impl AppState {
    /// Create a new app state.
    pub fn new(board: LiveBoard) -> Self {
        Self { board }
    }
}

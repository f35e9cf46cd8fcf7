//! Play statistics for the rover game

/// Counters tracking what the player has done so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameStats {
    /// Successful single-cell moves
    pub moves_made: usize,
    /// Moves rejected at the room edge
    pub moves_rejected: usize,
    pub parts_collected: usize,
    /// Portal transitions, in either direction
    pub portal_crossings: usize,
    /// Rooms generated, including the home room
    pub rooms_generated: usize,
    pub tasks_completed: usize,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        format!(
            "Moves: {} (rejected {}) | Parts: {} | Crossings: {} | Rooms: {} | Repairs: {}",
            self.moves_made,
            self.moves_rejected,
            self.parts_collected,
            self.portal_crossings,
            self.rooms_generated,
            self.tasks_completed
        )
    }
}

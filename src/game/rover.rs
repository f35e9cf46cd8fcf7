//! The player-controlled rover

use super::types::{Direction, Point, MAX_INDEX};

/// The rover and its position in the current room
#[derive(Debug, Clone)]
pub struct Rover {
    pub position: Point,
}

impl Rover {
    pub fn new(position: Point) -> Self {
        Self { position }
    }

    /// Step one cell in a direction.
    /// Returns false (and stays put) if the step would leave the grid.
    pub fn step(&mut self, direction: Direction) -> bool {
        let Point { x, y } = self.position;
        let next = match direction {
            Direction::Up if y > 0 => Point::new(x, y - 1),
            Direction::Down if y < MAX_INDEX => Point::new(x, y + 1),
            Direction::Left if x > 0 => Point::new(x - 1, y),
            Direction::Right if x < MAX_INDEX => Point::new(x + 1, y),
            _ => return false,
        };
        self.position = next;
        true
    }
}

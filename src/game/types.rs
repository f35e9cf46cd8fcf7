//! Core types for the rover game
//!
//! Coordinates, identifiers and the fixed tuning constants of the game world.

/// Rooms are square grids of this many cells per side
pub const ROOM_SIZE: usize = 15;

/// Largest valid row/column index in a room
pub const MAX_INDEX: usize = ROOM_SIZE - 1;

/// Number of portals placed in every generated room
pub const PORTAL_COUNT_RANGE: std::ops::RangeInclusive<usize> = 3..=8;

/// Number of parts scattered in every generated room
pub const PART_COUNT_RANGE: std::ops::RangeInclusive<usize> = 5..=15;

/// Collectable part types, cycled through when parts are placed
pub const PART_TYPES: [&str; 5] = ["wrench", "resistor", "bulb", "mushroom", "coin"];

/// Distinct part types each task asks for
pub const SUPPLIES_PER_TASK: usize = 3;

/// How many of a single part a task may ask for
pub const SUPPLY_COUNT_RANGE: std::ops::RangeInclusive<u32> = 1..=3;

/// Repair jobs in the order they are queued at game start
pub const BROKEN_COMPONENTS: [&str; 6] = ["head", "hand", "leg", "body", "hand", "leg"];

/// Fixed ship component cells of the home room (row, col, component name)
pub const SHIP_LAYOUT: [(usize, usize, &str); 6] = [
    (6, 7, "head"),
    (7, 6, "hand"),
    (7, 7, "body"),
    (7, 8, "hand"),
    (8, 6, "leg"),
    (8, 8, "leg"),
];

/// Label suffix of a ship component that still needs repair
pub const BROKEN_SUFFIX: &str = "broken";

/// Label of a portal at rest
pub const PORTAL_LABEL: &str = "pipe";

/// Label of the portal that leads back towards home
pub const PORTAL_FLASHING_LABEL: &str = "pipe-flashing";

/// Image shown for the rover
pub const ROVER_IMAGE: &str = "rover.ppm";

/// Give up on random placement after this many occupied-cell hits
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Identifier of a generated room (index into the game's room list)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(pub usize);

/// The home room is always the first room generated
pub const HOME_ROOM: RoomId = RoomId(0);

/// A grid cell addressed by row and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < ROOM_SIZE && self.col < ROOM_SIZE
    }
}

impl From<Point> for Location {
    fn from(point: Point) -> Self {
        Location::new(point.y, point.x)
    }
}

/// A screen position: x is the column, y is the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<Location> for Point {
    fn from(location: Location) -> Self {
        Point::new(location.col, location.row)
    }
}

/// A single-step movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Identifies a portal by where it sits in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortalRef {
    pub room: RoomId,
    pub location: Location,
}

impl PortalRef {
    pub fn new(room: RoomId, location: Location) -> Self {
        Self { room, location }
    }
}

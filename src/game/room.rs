//! Room grids and their random generation
//!
//! A room is a fixed 15x15 grid where each cell is empty or holds one item.
//! Rooms are generated once and never destroyed.

use log::{debug, warn};
use rand::Rng;

use super::item::{Item, Portal};
use super::types::{
    Location, PortalRef, RoomId, MAX_PLACEMENT_ATTEMPTS, PART_COUNT_RANGE, PART_TYPES,
    PORTAL_COUNT_RANGE, ROOM_SIZE, SHIP_LAYOUT,
};

/// One grid of the game world
#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    cells: Vec<Vec<Option<Item>>>,
}

impl Room {
    /// Create an empty room
    pub fn new(id: RoomId) -> Self {
        Self {
            id,
            cells: vec![vec![None; ROOM_SIZE]; ROOM_SIZE],
        }
    }

    /// Build a fully populated room. Only the home room carries ship components.
    pub fn generate<R: Rng>(id: RoomId, is_home: bool, rng: &mut R) -> Self {
        let mut room = Room::new(id);
        if is_home {
            room.place_ship_components();
        }

        let portal_count = rng.random_range(PORTAL_COUNT_RANGE);
        let placed_portals = room.place_portals(portal_count, rng);

        let part_count = rng.random_range(PART_COUNT_RANGE);
        let placed_parts = room.place_parts(part_count, rng);

        debug!(
            "Generated room {:?} (home: {}): {} portals, {} parts",
            id, is_home, placed_portals, placed_parts
        );
        room
    }

    pub fn get(&self, location: Location) -> Option<&Item> {
        if !location.in_bounds() {
            return None;
        }
        self.cells[location.row][location.col].as_ref()
    }

    pub fn get_mut(&mut self, location: Location) -> Option<&mut Item> {
        if !location.in_bounds() {
            return None;
        }
        self.cells[location.row][location.col].as_mut()
    }

    /// Put an item into a cell (or clear it with `None`), returning what was there
    pub fn set(&mut self, location: Location, item: Option<Item>) -> Option<Item> {
        if !location.in_bounds() {
            return None;
        }
        std::mem::replace(&mut self.cells[location.row][location.col], item)
    }

    /// Remove and return the item at a cell
    pub fn take(&mut self, location: Location) -> Option<Item> {
        self.set(location, None)
    }

    pub fn is_empty_at(&self, location: Location) -> bool {
        self.get(location).is_none()
    }

    pub fn portal(&self, location: Location) -> Option<&Portal> {
        self.get(location).and_then(Item::as_portal)
    }

    pub fn portal_mut(&mut self, location: Location) -> Option<&mut Portal> {
        self.get_mut(location).and_then(Item::as_portal_mut)
    }

    /// Change the display label of the item at a cell, if any
    pub fn set_label(&mut self, location: Location, label: &str) -> bool {
        match self.get_mut(location) {
            Some(item) => {
                item.set_label(label);
                true
            }
            None => false,
        }
    }

    /// All occupied cells in row-major order
    pub fn items(&self) -> impl Iterator<Item = (Location, &Item)> {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.as_ref().map(|item| (Location::new(row, col), item))
            })
        })
    }

    /// Count occupied cells matching a predicate
    pub fn count_items(&self, predicate: impl Fn(&Item) -> bool) -> usize {
        self.items().filter(|(_, item)| predicate(item)).count()
    }

    /// First portal without a link, scanning rows top to bottom
    pub fn find_open_portal(&self) -> Option<Location> {
        self.items().find_map(|(location, item)| match item {
            Item::Portal(portal) if !portal.is_linked() => Some(location),
            _ => None,
        })
    }

    /// Place the broken ship components at their fixed cells
    pub fn place_ship_components(&mut self) {
        for (row, col, name) in SHIP_LAYOUT {
            self.set(Location::new(row, col), Some(Item::broken_component(name)));
        }
    }

    /// Place up to `count` unlinked portals on empty cells. Returns how many were placed.
    pub fn place_portals<R: Rng>(&mut self, count: usize, rng: &mut R) -> usize {
        for placed in 0..count {
            let Some(location) = self.random_empty_cell(rng) else {
                warn!("Room {:?}: no empty cell for portal {} of {}", self.id, placed + 1, count);
                return placed;
            };
            let portal = Portal::new(PortalRef::new(self.id, location));
            self.set(location, Some(Item::Portal(portal)));
        }
        count
    }

    /// Place up to `count` parts on empty cells, cycling through the part types.
    /// Returns how many were placed.
    pub fn place_parts<R: Rng>(&mut self, count: usize, rng: &mut R) -> usize {
        for placed in 0..count {
            let Some(location) = self.random_empty_cell(rng) else {
                warn!("Room {:?}: no empty cell for part {} of {}", self.id, placed + 1, count);
                return placed;
            };
            let kind = PART_TYPES[placed % PART_TYPES.len()];
            self.set(location, Some(Item::part(kind)));
        }
        count
    }

    /// Sample random cells until an empty one turns up, giving up after
    /// `MAX_PLACEMENT_ATTEMPTS` tries
    fn random_empty_cell<R: Rng>(&self, rng: &mut R) -> Option<Location> {
        (0..MAX_PLACEMENT_ATTEMPTS)
            .map(|_| Location::new(rng.random_range(0..ROOM_SIZE), rng.random_range(0..ROOM_SIZE)))
            .find(|location| self.is_empty_at(*location))
    }
}

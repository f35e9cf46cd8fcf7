//! The game controller that ties everything together
//!
//! `Game` owns every generated room, the rover, the inventory, the portal
//! history and the task queue. Front-ends drive it one action at a time and
//! read back plain strings and positions.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::inventory::Inventory;
use super::item::Item;
use super::portal_stack::PortalStack;
use super::room::Room;
use super::rover::Rover;
use super::stats::GameStats;
use super::task::{generate_task_queue, TaskQueue};
use super::types::{
    Direction, Location, Point, PortalRef, RoomId, BROKEN_SUFFIX, HOME_ROOM,
    PORTAL_FLASHING_LABEL, PORTAL_LABEL, ROOM_SIZE, ROVER_IMAGE,
};

/// Shown in place of a task once every repair is done
pub const WIN_MESSAGE: &str = "You win! Fly around with your new Iron Man suit!";

/// The main game state
pub struct Game {
    /// Every room generated so far, indexed by `RoomId`
    rooms: Vec<Room>,

    /// Room the rover is currently in
    current_room: RoomId,

    rover: Rover,

    inventory: Inventory,

    /// Portals the rover arrived through, most recent on top
    entered_portals: PortalStack,

    tasks: TaskQueue,

    stats: GameStats,

    /// Optional seeded RNG for reproducible games
    rng: Option<StdRng>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    fn new_internal(rng: Option<StdRng>) -> Self {
        let mut game = Self {
            rooms: Vec::new(),
            current_room: HOME_ROOM,
            rover: Rover::new(Point::new(0, 0)),
            inventory: Inventory::new(),
            entered_portals: PortalStack::new(),
            tasks: TaskQueue::new(),
            stats: GameStats::new(),
            rng,
        };

        let home = game.create_room(true);
        game.add_room(home);

        game.tasks = match &mut game.rng {
            Some(rng) => generate_task_queue(rng),
            None => generate_task_queue(&mut rand::rng()),
        };

        let x = game.random_index();
        let y = game.random_index();
        game.rover.position = Point::new(x, y);

        info!(
            "New game: rover at ({}, {}), {} tasks queued",
            x,
            y,
            game.tasks.len()
        );
        game
    }

    pub fn new() -> Self {
        Self::new_internal(None)
    }

    /// Create a new game with a seeded RNG for reproducible play
    pub fn new_with_seed(seed: u64) -> Self {
        Self::new_internal(Some(StdRng::seed_from_u64(seed)))
    }

    /// Get a random row/column index, using seeded RNG if available
    fn random_index(&mut self) -> usize {
        match &mut self.rng {
            Some(rng) => rng.random_range(0..ROOM_SIZE),
            None => rand::rng().random_range(0..ROOM_SIZE),
        }
    }

    /// Generate the next room without adding it to the world
    fn create_room(&mut self, is_home: bool) -> Room {
        let id = RoomId(self.rooms.len());
        match &mut self.rng {
            Some(rng) => Room::generate(id, is_home, rng),
            None => Room::generate(id, is_home, &mut rand::rng()),
        }
    }

    fn add_room(&mut self, room: Room) -> RoomId {
        let id = room.id;
        self.rooms.push(room);
        self.stats.rooms_generated += 1;
        info!("Room {:?} created ({} rooms total)", id, self.rooms.len());
        id
    }

    // ---- Queries ----

    /// Where the rover is on screen
    pub fn rover_location(&self) -> Point {
        self.rover.position
    }

    pub fn rover_image(&self) -> &'static str {
        ROVER_IMAGE
    }

    /// Image file for the item at a screen position, `None` for an empty cell
    pub fn image_at(&self, point: Point) -> Option<String> {
        self.current_room().get(point.into()).map(Item::image_name)
    }

    /// Inventory rendered as one "<count> <name>" line per part
    pub fn inventory_description(&self) -> String {
        self.inventory.to_display_string()
    }

    /// The front task, or the win message once all repairs are done
    pub fn current_task_description(&self) -> String {
        match self.tasks.peek() {
            Some(task) => task.to_string(),
            None => WIN_MESSAGE.to_string(),
        }
    }

    pub fn is_won(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn current_room_id(&self) -> RoomId {
        self.current_room
    }

    pub fn current_room(&self) -> &Room {
        &self.rooms[self.current_room.0]
    }

    /// Mutable access to the current room, for scripted setups
    pub fn current_room_mut(&mut self) -> &mut Room {
        &mut self.rooms[self.current_room.0]
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn tasks(&self) -> &TaskQueue {
        &self.tasks
    }

    pub fn entered_portals(&self) -> &PortalStack {
        &self.entered_portals
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    // ---- Commands ----

    /// Put the rover on a cell without triggering portals, for scripted setups.
    /// Returns false if the point is outside the room.
    pub fn place_rover(&mut self, point: Point) -> bool {
        if !Location::from(point).in_bounds() {
            return false;
        }
        self.rover.position = point;
        true
    }

    pub fn move_up(&mut self) -> bool {
        self.move_rover(Direction::Up)
    }

    pub fn move_down(&mut self) -> bool {
        self.move_rover(Direction::Down)
    }

    pub fn move_left(&mut self) -> bool {
        self.move_rover(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_rover(Direction::Right)
    }

    /// Step the rover one cell and teleport if it lands on a portal.
    /// Returns false if the step would leave the room.
    pub fn move_rover(&mut self, direction: Direction) -> bool {
        if !self.rover.step(direction) {
            self.stats.moves_rejected += 1;
            debug!("Move {:?} rejected at {:?}", direction, self.rover.position);
            return false;
        }
        self.stats.moves_made += 1;
        self.check_portal();
        true
    }

    /// Pick up the part under the rover. Returns false if there is none.
    pub fn pick_up(&mut self) -> bool {
        let location = Location::from(self.rover.position);
        if !matches!(self.current_room().get(location), Some(Item::Part(_))) {
            return false;
        }
        let Some(Item::Part(kind)) = self.current_room_mut().take(location) else {
            return false;
        };
        self.inventory.add_part(&kind);
        self.stats.parts_collected += 1;
        debug!("Picked up {} at {:?}", kind, location);
        true
    }

    /// Repair the ship component under the rover if it matches the front task
    /// and every supply is in the inventory. Nothing changes otherwise.
    pub fn perform_task(&mut self) -> bool {
        let Some(task) = self.tasks.peek() else {
            return false;
        };
        let location = Location::from(self.rover.position);
        let broken_label = task.broken_label();
        if self.current_room().get(location).map(Item::label) != Some(broken_label.as_str()) {
            return false;
        }

        let ready = task
            .supplies
            .iter()
            .all(|supply| self.inventory.has_at_least(&supply.part, supply.count));
        if !ready {
            debug!("Not enough supplies to fix the {}", task.name);
            return false;
        }

        let Some(task) = self.tasks.dequeue() else {
            return false;
        };
        for supply in &task.supplies {
            self.inventory.remove_part(&supply.part, supply.count);
        }
        self.current_room_mut().set_label(location, &task.name);
        self.stats.tasks_completed += 1;
        info!("Repaired the {} ({} tasks left)", task.name, self.tasks.len());

        if self.is_won() {
            info!("All repairs complete");
        }
        true
    }

    /// Flash the portal that leads back towards home. Returns false when
    /// the rover has not gone through any portal.
    pub fn show_way_back(&mut self) -> bool {
        let Some(top) = self.entered_portals.peek() else {
            return false;
        };
        match self.rooms.get_mut(top.room.0) {
            Some(room) => room.set_label(top.location, PORTAL_FLASHING_LABEL),
            None => false,
        }
    }

    // ---- Portal crossing ----

    /// Teleport the rover if it is standing on a portal
    fn check_portal(&mut self) {
        let location = Location::from(self.rover.position);
        let Some(portal) = self.current_room().portal(location) else {
            return;
        };
        let entered = portal.home;
        let linked = portal.linked();

        self.entered_portals
            .set_label_on_all(&mut self.rooms, PORTAL_LABEL);

        let arrival = match linked {
            Some(target) => target,
            None => match self.open_linked_room(entered) {
                Some(target) => target,
                None => return,
            },
        };

        self.current_room = arrival.room;
        self.rover.position = arrival.location.into();

        if self.entered_portals.peek() == Some(entered) {
            self.entered_portals.pop();
        } else {
            self.entered_portals.push(arrival);
        }
        self.entered_portals
            .set_label_on_all(&mut self.rooms, PORTAL_LABEL);
        self.stats.portal_crossings += 1;

        debug!(
            "Crossed from {:?} {:?} to {:?} {:?} (history depth {})",
            entered.room,
            entered.location,
            arrival.room,
            arrival.location,
            self.entered_portals.len()
        );
    }

    /// Generate a fresh room and link its first open portal with `entered`.
    /// Returns the portal the rover arrives at.
    fn open_linked_room(&mut self, entered: PortalRef) -> Option<PortalRef> {
        let room = self.create_room(false);
        let Some(location) = room.find_open_portal() else {
            warn!(
                "Generated room {:?} has no open portal; crossing from {:?} abandoned",
                room.id, entered.room
            );
            return None;
        };
        let room_id = self.add_room(room);
        let arrival = PortalRef::new(room_id, location);
        if !self.link_portals(entered, arrival) {
            warn!("Failed to link portal {:?} with {:?}", entered, arrival);
        }
        Some(arrival)
    }

    /// Link two unlinked portals to each other. Returns true if both links were set.
    fn link_portals(&mut self, a: PortalRef, b: PortalRef) -> bool {
        let a_open = self.portal_is_open(a);
        let b_open = self.portal_is_open(b);
        if !a_open || !b_open {
            return false;
        }
        let linked_a = self.portal_link(a, b);
        let linked_b = self.portal_link(b, a);
        linked_a && linked_b
    }

    fn portal_is_open(&self, portal: PortalRef) -> bool {
        self.room(portal.room)
            .and_then(|room| room.portal(portal.location))
            .is_some_and(|portal| !portal.is_linked())
    }

    fn portal_link(&mut self, from: PortalRef, to: PortalRef) -> bool {
        self.rooms
            .get_mut(from.room.0)
            .and_then(|room| room.portal_mut(from.location))
            .is_some_and(|portal| portal.link_to(to))
    }

    // ---- Terminal rendering ----

    /// Render the current room as a character grid
    pub fn draw_map(&self) -> String {
        let mut grid = vec![vec!['.'; ROOM_SIZE]; ROOM_SIZE];

        for (location, item) in self.current_room().items() {
            grid[location.row][location.col] = match item {
                Item::Portal(portal) if portal.label == PORTAL_FLASHING_LABEL => '*',
                Item::Portal(_) => 'O',
                Item::ShipComponent(label) if label.ends_with(BROKEN_SUFFIX) => 'X',
                Item::ShipComponent(_) => '#',
                Item::Part(kind) => kind.chars().next().unwrap_or('?'),
            };
        }

        let rover = Location::from(self.rover.position);
        grid[rover.row][rover.col] = '@';

        let mut out = String::new();
        out.push_str(&format!("=== Room {} ===\n", self.current_room.0));
        out.push_str(
            "Legend: @=Rover, O=Portal, *=Way back, X=Broken, #=Repaired, w/r/b/m/c=Parts\n",
        );
        for row in &grid {
            let line: String = row.iter().collect();
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Multi-line summary of the game state
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Lost Rovers Summary ===\n");
        out.push_str(&format!(
            "Room: {} of {} | Rover: ({}, {})\n",
            self.current_room.0,
            self.rooms.len(),
            self.rover.position.x,
            self.rover.position.y
        ));
        out.push_str(&format!("Tasks left: {}\n", self.tasks.len()));
        out.push_str(&format!("{}\n", self.stats.summary()));

        out.push_str("--- Inventory ---\n");
        if self.inventory.is_empty() {
            out.push_str("  (empty)\n");
        } else {
            for line in self.inventory.to_display_string().lines() {
                out.push_str(&format!("  {}\n", line));
            }
        }

        if !self.entered_portals.is_empty() {
            out.push_str("--- Way Back ---\n");
            for portal in self.entered_portals.iter() {
                out.push_str(&format!(
                    "  Room {} at ({}, {})\n",
                    portal.room.0, portal.location.col, portal.location.row
                ));
            }
        }

        out.push_str("--- Current Task ---\n");
        out.push_str(&self.current_task_description());
        out
    }

    /// Print a summary of the game state
    pub fn print_summary(&self) {
        println!("{}", self.summary());
    }
}

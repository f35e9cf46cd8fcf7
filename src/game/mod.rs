//! Standalone game logic
//!
//! Everything needed to play a game of Lost Rovers without a graphical
//! front-end: rooms and portals, the rover, inventory and the repair tasks.

mod inventory;
mod item;
mod portal_stack;
mod queue;
mod room;
mod rover;
mod stats;
mod task;
mod types;
mod world;

pub use inventory::{Inventory, InventoryEntry};
pub use item::{Item, Portal};
pub use portal_stack::PortalStack;
pub use queue::{RingQueue, INITIAL_QUEUE_CAPACITY};
pub use room::Room;
pub use rover::Rover;
pub use stats::GameStats;
pub use task::{generate_task_queue, Supply, Task, TaskQueue};
pub use types::{
    Direction, Location, Point, PortalRef, RoomId, BROKEN_COMPONENTS, BROKEN_SUFFIX, HOME_ROOM,
    MAX_INDEX, MAX_PLACEMENT_ATTEMPTS, PART_COUNT_RANGE, PART_TYPES, PORTAL_COUNT_RANGE,
    PORTAL_FLASHING_LABEL, PORTAL_LABEL, ROOM_SIZE, ROVER_IMAGE, SHIP_LAYOUT, SUPPLIES_PER_TASK,
    SUPPLY_COUNT_RANGE,
};
pub use world::{Game, WIN_MESSAGE};

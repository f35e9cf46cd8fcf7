//! History of entered portals
//!
//! Used to tell "going back" from "going forward" and to point the way home.

use super::room::Room;
use super::types::PortalRef;

/// Last-in-first-out record of portals the rover arrived through
#[derive(Debug, Clone, Default)]
pub struct PortalStack {
    entries: Vec<PortalRef>,
}

impl PortalStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, portal: PortalRef) {
        self.entries.push(portal);
    }

    pub fn pop(&mut self) -> Option<PortalRef> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<PortalRef> {
        self.entries.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Portals from most recent to oldest
    pub fn iter(&self) -> impl Iterator<Item = &PortalRef> {
        self.entries.iter().rev()
    }

    /// Relabel every stacked portal without touching the stack itself
    pub fn set_label_on_all(&self, rooms: &mut [Room], label: &str) {
        for portal in &self.entries {
            if let Some(room) = rooms.get_mut(portal.room.0) {
                room.set_label(portal.location, label);
            }
        }
    }
}

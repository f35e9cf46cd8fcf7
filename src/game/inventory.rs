//! Inventory of collected parts
//!
//! An insertion-ordered list of part names with a count each. Entries whose
//! count drops to zero are removed rather than kept around.

use std::fmt;

/// One line of the inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryEntry {
    pub name: String,
    pub count: u32,
}

/// Parts carried by the rover
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    entries: Vec<InventoryEntry>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    /// How many of a part are held (zero if none)
    pub fn count(&self, name: &str) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map_or(0, |entry| entry.count)
    }

    /// Add one of a part, appending a new entry the first time it is seen
    pub fn add_part(&mut self, name: &str) {
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(InventoryEntry {
                name: name.to_string(),
                count: 1,
            }),
        }
    }

    pub fn has_at_least(&self, name: &str, count: u32) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.name == name && entry.count >= count)
    }

    /// Take `count` of a part out of the inventory.
    /// Returns false and leaves the inventory untouched if fewer are held.
    pub fn remove_part(&mut self, name: &str, count: u32) -> bool {
        let Some(index) = self.entries.iter().position(|entry| entry.name == name) else {
            return false;
        };
        let entry = &mut self.entries[index];
        if entry.count < count {
            return false;
        }
        entry.count -= count;
        if entry.count == 0 {
            self.entries.remove(index);
        }
        true
    }

    /// One "<count> <name>" line per entry
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{} {}", entry.count, entry.name)?;
        }
        Ok(())
    }
}

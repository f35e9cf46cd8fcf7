//! Items that can occupy a room cell

use super::types::{PortalRef, BROKEN_SUFFIX, PORTAL_LABEL};

/// A portal cell, optionally linked to exactly one other portal
#[derive(Debug, Clone, PartialEq)]
pub struct Portal {
    pub label: String,
    /// Where this portal lives
    pub home: PortalRef,
    linked: Option<PortalRef>,
}

impl Portal {
    pub fn new(home: PortalRef) -> Self {
        Self {
            label: PORTAL_LABEL.to_string(),
            home,
            linked: None,
        }
    }

    pub fn linked(&self) -> Option<PortalRef> {
        self.linked
    }

    pub fn is_linked(&self) -> bool {
        self.linked.is_some()
    }

    /// Set the link target. A link is permanent: returns false if one is already set
    pub fn link_to(&mut self, other: PortalRef) -> bool {
        if self.linked.is_some() {
            return false;
        }
        self.linked = Some(other);
        true
    }
}

/// Anything a room cell can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// A collectable part, labelled by its type
    Part(String),
    /// A fixed ship component in the home room
    ShipComponent(String),
    Portal(Portal),
}

impl Item {
    pub fn part(kind: &str) -> Self {
        Item::Part(kind.to_string())
    }

    /// A ship component that still needs repair
    pub fn broken_component(name: &str) -> Self {
        Item::ShipComponent(format!("{}{}", name, BROKEN_SUFFIX))
    }

    /// Display type of the item
    pub fn label(&self) -> &str {
        match self {
            Item::Part(kind) | Item::ShipComponent(kind) => kind.as_str(),
            Item::Portal(portal) => portal.label.as_str(),
        }
    }

    pub fn set_label(&mut self, label: &str) {
        match self {
            Item::Part(kind) | Item::ShipComponent(kind) => *kind = label.to_string(),
            Item::Portal(portal) => portal.label = label.to_string(),
        }
    }

    /// Image file the front-end should draw for this item
    pub fn image_name(&self) -> String {
        format!("{}.ppm", self.label())
    }

    pub fn as_portal(&self) -> Option<&Portal> {
        match self {
            Item::Portal(portal) => Some(portal),
            _ => None,
        }
    }

    pub fn as_portal_mut(&mut self) -> Option<&mut Portal> {
        match self {
            Item::Portal(portal) => Some(portal),
            _ => None,
        }
    }
}

//! Faction identities.
//!
//! Factions are created once when a match is configured and never change.
//! Two factions are the same faction exactly when their ids are equal.

use serde::{Deserialize, Serialize};

/// Stable faction identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactionId(pub u32);

impl FactionId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "faction#{}", self.0)
    }
}

/// A player or owner of control points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faction {
    pub id: FactionId,
    pub name: String,
    /// Display color as 0xRRGGBB.
    pub color: u32,
}

impl Faction {
    pub fn new(id: u32, name: impl Into<String>, color: u32) -> Self {
        Self {
            id: FactionId::new(id),
            name: name.into(),
            color,
        }
    }
}

/// Look up a faction's display color by id.
pub fn color_of(factions: &[Faction], id: FactionId) -> Option<u32> {
    factions.iter().find(|f| f.id == id).map(|f| f.color)
}

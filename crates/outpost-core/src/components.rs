//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::faction::FactionId;
use crate::types::Position;

/// A mobile unit that can contest control points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnitInfo {
    /// Identifier assigned at spawn, increasing in spawn order.
    pub unit_id: u32,
    pub faction: FactionId,
    /// Dead units stay in the world until the cleanup pass but never count
    /// toward capture.
    pub alive: bool,
}

/// A contestable map location.
///
/// The entity's `Position` is set at spawn and no system writes it afterward
/// (control points carry no `Velocity`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlPoint {
    pub point_id: u32,
    /// Current owner, `None` while unowned.
    pub owner: Option<FactionId>,
    /// Capture accumulator. Starts at 0; may overshoot 100 on the tick that
    /// flips ownership.
    pub convert_percent: f64,
    /// Units strictly closer than this contest the point.
    pub capture_radius: f64,
    /// Fog-of-war clearing radius, read by the renderer only.
    pub view_radius: f64,
    /// Whether the selection indicator is visible.
    pub selected: bool,
    /// Result of the most recent evaluation (`false` = contested tick).
    pub last_tick_processed: bool,
}

/// Cosmetic rotation of the point's ring and halo sprites (degrees).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Rotation {
    pub ring_angle: f64,
    pub halo_angle: f64,
}

/// Movement order: the unit halts once it reaches `target`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Destination {
    pub target: Position,
}

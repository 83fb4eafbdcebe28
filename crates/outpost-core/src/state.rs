//! Game state snapshot: the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::enums::GamePhase;
use crate::events::RenderEvent;
use crate::faction::FactionId;
use crate::types::{Position, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub control_points: Vec<ControlPointView>,
    pub units: Vec<UnitView>,
    /// Render notifications produced since the previous snapshot.
    pub render_events: Vec<RenderEvent>,
    /// Requests dispatched since the previous snapshot.
    pub actions: Vec<Action>,
    /// Set when any point changed owner since the previous render pass.
    pub redraw: bool,
}

/// A control point as seen by the renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControlPointView {
    pub point_id: u32,
    pub position: Position,
    pub owner: Option<FactionId>,
    /// Owner's color, or the neutral tint while unowned.
    pub tint: u32,
    pub convert_percent: f64,
    pub capture_radius: f64,
    pub view_radius: f64,
    pub selected: bool,
    /// `false` if the last evaluation hit a contested tick.
    pub last_tick_processed: bool,
    pub ring_angle: f64,
    pub halo_angle: f64,
}

/// A unit as seen by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub unit_id: u32,
    pub faction: FactionId,
    pub position: Position,
    pub alive: bool,
}

//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::faction::FactionId;

/// All possible inbound actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Selection ---
    /// Show the selection indicator of a control point.
    SelectControlPoint { point_id: u32 },
    /// Hide the selection indicator of a control point.
    UnselectControlPoint { point_id: u32 },

    // --- Units ---
    /// Create a unit for a faction. This is how dispatched `create` actions
    /// come back into the simulation.
    SpawnUnit { faction: FactionId, x: f64, y: f64 },
    /// Set a unit's velocity (pixels per second).
    SetUnitVelocity { unit_id: u32, vx: f64, vy: f64 },
    /// Mark a unit as dead.
    KillUnit { unit_id: u32 },

    // --- Simulation control ---
    /// Set time scale (1.0 = normal, 2.0 = double).
    SetTimeScale { scale: f64 },
    /// Lay out the map and start the match.
    StartMatch,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}

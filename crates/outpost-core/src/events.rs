//! Notifications emitted by the simulation for the renderer.
//!
//! These are one-way: the simulation never reads rendering state back.

use serde::{Deserialize, Serialize};

/// Visual updates for control point sprites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderEvent {
    /// Ownership changed; recolor the point. `color` is the neutral tint when
    /// the point is unowned.
    OwnerTint { point_id: u32, color: u32 },
    /// Redraw the capture bar at `percent` (0-100, may overshoot) filled with
    /// the capturing faction's color.
    CaptureBar { point_id: u32, percent: f64, color: u32 },
    /// No opposing capture attempt; hide the bar.
    CaptureBarCleared { point_id: u32 },
    /// Selection indicator visibility toggled.
    SelectionIndicator { point_id: u32, visible: bool },
}

impl RenderEvent {
    pub fn point_id(&self) -> u32 {
        match self {
            RenderEvent::OwnerTint { point_id, .. }
            | RenderEvent::CaptureBar { point_id, .. }
            | RenderEvent::CaptureBarCleared { point_id }
            | RenderEvent::SelectionIndicator { point_id, .. } => *point_id,
        }
    }
}

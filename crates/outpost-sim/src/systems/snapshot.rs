//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use outpost_core::actions::Action;
use outpost_core::components::{ControlPoint, Rotation, UnitInfo};
use outpost_core::enums::GamePhase;
use outpost_core::events::RenderEvent;
use outpost_core::faction::Faction;
use outpost_core::state::*;
use outpost_core::types::{Position, SimTime};

use super::capture::tint_for;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    factions: &[Faction],
    render_events: Vec<RenderEvent>,
    actions: Vec<Action>,
    redraw: bool,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        control_points: build_control_points(world, factions),
        units: build_units(world),
        render_events,
        actions,
        redraw,
    }
}

/// Build ControlPointView list, sorted by point id.
fn build_control_points(world: &World, factions: &[Faction]) -> Vec<ControlPointView> {
    let mut points: Vec<ControlPointView> = world
        .query::<(&ControlPoint, &Position, Option<&Rotation>)>()
        .iter()
        .map(|(_, (point, pos, rotation))| {
            let rotation = rotation.copied().unwrap_or_default();
            ControlPointView {
                point_id: point.point_id,
                position: *pos,
                owner: point.owner,
                tint: tint_for(factions, point.owner),
                convert_percent: point.convert_percent,
                capture_radius: point.capture_radius,
                view_radius: point.view_radius,
                selected: point.selected,
                last_tick_processed: point.last_tick_processed,
                ring_angle: rotation.ring_angle,
                halo_angle: rotation.halo_angle,
            }
        })
        .collect();

    points.sort_by_key(|p| p.point_id);
    points
}

/// Build UnitView list, sorted by unit id.
fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(&UnitInfo, &Position)>()
        .iter()
        .map(|(_, (info, pos))| UnitView {
            unit_id: info.unit_id,
            faction: info.faction,
            position: *pos,
            alive: info.alive,
        })
        .collect();

    units.sort_by_key(|u| u.unit_id);
    units
}

//! Entity spawn factories for setting up the simulation world.
//!
//! Creates control points (and registers their timers) and unit entities
//! with the appropriate component bundles.

use std::time::Duration;

use hecs::{Entity, World};

use outpost_core::components::{ControlPoint, Destination, Rotation, UnitInfo};
use outpost_core::config::{CaptureRules, ControlPointPlacement, MatchConfig};
use outpost_core::constants::ROTATION_INTERVAL_MS;
use outpost_core::faction::FactionId;
use outpost_core::types::{Position, Velocity};

use crate::timers::{ScheduledTask, Scheduler};

/// Set up the initial match world: one control point per configured
/// placement, ids assigned in placement order starting at 0.
pub fn setup_match(world: &mut World, scheduler: &mut Scheduler, config: &MatchConfig) {
    let spawn_period = Duration::from_millis(config.spawn.interval_ms);
    let rotation_period = Duration::from_millis(ROTATION_INTERVAL_MS);

    for (point_id, placement) in (0u32..).zip(&config.control_points) {
        let point = spawn_control_point(world, point_id, placement, &config.capture);

        scheduler.register(spawn_period, ScheduledTask::SpawnUnit { point });
        scheduler.register(rotation_period, ScheduledTask::RotateRing { point });
        scheduler.register(rotation_period, ScheduledTask::RotateHalo { point });
    }
}

/// Spawn a single control point. No timers are registered.
pub fn spawn_control_point(
    world: &mut World,
    point_id: u32,
    placement: &ControlPointPlacement,
    rules: &CaptureRules,
) -> Entity {
    world.spawn((
        placement.position(),
        ControlPoint {
            point_id,
            owner: placement.owner,
            convert_percent: 0.0,
            capture_radius: rules.capture_radius,
            view_radius: rules.view_radius,
            selected: false,
            last_tick_processed: true,
        },
        Rotation::default(),
    ))
}

/// Spawn a live, stationary unit.
pub fn spawn_unit(world: &mut World, unit_id: u32, faction: FactionId, position: Position) -> Entity {
    world.spawn((
        UnitInfo {
            unit_id,
            faction,
            alive: true,
        },
        position,
        Velocity::default(),
    ))
}

/// Spawn a unit moving toward `target` at `speed`; it halts on arrival.
pub fn spawn_unit_moving_to(
    world: &mut World,
    unit_id: u32,
    faction: FactionId,
    position: Position,
    target: Position,
    speed: f64,
) -> Entity {
    let heading = (target.as_dvec2() - position.as_dvec2()).normalize_or_zero() * speed;
    world.spawn((
        UnitInfo {
            unit_id,
            faction,
            alive: true,
        },
        position,
        Velocity::new(heading.x, heading.y),
        Destination { target },
    ))
}

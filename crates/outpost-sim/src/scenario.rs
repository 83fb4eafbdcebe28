//! Seeded skirmish population for headless runs.
//!
//! Each faction gets a squad at its starting point; every unit marches on a
//! randomly chosen control point and halts somewhere inside its capture
//! radius. Same seed = same skirmish.

use std::f64::consts::TAU;

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use outpost_core::config::MatchConfig;
use outpost_core::types::Position;

use crate::world_setup::spawn_unit_moving_to;

/// Spread of a squad around its starting point.
const SQUAD_SCATTER: f64 = 100.0;

/// Unit march speed range (pixels per second).
const MARCH_SPEED_MIN: f64 = 60.0;
const MARCH_SPEED_MAX: f64 = 120.0;

/// Spawn `squad_size` units per faction. Factions are paired with starting
/// points in order; factions without one are skipped.
/// Returns the number of units spawned.
pub fn populate_skirmish(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &MatchConfig,
    next_unit_id: &mut u32,
    squad_size: usize,
) -> usize {
    if config.control_points.is_empty() {
        return 0;
    }

    let mut spawned = 0;
    for (faction, start) in config.factions.iter().zip(&config.starting_points) {
        for _ in 0..squad_size {
            let origin = scatter(rng, *start, SQUAD_SCATTER);

            let objective = &config.control_points[rng.gen_range(0..config.control_points.len())];
            // Halt well inside the radius so arrivals always count.
            let target = scatter(rng, objective.position(), config.capture.capture_radius * 0.5);
            let speed = rng.gen_range(MARCH_SPEED_MIN..MARCH_SPEED_MAX);

            spawn_unit_moving_to(world, *next_unit_id, faction.id, origin, target, speed);
            *next_unit_id += 1;
            spawned += 1;
        }
    }
    spawned
}

/// Uniform-ish point within `radius` of `center`.
fn scatter(rng: &mut ChaCha8Rng, center: Position, radius: f64) -> Position {
    let angle = rng.gen_range(0.0..TAU);
    let distance = rng.gen_range(0.0..radius);
    Position::from(center.as_dvec2() + DVec2::from_angle(angle) * distance)
}

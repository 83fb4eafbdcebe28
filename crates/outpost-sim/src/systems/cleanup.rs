//! Cleanup system: removes dead units.
//!
//! Runs after the capture pass, so a unit killed this tick is already
//! excluded by the scanner before it leaves the world.

use hecs::{Entity, World};

use outpost_core::components::UnitInfo;

/// Despawn every unit whose alive flag is cleared.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, info) in world.query_mut::<&UnitInfo>() {
        if !info.alive {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

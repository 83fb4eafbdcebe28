//! Cosmetic rotation of control point sprites, driven by their timers.

use hecs::{Entity, World};

use outpost_core::components::Rotation;
use outpost_core::constants::{HALO_ROTATION_STEP, RING_ROTATION_STEP};

pub fn rotate_ring(world: &mut World, point: Entity) {
    if let Ok(mut rotation) = world.get::<&mut Rotation>(point) {
        rotation.ring_angle = (rotation.ring_angle + RING_ROTATION_STEP).rem_euclid(360.0);
    }
}

pub fn rotate_halo(world: &mut World, point: Entity) {
    if let Ok(mut rotation) = world.get::<&mut Rotation>(point) {
        rotation.halo_angle = (rotation.halo_angle + HALO_ROTATION_STEP).rem_euclid(360.0);
    }
}

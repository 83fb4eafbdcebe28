//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! Units with a Destination halt on arrival. Control points have no
//! Velocity and are never moved.

use hecs::World;

use outpost_core::components::Destination;
use outpost_core::constants::DT;
use outpost_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel, destination)) in
        world.query_mut::<(&mut Position, &mut Velocity, Option<&Destination>)>()
    {
        if let Some(destination) = destination {
            let step = vel.speed() * DT;
            if step > 0.0 && pos.range_to(&destination.target) <= step {
                *pos = destination.target;
                *vel = Velocity::default();
                continue;
            }
        }

        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
    }
}

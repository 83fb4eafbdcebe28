//! Unit generation, fired by each control point's spawn timer.

use hecs::{Entity, World};
use tracing::debug;

use outpost_core::actions::{Action, CreateUnit};
use outpost_core::components::ControlPoint;
use outpost_core::config::SpawnRules;
use outpost_core::faction::FactionId;
use outpost_core::types::Position;

/// Request a unit beside `point` if the local faction owns it.
pub fn fire(
    world: &World,
    point: Entity,
    local_faction: FactionId,
    rules: &SpawnRules,
    actions: &mut Vec<Action>,
) {
    let Ok(mut query) = world.query_one::<(&ControlPoint, &Position)>(point) else {
        return;
    };
    let Some((control_point, position)) = query.get() else {
        return;
    };

    if control_point.owner != Some(local_faction) {
        return;
    }

    let at = position.offset(rules.offset_x, rules.offset_y);
    debug!(
        point_id = control_point.point_id,
        x = at.x,
        y = at.y,
        "requesting unit"
    );
    actions.push(Action::Create(CreateUnit {
        unit_type: rules.unit_type.clone(),
        x: at.x,
        y: at.y,
    }));
}

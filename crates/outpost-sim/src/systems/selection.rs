//! Selection indicator toggling. Purely visual; capture state is untouched.

use hecs::World;

use outpost_core::components::ControlPoint;
use outpost_core::events::RenderEvent;

/// Show or hide a point's selection indicator.
/// Returns `false` if no control point has `point_id`.
pub fn set_selected(
    world: &mut World,
    point_id: u32,
    selected: bool,
    render_events: &mut Vec<RenderEvent>,
) -> bool {
    for (_entity, point) in world.query_mut::<&mut ControlPoint>() {
        if point.point_id == point_id {
            point.selected = selected;
            render_events.push(RenderEvent::SelectionIndicator {
                point_id,
                visible: selected,
            });
            return true;
        }
    }
    false
}

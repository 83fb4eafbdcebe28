//! Capture system: evaluates every control point against the live units.
//!
//! The unit registry is read once per tick into a flat list ordered by unit
//! id; each point then scans that list, resolves the contest, and applies
//! the tracker update in a single step.

use hecs::World;
use tracing::{debug, info};

use outpost_capture::{evaluate, resolve, scan, CaptureContext, CaptureStep, UnitSample};
use outpost_core::components::{ControlPoint, UnitInfo};
use outpost_core::config::CaptureRules;
use outpost_core::constants::NEUTRAL_TINT;
use outpost_core::events::RenderEvent;
use outpost_core::faction::{color_of, Faction, FactionId};
use outpost_core::types::Position;

use crate::redraw::RedrawFlag;

/// Run one capture pass over all control points, in point id order.
pub fn run(
    world: &mut World,
    rules: &CaptureRules,
    factions: &[Faction],
    unit_buffer: &mut Vec<UnitSample>,
    render_events: &mut Vec<RenderEvent>,
    redraw: &mut RedrawFlag,
) {
    collect_units(world, unit_buffer);

    let mut points: Vec<_> = world
        .query_mut::<(&mut ControlPoint, &Position)>()
        .into_iter()
        .map(|(_entity, item)| item)
        .collect();
    points.sort_by_key(|(point, _)| point.point_id);

    for (point, position) in points {
        evaluate_tick(
            point,
            position,
            unit_buffer.as_slice(),
            rules.capture_rate,
            factions,
            render_events,
            redraw,
        );
    }
}

/// Snapshot the live unit registry, ordered by unit id.
///
/// An empty world yields an empty list, which every point reads as "nobody in
/// range".
pub fn collect_units(world: &World, out: &mut Vec<UnitSample>) {
    let mut rows: Vec<(u32, UnitSample)> = world
        .query::<(&UnitInfo, &Position)>()
        .iter()
        .map(|(_, (info, pos))| {
            (
                info.unit_id,
                UnitSample {
                    position: *pos,
                    alive: info.alive,
                    faction: info.faction,
                },
            )
        })
        .collect();
    rows.sort_by_key(|(id, _)| *id);

    out.clear();
    out.extend(rows.into_iter().map(|(_, sample)| sample));
}

/// Evaluate one control point for this tick.
///
/// Returns `false` when two or more factions were in range: the tick is
/// skipped for this point and nothing about it changes.
pub fn evaluate_tick(
    point: &mut ControlPoint,
    position: &Position,
    units: &[UnitSample],
    capture_rate: f64,
    factions: &[Faction],
    render_events: &mut Vec<RenderEvent>,
    redraw: &mut RedrawFlag,
) -> bool {
    let outcome = resolve(scan(units, *position, point.capture_radius));
    let update = evaluate(&CaptureContext {
        owner: point.owner,
        convert_percent: point.convert_percent,
        outcome,
        capture_rate,
    });

    let point_id = point.point_id;
    point.last_tick_processed = update.step != CaptureStep::Contested;

    match update.step {
        CaptureStep::Contested => {
            debug!(point_id, percent = point.convert_percent, "control point contested");
            return false;
        }
        CaptureStep::Reset => {
            point.convert_percent = 0.0;
            render_events.push(RenderEvent::CaptureBarCleared { point_id });
        }
        CaptureStep::Advanced { attempted } => {
            point.convert_percent = update.convert_percent;
            render_events.push(RenderEvent::CaptureBar {
                point_id,
                percent: point.convert_percent,
                color: faction_color(factions, attempted),
            });
        }
        CaptureStep::Captured {
            attempted,
            previous,
        } => {
            point.convert_percent = update.convert_percent;
            point.owner = update.owner;
            info!(
                point_id,
                new_owner = %attempted,
                previous = ?previous.map(|f| f.get()),
                percent = point.convert_percent,
                "control point captured"
            );
            redraw.mark();
            render_events.push(RenderEvent::OwnerTint {
                point_id,
                color: tint_for(factions, point.owner),
            });
            render_events.push(RenderEvent::CaptureBar {
                point_id,
                percent: point.convert_percent,
                color: faction_color(factions, attempted),
            });
        }
        CaptureStep::Saturated { .. } => {}
    }

    true
}

/// Ownership tint: the owner's color, or neutral while unowned.
pub fn tint_for(factions: &[Faction], owner: Option<FactionId>) -> u32 {
    owner.map_or(NEUTRAL_TINT, |id| faction_color(factions, id))
}

fn faction_color(factions: &[Faction], id: FactionId) -> u32 {
    color_of(factions, id).unwrap_or(NEUTRAL_TINT)
}

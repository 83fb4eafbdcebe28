//! Unit proximity scanner.

use outpost_core::faction::FactionId;
use outpost_core::types::Position;

/// The slice of a unit the capture logic reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitSample {
    pub position: Position,
    pub alive: bool,
    pub faction: FactionId,
}

impl UnitSample {
    pub fn new(faction: FactionId, x: f64, y: f64) -> Self {
        Self {
            position: Position::new(x, y),
            alive: true,
            faction,
        }
    }
}

/// Whether a unit contests a point at `center`. The radius bound is strict.
pub fn in_capture_range(unit: &UnitSample, center: &Position, radius: f64) -> bool {
    unit.alive && unit.position.range_to(center) < radius
}

/// Factions of the units contesting `center`, in unit order.
///
/// Lazy, so a resolver that stops early never looks at the remaining units.
pub fn scan<'a>(
    units: &'a [UnitSample],
    center: Position,
    radius: f64,
) -> impl Iterator<Item = FactionId> + 'a {
    units
        .iter()
        .filter(move |unit| in_capture_range(unit, &center, radius))
        .map(|unit| unit.faction)
}

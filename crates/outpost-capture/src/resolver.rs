//! Contest resolver: reduces the in-range factions to one verdict per tick.

use outpost_core::faction::FactionId;

/// Verdict for one point on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContestOutcome {
    /// Nobody in range.
    Empty,
    /// Every unit in range belongs to `faction`; `magnitude` counts them.
    Single { faction: FactionId, magnitude: u32 },
    /// Two or more factions in range. No determination this tick.
    Contested,
}

impl ContestOutcome {
    /// The faction attempting to hold the point, if any.
    pub fn attempted_owner(&self) -> Option<FactionId> {
        match self {
            ContestOutcome::Single { faction, .. } => Some(*faction),
            ContestOutcome::Empty | ContestOutcome::Contested => None,
        }
    }

    pub fn is_contested(&self) -> bool {
        matches!(self, ContestOutcome::Contested)
    }
}

/// Resolve the in-range factions, in scan order.
///
/// The first faction seen becomes the candidate. The first faction that
/// differs from it ends resolution as `Contested`, regardless of how the
/// remaining units split.
pub fn resolve(factions: impl IntoIterator<Item = FactionId>) -> ContestOutcome {
    let mut candidate: Option<FactionId> = None;
    let mut magnitude = 0u32;

    for faction in factions {
        match candidate {
            None => {
                candidate = Some(faction);
                magnitude = 1;
            }
            Some(current) if current != faction => return ContestOutcome::Contested,
            Some(_) => magnitude += 1,
        }
    }

    match candidate {
        Some(faction) => ContestOutcome::Single { faction, magnitude },
        None => ContestOutcome::Empty,
    }
}

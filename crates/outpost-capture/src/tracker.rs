//! Capture progress tracker.
//!
//! A pure state machine over `(owner, convert_percent)`: given the contest
//! verdict for this tick it resets, advances, or completes a capture. No ECS
//! dependency; operates on plain data.

use outpost_core::constants::CAPTURE_COMPLETE;
use outpost_core::faction::FactionId;

use crate::resolver::ContestOutcome;

/// Input to the tracker for one point on one tick.
#[derive(Debug, Clone, Copy)]
pub struct CaptureContext {
    pub owner: Option<FactionId>,
    pub convert_percent: f64,
    pub outcome: ContestOutcome,
    /// Progress per tick per contesting unit.
    pub capture_rate: f64,
}

/// What happened on this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptureStep {
    /// Multiple factions in range; nothing changed.
    Contested,
    /// Nobody in range, or only the owner. Progress dropped to zero.
    Reset,
    /// An opposing faction gained ground without completing the capture.
    Advanced { attempted: FactionId },
    /// An opposing faction completed the capture.
    Captured {
        attempted: FactionId,
        previous: Option<FactionId>,
    },
    /// An opposing faction is present but progress is already past 100.
    Saturated { attempted: FactionId },
}

/// Output from the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureUpdate {
    pub owner: Option<FactionId>,
    pub convert_percent: f64,
    pub step: CaptureStep,
}

impl CaptureUpdate {
    pub fn owner_changed(&self) -> bool {
        matches!(self.step, CaptureStep::Captured { .. })
    }
}

/// Evaluate the tracker for one point.
pub fn evaluate(ctx: &CaptureContext) -> CaptureUpdate {
    debug_assert!(
        ctx.capture_rate > 0.0,
        "capture rate must be positive, got {}",
        ctx.capture_rate
    );
    let current = sanitize_percent(ctx.convert_percent);

    let unchanged = |step| CaptureUpdate {
        owner: ctx.owner,
        convert_percent: current,
        step,
    };

    match ctx.outcome {
        ContestOutcome::Contested => unchanged(CaptureStep::Contested),
        ContestOutcome::Empty => reset(ctx),
        ContestOutcome::Single { faction, .. } if Some(faction) == ctx.owner => reset(ctx),
        ContestOutcome::Single { faction, magnitude } => {
            debug_assert!(magnitude > 0, "single-faction outcome with no units");
            if current > CAPTURE_COMPLETE {
                return unchanged(CaptureStep::Saturated { attempted: faction });
            }

            let next = current + ctx.capture_rate * f64::from(magnitude);
            if next >= CAPTURE_COMPLETE {
                // Overshoot is stored as-is; only the transition is gated.
                CaptureUpdate {
                    owner: Some(faction),
                    convert_percent: next,
                    step: CaptureStep::Captured {
                        attempted: faction,
                        previous: ctx.owner,
                    },
                }
            } else {
                CaptureUpdate {
                    owner: ctx.owner,
                    convert_percent: next,
                    step: CaptureStep::Advanced { attempted: faction },
                }
            }
        }
    }
}

fn reset(ctx: &CaptureContext) -> CaptureUpdate {
    CaptureUpdate {
        owner: ctx.owner,
        convert_percent: 0.0,
        step: CaptureStep::Reset,
    }
}

/// A negative or NaN accumulator is a logic error upstream. Debug builds
/// stop here; release builds restart the meter from zero.
fn sanitize_percent(percent: f64) -> f64 {
    debug_assert!(
        percent >= 0.0,
        "convert percent out of bounds: {percent}"
    );
    if percent >= 0.0 {
        percent
    } else {
        0.0
    }
}

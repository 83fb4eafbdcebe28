//! Capture logic for OUTPOST control points.
//!
//! Three stages run once per point per tick: the proximity scanner picks the
//! live units inside the capture radius, the contest resolver reduces them to
//! a single attempted owner (or a contested verdict), and the progress
//! tracker advances, resets, or completes the capture. Everything here is
//! pure data in, data out. No ECS dependency.

pub mod resolver;
pub mod scanner;
pub mod tracker;

pub use outpost_core as core;
pub use resolver::{resolve, ContestOutcome};
pub use scanner::{in_capture_range, scan, UnitSample};
pub use tracker::{evaluate, CaptureContext, CaptureStep, CaptureUpdate};

#[cfg(test)]
mod tests;

//! Simulation engine for OUTPOST.
//!
//! Owns the hecs ECS world, runs the capture systems at a fixed tick rate,
//! fires the per-point recurring timers, and produces GameStateSnapshots
//! for the frontend.

pub mod engine;
pub mod redraw;
pub mod scenario;
pub mod systems;
pub mod timers;
pub mod world_setup;

pub use outpost_core as core;
pub use engine::{SimConfig, SimulationEngine};

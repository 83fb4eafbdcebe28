//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod capture;
pub mod cleanup;
pub mod movement;
pub mod rotation;
pub mod selection;
pub mod snapshot;
pub mod unit_generation;

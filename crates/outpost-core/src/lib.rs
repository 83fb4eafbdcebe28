//! Core types and definitions for the OUTPOST control point simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, dispatched actions, render events, configuration,
//! state snapshots, and constants. It has no dependency on any runtime
//! framework.

pub mod actions;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod faction;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;

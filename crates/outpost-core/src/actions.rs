//! Outbound requests to the game's action dispatch transport.

use serde::{Deserialize, Serialize};

/// A request handed to the action dispatcher.
///
/// Serializes as `{"type": "create", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Action {
    Create(CreateUnit),
}

/// Payload of a `create` action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUnit {
    #[serde(rename = "type")]
    pub unit_type: String,
    pub x: f64,
    pub y: f64,
}

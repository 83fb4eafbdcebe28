//! Match configuration.
//!
//! `MatchConfig::default()` is the stock two-player skirmish map. Configs can
//! also be loaded from JSON; missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::faction::{Faction, FactionId};
use crate::types::Position;

/// Tuning for the capture state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureRules {
    /// Progress added per tick per contesting unit.
    pub capture_rate: f64,
    pub capture_radius: f64,
    pub view_radius: f64,
}

impl Default for CaptureRules {
    fn default() -> Self {
        Self {
            capture_rate: DEFAULT_CAPTURE_RATE,
            capture_radius: CAPTURE_RADIUS,
            view_radius: VIEW_RADIUS,
        }
    }
}

/// Unit generation by owned control points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnRules {
    pub interval_ms: u64,
    pub unit_type: String,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for SpawnRules {
    fn default() -> Self {
        Self {
            interval_ms: SPAWN_INTERVAL_MS,
            unit_type: SPAWN_UNIT_TYPE.to_string(),
            offset_x: SPAWN_OFFSET_X,
            offset_y: SPAWN_OFFSET_Y,
        }
    }
}

/// Where a control point sits and who holds it at match start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPointPlacement {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub owner: Option<FactionId>,
}

impl ControlPointPlacement {
    pub fn new(x: f64, y: f64, owner: Option<FactionId>) -> Self {
        Self { x, y, owner }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Everything needed to lay out and run one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub map_width: f64,
    pub map_height: f64,
    pub capture: CaptureRules,
    pub spawn: SpawnRules,
    pub factions: Vec<Faction>,
    /// Faction controlled on this client. Only its points generate units.
    pub local_faction: FactionId,
    pub control_points: Vec<ControlPointPlacement>,
    pub starting_points: Vec<Position>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            map_width: MAP_WIDTH,
            map_height: MAP_HEIGHT,
            capture: CaptureRules::default(),
            spawn: SpawnRules::default(),
            factions: vec![
                Faction::new(1, "Blue", 0x33_66_FF),
                Faction::new(2, "Red", 0xFF_33_33),
            ],
            local_faction: FactionId::new(1),
            control_points: vec![
                ControlPointPlacement::new(500.0, 700.0, Some(FactionId::new(1))),
                ControlPointPlacement::new(3200.0, 3000.0, Some(FactionId::new(2))),
                ControlPointPlacement::new(2800.0, 1000.0, None),
            ],
            starting_points: vec![Position::new(50.0, 50.0), Position::new(3950.0, 3950.0)],
        }
    }
}

impl MatchConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("capture.capture_rate", self.capture.capture_rate)?;
        positive("capture.capture_radius", self.capture.capture_radius)?;
        positive("capture.view_radius", self.capture.view_radius)?;
        positive("spawn.interval_ms", self.spawn.interval_ms as f64)?;

        for (i, faction) in self.factions.iter().enumerate() {
            if self.factions[..i].iter().any(|f| f.id == faction.id) {
                return Err(ConfigError::DuplicateFaction(faction.id));
            }
        }

        if !self.has_faction(self.local_faction) {
            return Err(ConfigError::UnknownLocalFaction(self.local_faction));
        }

        for (index, placement) in self.control_points.iter().enumerate() {
            if let Some(owner) = placement.owner {
                if !self.has_faction(owner) {
                    return Err(ConfigError::UnknownOwner { index, owner });
                }
            }
        }

        Ok(())
    }

    pub fn has_faction(&self, id: FactionId) -> bool {
        self.factions.iter().any(|f| f.id == id)
    }

    pub fn faction_color(&self, id: FactionId) -> Option<u32> {
        crate::faction::color_of(&self.factions, id)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails this check too.
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use crate::actions::{Action, CreateUnit};
    use crate::commands::PlayerCommand;
    use crate::config::{ControlPointPlacement, MatchConfig};
    use crate::constants::*;
    use crate::enums::GamePhase;
    use crate::error::ConfigError;
    use crate::events::RenderEvent;
    use crate::faction::{Faction, FactionId};
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime, Velocity};

    /// The dispatcher expects exactly this shape.
    #[test]
    fn test_create_action_wire_shape() {
        let action = Action::Create(CreateUnit {
            unit_type: "Ship".into(),
            x: 500.0,
            y: 740.0,
        });
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "create",
                "data": { "type": "Ship", "x": 500.0, "y": 740.0 }
            })
        );

        let back: Action = serde_json::from_value(value).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_game_phase_serde() {
        for v in [GamePhase::MainMenu, GamePhase::Active, GamePhase::Paused] {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// PlayerCommand is a tagged union; compare JSON since it has no PartialEq.
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartMatch,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::SetTimeScale { scale: 2.0 },
            PlayerCommand::SelectControlPoint { point_id: 1 },
            PlayerCommand::UnselectControlPoint { point_id: 1 },
            PlayerCommand::SpawnUnit {
                faction: FactionId::new(2),
                x: 10.0,
                y: 20.0,
            },
            PlayerCommand::SetUnitVelocity {
                unit_id: 3,
                vx: 1.0,
                vy: -1.0,
            },
            PlayerCommand::KillUnit { unit_id: 3 },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_faction_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&FactionId::new(7)).unwrap(), "7");
    }

    #[test]
    fn test_render_event_point_id() {
        let events = [
            RenderEvent::OwnerTint {
                point_id: 4,
                color: NEUTRAL_TINT,
            },
            RenderEvent::CaptureBar {
                point_id: 4,
                percent: 12.5,
                color: 0xFF0000,
            },
            RenderEvent::CaptureBarCleared { point_id: 4 },
            RenderEvent::SelectionIndicator {
                point_id: 4,
                visible: true,
            },
        ];
        assert!(events.iter().all(|e| e.point_id() == 4));
    }

    #[test]
    fn test_position_range_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-12);
        assert!((b.range_to(&a) - 5.0).abs() < 1e-12);
        assert_eq!(a.offset(0.0, 40.0), Position::new(0.0, 40.0));
    }

    #[test]
    fn test_velocity_speed() {
        assert!((Velocity::new(3.0, 4.0).speed() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        let config = MatchConfig::default();
        config.validate().unwrap();
        assert_eq!(config.control_points.len(), 3);
        assert_eq!(config.capture.capture_radius, 384.0);
        assert_eq!(config.capture.view_radius, 500.0);
        assert_eq!(config.spawn.interval_ms, 5000);
        assert_eq!(config.spawn.unit_type, "Ship");
        assert_eq!(config.control_points[2].owner, None);
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config = MatchConfig::from_json_str(r#"{ "capture": { "capture_rate": 10.0 } }"#)
            .unwrap();
        assert_eq!(config.capture.capture_rate, 10.0);
        assert_eq!(config.capture.capture_radius, CAPTURE_RADIUS);
        assert_eq!(config.factions.len(), 2);
    }

    #[test]
    fn test_config_round_trip() {
        let config = MatchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(MatchConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_config_rejects_malformed_json() {
        let err = MatchConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_config_rejects_non_positive_rate() {
        let mut config = MatchConfig::default();
        config.capture.capture_rate = 0.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "capture.capture_rate",
                ..
            }
        ));
    }

    #[test]
    fn test_config_rejects_unknown_local_faction() {
        let config = MatchConfig {
            local_faction: FactionId::new(9),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownLocalFaction(FactionId(9)))
        ));
    }

    #[test]
    fn test_config_rejects_duplicate_faction() {
        let mut config = MatchConfig::default();
        config.factions.push(Faction::new(1, "Impostor", 0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateFaction(FactionId(1)))
        ));
    }

    #[test]
    fn test_config_rejects_unknown_owner() {
        let mut config = MatchConfig::default();
        config
            .control_points
            .push(ControlPointPlacement::new(0.0, 0.0, Some(FactionId::new(5))));
        match config.validate() {
            Err(ConfigError::UnknownOwner { index, owner }) => {
                assert_eq!(index, 3);
                assert_eq!(owner, FactionId::new(5));
            }
            other => panic!("expected UnknownOwner, got {other:?}"),
        }
    }

    #[test]
    fn test_faction_color_lookup() {
        let config = MatchConfig::default();
        assert_eq!(config.faction_color(FactionId::new(2)), Some(0xFF_33_33));
        assert_eq!(config.faction_color(FactionId::new(3)), None);
    }

    #[test]
    fn test_empty_snapshot_serializes() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::MainMenu);
        assert!(back.control_points.is_empty());
        assert!(!back.redraw);
    }
}

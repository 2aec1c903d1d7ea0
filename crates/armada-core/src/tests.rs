#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use crate::abilities::*;
    use crate::commands::PlayerCommand;
    use crate::components::{Mobility, Weapons};
    use crate::config::{BattleConfig, ConfigError};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::CombatEvent;
    use crate::state::BattleSnapshot;
    use crate::types::{normalize_angle, shortest_arc, Position};

    // ---- Angles ----

    #[test]
    fn test_normalize_angle_range() {
        for raw in [-10.0, -PI, -0.5, 0.0, 0.5, PI, 10.0, 3.0 * PI] {
            let a = normalize_angle(raw);
            assert!(a > -PI && a <= PI, "normalize({raw}) = {a} out of range");
        }
        // PI stays PI, -PI maps onto PI (the representation is (-PI, PI]).
        assert!((normalize_angle(PI) - PI).abs() < 1e-12);
        assert!((normalize_angle(-PI) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_shortest_arc_is_shortest() {
        // 10 degrees short of a full turn: the short way is -10 degrees.
        let arc = shortest_arc(0.0, 350.0_f64.to_radians());
        assert!((arc + 10.0_f64.to_radians()).abs() < 1e-9);
        // Quarter turn clockwise.
        let arc = shortest_arc(0.0, PI / 2.0);
        assert!((arc - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_heading_to_compass_points() {
        let origin = Position::new(0.0, 0.0);
        // North (+y) is heading 0, East (+x) is +PI/2.
        assert!((origin.heading_to(&Position::new(0.0, 10.0))).abs() < 1e-12);
        let east = origin.heading_to(&Position::new(10.0, 0.0));
        assert!((east - PI / 2.0).abs() < 1e-12);
        let south = origin.heading_to(&Position::new(0.0, -10.0));
        assert!((south.abs() - PI).abs() < 1e-12);
    }

    // ---- Ability ratios ----

    #[test]
    fn test_ability_ratios_at_baseline() {
        // At the baseline score every ratio sits at its lower bound.
        assert_eq!(speed_ratio(ABILITY_BASELINE), SPEED_RATIO_MIN);
        assert_eq!(rotation_ratio(ABILITY_BASELINE), ROTATION_RATIO_MIN);
        assert_eq!(attack_ratio(ABILITY_BASELINE), ATTACK_RATIO_MIN);
        assert_eq!(defense_ratio(ABILITY_BASELINE), DEFENSE_RATIO_MIN);
    }

    #[test]
    fn test_ability_ratios_clamped() {
        // Scores far outside the nominal range are bounded, not rejected.
        assert_eq!(speed_ratio(999), SPEED_RATIO_MAX);
        assert_eq!(speed_ratio(-50), SPEED_RATIO_MIN);
        assert_eq!(rotation_ratio(999), ROTATION_RATIO_MAX);
        assert_eq!(attack_ratio(999), ATTACK_RATIO_MAX);
        assert_eq!(attack_ratio(0), ATTACK_RATIO_MIN);
        assert_eq!(defense_ratio(999), DEFENSE_RATIO_MAX);
    }

    #[test]
    fn test_no_commander_means_base_stats() {
        let ratios = StatRatios::from_scores(None);
        assert_eq!(ratios, StatRatios::NEUTRAL);
    }

    #[test]
    fn test_derive_stats_applies_ratios() {
        let mut mobility = Mobility {
            base_move_speed: 100.0,
            move_speed: 100.0,
            base_rotation_speed: 2.0,
            rotation_speed: 2.0,
        };
        let mut weapons = Weapons {
            base_attack_power: 1000.0,
            attack_power: 1000.0,
            base_defense_power: 100.0,
            defense_power: 100.0,
            range: 150.0,
            cooldown_secs: 1.5,
            last_attack_at: None,
        };
        let scores = AbilityScores {
            mobility: 90,
            attack: 90,
            defense: 90,
        };

        derive_stats(&mut mobility, &mut weapons, Some(&scores));

        // (90-60)/30 + 0.8 = 1.8 speed; (90-60)/40 + 0.7 = 1.45 rotation;
        // (90-60)/30 + 0.7 = 1.7 attack; (90-60)/30 + 0.8 = 1.8 defense.
        assert!((mobility.move_speed - 180.0).abs() < 1e-9);
        assert!((mobility.rotation_speed - 2.9).abs() < 1e-9);
        assert!((weapons.attack_power - 1700.0).abs() < 1e-9);
        assert!((weapons.defense_power - 180.0).abs() < 1e-9);

        // Unbinding the commander restores base stats.
        derive_stats(&mut mobility, &mut weapons, None);
        assert_eq!(mobility.move_speed, 100.0);
        assert_eq!(weapons.attack_power, 1000.0);
    }

    #[test]
    fn test_default_ability_scores() {
        let scores = AbilityScores::default();
        assert_eq!(scores.mobility, DEFAULT_ABILITY);
        assert_eq!(scores.attack, DEFAULT_ABILITY);
        assert_eq!(scores.defense, DEFAULT_ABILITY);
    }

    // ---- Serde round-trips ----

    #[test]
    fn test_faction_serde() {
        for v in [Faction::Alliance, Faction::Empire] {
            let json = serde_json::to_string(&v).unwrap();
            let back: Faction = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
        assert_eq!(Faction::Alliance.opponent(), Faction::Empire);
        assert_eq!(Faction::Empire.opponent(), Faction::Alliance);
    }

    #[test]
    fn test_motion_state_serde() {
        let variants = vec![
            MotionState::Idle,
            MotionState::RotatingToFace { resume_move: true },
            MotionState::RotatingToFace { resume_move: false },
            MotionState::Translating,
            MotionState::TranslatingDirect,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: MotionState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_player_command_serde() {
        let cmd = PlayerCommand::MoveOrder {
            fleet_id: 3,
            x: 120.0,
            y: -40.0,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"MoveOrder\""));
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, PlayerCommand::MoveOrder { fleet_id: 3, .. }));
    }

    #[test]
    fn test_combat_event_serde() {
        let event = CombatEvent::Engagement {
            attacker: 0,
            target: 4,
            damage: 900.0,
            target_hp: 9100.0,
            destroyed: false,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: CombatEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = BattleSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"fleets\":[]"));
    }

    // ---- Battle config ----

    #[test]
    fn test_config_parse_roster() {
        let json = r#"{
            "player_faction": "Alliance",
            "fleets": [
                { "faction": "Alliance", "number": 1, "x": 0.0, "y": -400.0,
                  "commander": "Reyes" },
                { "faction": "Empire", "number": 1, "x": 0.0, "y": 400.0,
                  "heading": 3.14159, "max_hp": 12000.0 }
            ],
            "commanders": [
                { "name": "Reyes", "mobility": 95, "attack": 88, "defense": 72 }
            ]
        }"#;
        let config = BattleConfig::from_json(json).unwrap();
        assert_eq!(config.fleets.len(), 2);
        assert_eq!(config.fleets[1].base_max_hp(), 12000.0);
        assert_eq!(config.fleets[0].base_max_hp(), BASE_MAX_HP);

        let scores = config.commander_scores("Reyes");
        assert_eq!(scores.mobility, 95);
    }

    #[test]
    fn test_config_unknown_commander_falls_back() {
        let json = r#"{ "fleets": [
            { "faction": "Alliance", "number": 1, "x": 0.0, "y": 0.0 }
        ] }"#;
        let config = BattleConfig::from_json(json).unwrap();
        let scores = config.commander_scores("Nobody");
        assert_eq!(scores, AbilityScores::default());
    }

    #[test]
    fn test_config_empty_roster_is_fatal() {
        let result = BattleConfig::from_json(r#"{ "fleets": [] }"#);
        assert!(matches!(result, Err(ConfigError::EmptyRoster)));
    }

    #[test]
    fn test_config_malformed_json_is_fatal() {
        let result = BattleConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}

//! Fleet spawn factories for setting up the battle world.
//!
//! Spawns configured rosters (with commander ability lookup) and generates
//! quick skirmish deployments for tests and the headless runner.

use std::f64::consts::PI;

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use armada_core::abilities::{self, AbilityScores};
use armada_core::components::*;
use armada_core::config::{BattleConfig, FleetSpec};
use armada_core::constants::*;
use armada_core::enums::{Faction, MotionState};
use armada_core::types::{normalize_angle, Position};

/// Spawn the full configured roster into the world.
pub fn setup_battle(world: &mut World, config: &BattleConfig, next_fleet_id: &mut u32) {
    for spec in &config.fleets {
        let scores = spec
            .commander
            .as_deref()
            .map(|name| config.commander_scores(name));
        spawn_fleet(world, next_fleet_id, spec, scores);
    }
    log::info!(
        "battle roster deployed: {} fleets, player commands {:?}",
        config.fleets.len(),
        config.player_faction
    );
}

/// Spawn a single fleet from its spec. Derived stats are computed from the
/// base stats and the optional commander abilities at spawn.
pub fn spawn_fleet(
    world: &mut World,
    next_fleet_id: &mut u32,
    spec: &FleetSpec,
    scores: Option<AbilityScores>,
) -> hecs::Entity {
    let id = *next_fleet_id;
    *next_fleet_id += 1;

    let mut mobility = Mobility {
        base_move_speed: spec.base_move_speed(),
        move_speed: spec.base_move_speed(),
        base_rotation_speed: BASE_ROTATION_SPEED,
        rotation_speed: BASE_ROTATION_SPEED,
    };
    let mut weapons = Weapons {
        base_attack_power: spec.base_attack_power(),
        attack_power: spec.base_attack_power(),
        base_defense_power: spec.base_defense_power(),
        defense_power: spec.base_defense_power(),
        range: spec.base_range(),
        cooldown_secs: ATTACK_COOLDOWN_SECS,
        last_attack_at: None,
    };
    abilities::derive_stats(&mut mobility, &mut weapons, scores.as_ref());

    let position = Position::new(spec.x, spec.y);
    let heading = normalize_angle(spec.heading);

    let entity = world.spawn((
        FleetInfo {
            id,
            faction: spec.faction,
            number: spec.number,
        },
        position,
        Heading { radians: heading },
        Hull {
            max_hp: spec.base_max_hp(),
            hp: spec.base_max_hp(),
        },
        mobility,
        weapons,
        Maneuver {
            state: MotionState::Idle,
            target_position: position,
            target_heading: heading,
            last_cancel_at: None,
        },
        ZoneOfControl {
            radius: ZOC_RADIUS,
            tracked_target: None,
        },
        CombatStatus::default(),
        Selection::default(),
    ));
    if let Some(scores) = scores {
        let _ = world.insert_one(entity, scores);
    }
    entity
}

/// Generate a two-line skirmish: each side deployed in a battle line
/// facing the other across the center of the plane, with seeded jitter so
/// no two deployments are pixel-identical (same seed = same deployment).
pub fn skirmish(world: &mut World, rng: &mut ChaCha8Rng, next_fleet_id: &mut u32, per_side: u32) {
    let spacing = 120.0;
    let offset = (per_side as f64 - 1.0) / 2.0;

    for i in 0..per_side {
        let x = (i as f64 - offset) * spacing;
        spawn_line_fleet(world, rng, next_fleet_id, Faction::Alliance, i + 1, x, -400.0, 0.0);
        spawn_line_fleet(world, rng, next_fleet_id, Faction::Empire, i + 1, x, 400.0, PI);
    }
}

fn spawn_line_fleet(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_fleet_id: &mut u32,
    faction: Faction,
    number: u32,
    x: f64,
    y: f64,
    heading: f64,
) -> hecs::Entity {
    let spec = FleetSpec {
        faction,
        number,
        x: x + rng.gen_range(-20.0..20.0),
        y: y + rng.gen_range(-30.0..30.0),
        heading,
        commander: None,
        max_hp: None,
        attack_power: None,
        defense_power: None,
        range: None,
        move_speed: None,
    };
    spawn_fleet(world, next_fleet_id, &spec, None)
}

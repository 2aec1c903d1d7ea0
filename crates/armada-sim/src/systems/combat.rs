//! Combat resolution system — targeting, damage, destruction.
//!
//! Runs after all motion updates. Fleets attack in ascending fleet-id
//! order; each attacker re-queries the live world before use, so a target
//! destroyed by an earlier attacker in the same pass is never dereferenced
//! stale. Destroyed fleets are marked `Derelict` and despawned by the
//! cleanup system at the end of the tick, never mid-pass.

use glam::DVec2;
use hecs::{Entity, World};

use armada_core::components::{CombatStatus, Derelict, FleetInfo, Heading, Hull, Maneuver, Weapons};
use armada_core::constants::*;
use armada_core::enums::MotionState;
use armada_core::events::CombatEvent;
use armada_core::types::Position;

/// Run one combat-resolution pass over all live fleets.
pub fn run(world: &mut World, now: f64, events: &mut Vec<CombatEvent>) {
    // Stable resolution order: ascending fleet id.
    let mut attackers: Vec<(u32, Entity)> = {
        let mut query = world.query::<(&FleetInfo, &Hull)>();
        query
            .iter()
            .filter(|(_, (_, hull))| hull.hp > 0.0)
            .map(|(entity, (info, _))| (info.id, entity))
            .collect()
    };
    attackers.sort_by_key(|(id, _)| *id);

    for (attacker_id, attacker) in attackers {
        resolve_fleet(world, attacker_id, attacker, now, events);
    }
}

/// Let one fleet pick and engage a target, if it has one.
fn resolve_fleet(
    world: &mut World,
    attacker_id: u32,
    attacker: Entity,
    now: f64,
    events: &mut Vec<CombatEvent>,
) {
    // The attacker may itself have been destroyed earlier in this pass.
    let alive = world.get::<&Hull>(attacker).map(|h| h.hp > 0.0);
    if !matches!(alive, Ok(true)) {
        return;
    }
    let Ok(info) = world.get::<&FleetInfo>(attacker).map(|i| *i) else {
        return;
    };
    let Ok(position) = world.get::<&Position>(attacker).map(|p| *p) else {
        return;
    };
    let Ok(heading) = world.get::<&Heading>(attacker).map(|h| h.radians) else {
        return;
    };
    let Ok(weapons) = world.get::<&Weapons>(attacker).map(|w| *w) else {
        return;
    };

    // Re-engage delay.
    if let Some(last) = weapons.last_attack_at {
        if now - last < weapons.cooldown_secs {
            return;
        }
    }

    let Some((target_id, target)) = find_attack_target(world, &info, &position, heading, &weapons)
    else {
        return;
    };

    // Engagement forces both parties to stop (rate-limited per fleet).
    cancel_move(world, attacker, now);
    cancel_move(world, target, now);

    let target_defense = world
        .get::<&Weapons>(target)
        .map(|w| w.defense_power)
        .unwrap_or(0.0);
    let damage = compute_damage(weapons.attack_power, target_defense);

    let Some((target_hp, destroyed)) = apply_damage(world, target, damage) else {
        return;
    };

    mark_in_combat(world, attacker, now);
    mark_in_combat(world, target, now);
    if let Ok(mut w) = world.get::<&mut Weapons>(attacker) {
        w.last_attack_at = Some(now);
    }

    events.push(CombatEvent::Engagement {
        attacker: attacker_id,
        target: target_id,
        damage,
        target_hp,
        destroyed,
    });
    if destroyed {
        let _ = world.insert_one(target, Derelict);
        events.push(CombatEvent::Destruction {
            fleet: target_id,
            faction: info.faction.opponent(),
            destroyed_by: attacker_id,
        });
    }
}

/// Pick the attacker's target: opposing faction, alive, inside the firing
/// arc; nearest by distance, lowest fleet id on ties.
fn find_attack_target(
    world: &World,
    info: &FleetInfo,
    position: &Position,
    heading: f64,
    weapons: &Weapons,
) -> Option<(u32, Entity)> {
    let hostile = info.faction.opponent();
    let mut best: Option<(f64, u32, Entity)> = None;

    let mut query = world.query::<(&FleetInfo, &Position, &Hull)>();
    for (entity, (candidate, candidate_pos, candidate_hull)) in query.iter() {
        if candidate.faction != hostile || candidate_hull.hp <= 0.0 {
            continue;
        }
        if !in_firing_arc(position, heading, weapons.range, candidate_pos) {
            continue;
        }
        let dist = position.range_to(candidate_pos);
        let closer = match &best {
            None => true,
            Some((best_dist, best_id, _)) => {
                dist < *best_dist || (dist == *best_dist && candidate.id < *best_id)
            }
        };
        if closer {
            best = Some((dist, candidate.id, entity));
        }
    }

    best.map(|(_, id, entity)| (id, entity))
}

/// Forward firing arc test: the candidate's offset is transformed into the
/// attacker's heading frame and checked against an ellipse pushed forward
/// of the fleet's center. A fleet can shoot what its bow points at; it is
/// blind astern.
pub fn in_firing_arc(attacker: &Position, heading: f64, range: f64, candidate: &Position) -> bool {
    let rel = DVec2::new(candidate.x - attacker.x, candidate.y - attacker.y);
    let forward = DVec2::new(heading.sin(), heading.cos());
    let lateral = DVec2::new(heading.cos(), -heading.sin());

    let along = rel.dot(forward) - FIRING_ARC_OFFSET_FACTOR * range;
    let across = rel.dot(lateral);
    let semi_width = FIRING_ARC_WIDTH_FACTOR * range / 2.0;
    let semi_length = FIRING_ARC_LENGTH_FACTOR * range / 2.0;

    (across / semi_width).powi(2) + (along / semi_length).powi(2) <= 1.0
}

/// Damage formula. The chip-damage floor guarantees a fifth of attack
/// power gets through even against over-armored targets.
pub fn compute_damage(attack_power: f64, defense_power: f64) -> f64 {
    let chip = (attack_power * CHIP_DAMAGE_FACTOR).round();
    chip.max(attack_power - defense_power)
}

/// Apply damage to a fleet's hull, flooring at zero. Returns the remaining
/// hull and whether this call destroyed the fleet. A fleet already at zero
/// is never "destroyed again" — destruction is exactly-once.
pub fn apply_damage(world: &mut World, target: Entity, damage: f64) -> Option<(f64, bool)> {
    let mut hull = world.get::<&mut Hull>(target).ok()?;
    let was_alive = hull.hp > 0.0;
    hull.hp = (hull.hp - damage).max(0.0);
    Some((hull.hp, was_alive && hull.hp <= 0.0))
}

/// Cancel a fleet's in-flight move order, rate-limited: a fleet whose move
/// was just cancelled cannot have a move cancelled again until the
/// cooldown elapses, so combat cannot interrupt its orders every tick.
pub fn cancel_move(world: &mut World, entity: Entity, now: f64) {
    let Ok(position) = world.get::<&Position>(entity).map(|p| *p) else {
        return;
    };
    let Ok(mut maneuver) = world.get::<&mut Maneuver>(entity) else {
        return;
    };

    let moving = matches!(
        maneuver.state,
        MotionState::Translating
            | MotionState::TranslatingDirect
            | MotionState::RotatingToFace { resume_move: true }
    );
    if !moving {
        return;
    }
    if let Some(last) = maneuver.last_cancel_at {
        if now - last <= MOVE_CANCEL_COOLDOWN_SECS {
            return;
        }
    }

    maneuver.target_position = position;
    maneuver.state = MotionState::Idle;
    maneuver.last_cancel_at = Some(now);
}

fn mark_in_combat(world: &mut World, entity: Entity, now: f64) {
    if let Ok(mut status) = world.get::<&mut CombatStatus>(entity) {
        status.in_combat = true;
        status.last_combat_at = Some(now);
    }
}

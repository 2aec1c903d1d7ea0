//! Snapshot system: queries the ECS world and builds a complete
//! `BattleSnapshot` for the renderer and UI panels.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use armada_core::components::*;
use armada_core::enums::{BattlePhase, Faction, MotionState};
use armada_core::events::CombatEvent;
use armada_core::state::{BattleSnapshot, FleetView};
use armada_core::types::{Position, SimTime};

/// Build a complete snapshot from the current world state, consuming this
/// tick's combat events.
pub fn build(
    world: &World,
    time: &SimTime,
    phase: BattlePhase,
    player_faction: Faction,
    events: Vec<CombatEvent>,
    victor: Option<Faction>,
) -> BattleSnapshot {
    BattleSnapshot {
        time: *time,
        phase,
        player_faction,
        fleets: build_fleets(world),
        events,
        victor,
    }
}

/// Build FleetView list from all fleet entities, sorted by id.
fn build_fleets(world: &World) -> Vec<FleetView> {
    let mut fleets: Vec<FleetView> = world
        .query::<(
            &FleetInfo,
            &Position,
            &Heading,
            &Hull,
            &Maneuver,
            &Mobility,
            &Weapons,
            &CombatStatus,
            &Selection,
        )>()
        .iter()
        .map(
            |(_, (info, pos, heading, hull, maneuver, mobility, weapons, status, selection))| {
                let (is_moving, is_rotating, is_waiting_to_rotate, is_direct_moving) =
                    motion_flags(maneuver.state);
                FleetView {
                    id: info.id,
                    faction: info.faction,
                    number: info.number,
                    position: *pos,
                    heading: heading.radians,
                    target_position: maneuver.target_position,
                    hp: hull.hp,
                    max_hp: hull.max_hp,
                    mode: selection.mode,
                    selected: selection.selected,
                    is_moving,
                    is_rotating,
                    is_waiting_to_rotate,
                    is_direct_moving,
                    in_combat: status.in_combat,
                    move_speed: mobility.move_speed,
                    rotation_speed: mobility.rotation_speed,
                    attack_power: weapons.attack_power,
                    defense_power: weapons.defense_power,
                    range: weapons.range,
                }
            },
        )
        .collect();

    fleets.sort_by_key(|f| f.id);
    fleets
}

/// Derive the renderer-facing motion flags from the motion state.
fn motion_flags(state: MotionState) -> (bool, bool, bool, bool) {
    match state {
        MotionState::Idle => (false, false, false, false),
        MotionState::RotatingToFace { resume_move } => (resume_move, true, resume_move, false),
        MotionState::Translating => (true, false, false, false),
        MotionState::TranslatingDirect => (true, false, false, true),
    }
}

//! Zone-of-control system.
//!
//! Each live fleet re-resolves its tracked target — the nearest opposing
//! live fleet inside its zone-of-control radius — against the world every
//! tick. The tracked target is a fleet id, never a cached entity
//! reference: the target may have been destroyed by another fleet earlier
//! in the tick and simply resolves to nothing.
//!
//! Idle fleets auto-orient toward their tracked target at a reduced
//! rotation rate. Manual rotation control suspends the zone of control
//! entirely, and any active maneuver's facing takes precedence.

use hecs::World;

use armada_core::components::{FleetInfo, Heading, Hull, Maneuver, Mobility, Selection, ZoneOfControl};
use armada_core::constants::ZOC_ROTATION_FACTOR;
use armada_core::enums::{Faction, InteractionMode, MotionState};
use armada_core::types::Position;
use armada_maneuver::fsm;

/// Run zone-of-control tracking and auto-orientation for all fleets.
pub fn run(world: &mut World, dt: f64) {
    // Immutable pass: positions of every live fleet.
    let live: Vec<(u32, Faction, Position)> = {
        let mut query = world.query::<(&FleetInfo, &Position, &Hull)>();
        query
            .iter()
            .filter(|(_, (_, _, hull))| hull.hp > 0.0)
            .map(|(_, (info, pos, _))| (info.id, info.faction, *pos))
            .collect()
    };

    for (_entity, (info, hull, position, heading, maneuver, mobility, selection, zoc)) in world
        .query_mut::<(
            &FleetInfo,
            &Hull,
            &Position,
            &mut Heading,
            &Maneuver,
            &Mobility,
            &Selection,
            &mut ZoneOfControl,
        )>()
    {
        if hull.hp <= 0.0 {
            continue;
        }
        // Manual rotation control: no tracking, no auto-orientation.
        if selection.mode == InteractionMode::Rotate
            || matches!(
                maneuver.state,
                MotionState::RotatingToFace { resume_move: false }
            )
        {
            continue;
        }

        let hostile = info.faction.opponent();
        let mut best: Option<(f64, u32, Position)> = None;
        for (id, faction, pos) in &live {
            if *faction != hostile {
                continue;
            }
            let dist = position.range_to(pos);
            if dist > zoc.radius {
                continue;
            }
            let closer = match &best {
                None => true,
                Some((best_dist, best_id, _)) => {
                    dist < *best_dist || (dist == *best_dist && *id < *best_id)
                }
            };
            if closer {
                best = Some((dist, *id, *pos));
            }
        }
        zoc.tracked_target = best.as_ref().map(|(_, id, _)| *id);

        // Auto-orientation only steers otherwise-idle fleets; movement
        // facing always wins.
        if maneuver.state != MotionState::Idle {
            continue;
        }
        if let Some((_, _, target_pos)) = best {
            let aim = position.heading_to(&target_pos);
            let rate = mobility.rotation_speed * ZOC_ROTATION_FACTOR;
            let (new_heading, _) = fsm::step_heading(heading.radians, aim, rate, dt);
            heading.radians = new_heading;
        }
    }
}

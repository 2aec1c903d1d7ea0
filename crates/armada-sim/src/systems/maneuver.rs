//! Motion integration system.
//!
//! Drives the pure motion FSM for every live fleet: rotation stepping,
//! translation along the target vector, and facing-while-moving. Dead
//! fleets are frozen in place until cleanup removes them.

use hecs::World;

use armada_core::components::{Heading, Hull, Maneuver, Mobility, Selection};
use armada_core::constants::DIRECT_MOVE_SPEED_FACTOR;
use armada_core::enums::InteractionMode;
use armada_core::types::Position;
use armada_maneuver::fsm::{self, ManeuverContext};

/// Run motion integration for all fleets.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (hull, position, heading, maneuver, mobility, selection)) in world.query_mut::<(
        &Hull,
        &mut Position,
        &mut Heading,
        &mut Maneuver,
        &Mobility,
        &Selection,
    )>() {
        if hull.hp <= 0.0 {
            continue;
        }

        let update = fsm::evaluate(&ManeuverContext {
            state: maneuver.state,
            position: *position,
            heading: heading.radians,
            target_position: maneuver.target_position,
            target_heading: maneuver.target_heading,
            move_speed: mobility.move_speed,
            rotation_speed: mobility.rotation_speed,
            direct_speed_factor: DIRECT_MOVE_SPEED_FACTOR,
            hold_heading: selection.mode == InteractionMode::Rotate,
            dt,
        });

        maneuver.state = update.state;
        maneuver.target_heading = update.target_heading;
        *position = update.position;
        heading.radians = update.heading;
    }
}

//! Cleanup system: removes destroyed fleets from the world.
//!
//! Only this system despawns entities, and it runs after combat has
//! resolved, so no other system ever iterates over a half-removed fleet.
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use armada_core::components::Derelict;

/// Despawn every fleet marked `Derelict` this tick.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, _derelict) in world.query_mut::<&Derelict>() {
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

//! Combat status decay system.
//!
//! Clears the in-combat flag once a fleet has gone long enough without an
//! engagement. Renderers read the flag (and `last_combat_at`) for the
//! post-combat visibility grace period.

use hecs::World;

use armada_core::components::CombatStatus;
use armada_core::constants::COMBAT_LINGER_SECS;

/// Decay the in-combat flag for all fleets.
pub fn run(world: &mut World, now: f64) {
    for (_entity, status) in world.query_mut::<&mut CombatStatus>() {
        if !status.in_combat {
            continue;
        }
        if let Some(last) = status.last_combat_at {
            if now - last > COMBAT_LINGER_SECS {
                status.in_combat = false;
            }
        }
    }
}

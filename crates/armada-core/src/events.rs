//! Events emitted by the combat resolver for effects, audio, and stats.
//!
//! Events are ephemeral: each tick's batch is handed to the snapshot and
//! then discarded. The core retains no combat history.

use serde::{Deserialize, Serialize};

use crate::enums::Faction;

/// One tick's combat outcomes, in resolution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// A successful attack.
    Engagement {
        attacker: u32,
        target: u32,
        damage: f64,
        /// Target hull after the damage was applied.
        target_hp: f64,
        destroyed: bool,
    },
    /// A fleet's hull reached zero. Emitted exactly once per fleet.
    Destruction {
        fleet: u32,
        faction: Faction,
        destroyed_by: u32,
    },
    /// One faction's live-fleet count reached zero. Terminal; emitted once.
    Victory { winner: Faction },
}

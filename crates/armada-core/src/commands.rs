//! Player commands sent from the input layer to the simulation.
//!
//! Commands are validated and queued for processing at the next tick
//! boundary. Orders against destroyed or enemy-owned fleets are silently
//! ignored (logged at debug level only).

use serde::{Deserialize, Serialize};

use crate::abilities::AbilityScores;
use crate::enums::InteractionMode;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Selection ---
    /// Select a fleet. Deselects all other same-faction fleets first.
    /// Re-selecting the already-selected fleet switches it to rotate mode.
    SelectFleet { fleet_id: u32 },
    /// Clear the current selection.
    Deselect,
    /// Force a specific interaction mode on a fleet.
    SetInteractionMode { fleet_id: u32, mode: InteractionMode },

    // --- Movement orders ---
    /// Move to a point, rotating to face it first when far enough away.
    MoveOrder { fleet_id: u32, x: f64, y: f64 },
    /// Drag-drop move: no rotation gating, heading frozen during travel.
    DirectMoveOrder { fleet_id: u32, x: f64, y: f64 },
    /// Rotate in place to face a point.
    RotateOrder { fleet_id: u32, x: f64, y: f64 },
    /// Zero out the move target — hold position.
    StopFleet { fleet_id: u32 },

    // --- Commander assignment ---
    /// Bind (or with `None`, unbind) a commander's ability scores and
    /// recompute the fleet's derived stats.
    AssignCommander {
        fleet_id: u32,
        abilities: Option<AbilityScores>,
    },

    // --- Battle control ---
    /// Spawn the loaded roster and begin the battle.
    StartBattle,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Set time scale (1.0 = normal, 2.0 = double).
    SetTimeScale { scale: f64 },
}

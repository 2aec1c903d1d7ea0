//! Battle state snapshot — the complete visible state sent to the
//! renderer and UI panels each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{BattlePhase, Faction, InteractionMode};
use crate::events::CombatEvent;
use crate::types::{Position, SimTime};

/// Complete battle state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub time: SimTime,
    pub phase: BattlePhase,
    /// The faction the local player commands.
    pub player_faction: Faction,
    pub fleets: Vec<FleetView>,
    /// This tick's combat events, in resolution order.
    pub events: Vec<CombatEvent>,
    /// Set once the battle is complete.
    pub victor: Option<Faction>,
}

/// One fleet as seen on the tactical display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FleetView {
    pub id: u32,
    pub faction: Faction,
    pub number: u32,
    pub position: Position,
    /// Facing in radians (0 = North, clockwise).
    pub heading: f64,
    /// Destination of the current move order (ghost preview).
    pub target_position: Position,
    pub hp: f64,
    pub max_hp: f64,
    pub mode: InteractionMode,
    pub selected: bool,
    pub is_moving: bool,
    pub is_rotating: bool,
    /// Rotating to face a destination before translating toward it.
    pub is_waiting_to_rotate: bool,
    pub is_direct_moving: bool,
    pub in_combat: bool,
    // Derived stats for UI summary panels.
    pub move_speed: f64,
    pub rotation_speed: f64,
    pub attack_power: f64,
    pub defense_power: f64,
    pub range: f64,
}

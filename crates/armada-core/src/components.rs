//! ECS components for hecs fleet entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{Faction, InteractionMode, MotionState};
use crate::types::Position;

/// Fleet identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FleetInfo {
    /// Unique fleet id, stable for the lifetime of the battle.
    pub id: u32,
    pub faction: Faction,
    /// Display ordinal within the faction ("3rd Fleet").
    pub number: u32,
}

/// Hull integrity. 0 <= hp <= max_hp; hp reaching 0 is destruction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hull {
    pub max_hp: f64,
    pub hp: f64,
}

/// Movement performance. Derived values are base x commander ratio and
/// are recomputed whenever the bound commander changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mobility {
    /// Base translation speed (units/s).
    pub base_move_speed: f64,
    /// Derived translation speed (units/s).
    pub move_speed: f64,
    /// Base rotation speed (rad/s).
    pub base_rotation_speed: f64,
    /// Derived rotation speed (rad/s).
    pub rotation_speed: f64,
}

/// Weapon and armor stats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapons {
    pub base_attack_power: f64,
    /// Derived attack power (base x commander ratio).
    pub attack_power: f64,
    pub base_defense_power: f64,
    /// Derived defense power.
    pub defense_power: f64,
    /// Weapon range (units); also scales the firing arc ellipse.
    pub range: f64,
    /// Minimum delay between this fleet's attacks (seconds).
    pub cooldown_secs: f64,
    /// Simulation time of the last resolved attack, if any.
    pub last_attack_at: Option<f64>,
}

/// Current facing in radians, 0 = North, clockwise, normalized to (-PI, PI].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Heading {
    pub radians: f64,
}

/// Motion order state for one fleet.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Maneuver {
    pub state: MotionState,
    /// Destination of the current (or last) move order. Renderers draw the
    /// ghost preview from this.
    pub target_position: Position,
    /// Heading the fleet is turning toward.
    pub target_heading: f64,
    /// Simulation time of the last combat-forced move cancellation.
    pub last_cancel_at: Option<f64>,
}

/// Zone-of-control state. The tracked target is a fleet id re-resolved
/// against the live world every tick, never a cached entity reference:
/// the tracked fleet may be destroyed by another actor at any time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZoneOfControl {
    /// Auto-orientation radius (units).
    pub radius: f64,
    /// Fleet id of the nearest enemy inside the radius, if any.
    pub tracked_target: Option<u32>,
}

/// Engagement status flags read by the renderer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CombatStatus {
    pub in_combat: bool,
    /// Simulation time of the last engagement this fleet took part in.
    /// Drives the post-combat visibility grace period.
    pub last_combat_at: Option<f64>,
}

/// Player selection state. Only fleets of the commanding faction are ever
/// selected; a single fleet is selected at a time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Selection {
    pub selected: bool,
    pub mode: InteractionMode,
}

/// Marks a fleet whose hull reached zero this tick. Inserted exactly once
/// at destruction; the cleanup system despawns marked fleets at the end of
/// the tick, so no system ever iterates over a half-removed entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Derelict;

//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// One of the two opposing sides in a tactical battle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    #[default]
    Alliance,
    Empire,
}

impl Faction {
    /// The opposing faction.
    pub fn opponent(self) -> Faction {
        match self {
            Faction::Alliance => Faction::Empire,
            Faction::Empire => Faction::Alliance,
        }
    }
}

/// Player-facing control state for a selected fleet. Governs which order
/// type a subsequent pointer command issues. Set only by command input,
/// never by combat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    /// No overlay active.
    #[default]
    None,
    /// Next pointer command issues a move order.
    Move,
    /// Next pointer command issues a rotate order.
    Rotate,
}

/// Motion sub-machine for one fleet. Tagged variants make the illegal
/// combinations (e.g. rotating while direct-moving) unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum MotionState {
    /// Holding position.
    #[default]
    Idle,
    /// Turning toward a target heading. With `resume_move` the fleet is
    /// waiting to rotate before it begins translating; without, this is a
    /// plain rotate order.
    RotatingToFace { resume_move: bool },
    /// Moving toward the target position, continuously re-aiming the bow
    /// at it (curved approach).
    Translating,
    /// Drag-drop move: heading frozen, reduced speed, no rotation gating.
    TranslatingDirect,
}

/// Battle lifecycle phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    /// Roster loaded, waiting for the start command.
    #[default]
    Setup,
    Active,
    Paused,
    /// One faction has been wiped out; the victor is recorded.
    Complete,
}

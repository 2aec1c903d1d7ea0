//! Simulation constants and tuning parameters.
//!
//! All motion magnitudes are per-second rates; systems scale them by the
//! tick's delta time, so simulation behavior is independent of the driver's
//! frame rate.

/// Nominal tick rate the driver targets (Hz). The engine itself accepts
/// whatever delta the driver measured.
pub const TICK_RATE: u32 = 60;

/// Upper clamp on a single tick's delta time (seconds). A stalled driver
/// resumes without fleets teleporting across the plane.
pub const MAX_FRAME_DT: f64 = 0.25;

// --- Fleet motion ---

/// Base translation speed (units/s).
pub const BASE_MOVE_SPEED: f64 = 90.0;

/// Speed multiplier applied to direct (drag-drop) moves.
pub const DIRECT_MOVE_SPEED_FACTOR: f64 = 0.8;

/// Base rotation speed (rad/s).
pub const BASE_ROTATION_SPEED: f64 = 1.8;

/// Angular tolerance below which a rotation snaps to its target (rad).
pub const ROTATION_EPSILON: f64 = 0.01;

/// Move orders shorter than this skip the rotate-before-move phase (units).
pub const MOVE_ORDER_MIN_DISTANCE: f64 = 10.0;

// --- Combat stats ---

/// Base hull points.
pub const BASE_MAX_HP: f64 = 10_000.0;

/// Base attack power.
pub const BASE_ATTACK_POWER: f64 = 1_000.0;

/// Base defense power.
pub const BASE_DEFENSE_POWER: f64 = 100.0;

/// Base weapon range (units).
pub const BASE_WEAPON_RANGE: f64 = 150.0;

/// Minimum delay between two attacks by the same fleet (seconds).
pub const ATTACK_COOLDOWN_SECS: f64 = 1.5;

/// A fleet whose move order was cancelled by combat cannot have a move
/// cancelled again for this long (seconds). Prevents engagement thrash
/// against a fleet that keeps re-issuing orders.
pub const MOVE_CANCEL_COOLDOWN_SECS: f64 = 6.0;

/// Fraction of attack power always dealt, regardless of target defense.
pub const CHIP_DAMAGE_FACTOR: f64 = 0.2;

/// How long the in-combat flag lingers after the last engagement (seconds).
pub const COMBAT_LINGER_SECS: f64 = 2.0;

// --- Firing arc ---
// The arc is an ellipse in the attacker's heading frame, pushed forward of
// the fleet's center: facing discipline is rewarded, flanked fleets are
// blind astern.

/// Full lateral axis of the firing ellipse, as a fraction of weapon range.
pub const FIRING_ARC_WIDTH_FACTOR: f64 = 0.6;

/// Full longitudinal axis of the firing ellipse, as a fraction of range.
pub const FIRING_ARC_LENGTH_FACTOR: f64 = 1.2;

/// Forward offset of the ellipse center, as a fraction of range.
pub const FIRING_ARC_OFFSET_FACTOR: f64 = 0.2;

// --- Zone of control ---

/// Radius within which a fleet auto-orients toward the nearest enemy
/// without necessarily attacking (units).
pub const ZOC_RADIUS: f64 = 220.0;

/// Rotation speed multiplier for zone-of-control auto-orientation.
pub const ZOC_ROTATION_FACTOR: f64 = 0.8;

// --- Commander abilities ---

/// Ability score at which every ratio sits at its lower bound.
pub const ABILITY_BASELINE: i32 = 60;

/// Neutral ability score substituted when a commander lookup fails.
pub const DEFAULT_ABILITY: i32 = 75;

/// Clamp bounds for the mobility-derived speed ratio.
pub const SPEED_RATIO_MIN: f64 = 0.8;
pub const SPEED_RATIO_MAX: f64 = 2.0;

/// Clamp bounds for the mobility-derived rotation ratio.
pub const ROTATION_RATIO_MIN: f64 = 0.7;
pub const ROTATION_RATIO_MAX: f64 = 1.8;

/// Clamp bounds for the attack ratio.
pub const ATTACK_RATIO_MIN: f64 = 0.7;
pub const ATTACK_RATIO_MAX: f64 = 1.8;

/// Clamp bounds for the defense ratio.
pub const DEFENSE_RATIO_MIN: f64 = 0.8;
pub const DEFENSE_RATIO_MAX: f64 = 2.0;

//! Commander ability modifiers.
//!
//! Pure functions mapping a commander's raw ability scores to the
//! multiplicative performance ratios applied to a fleet's base stats.
//! Deterministic, no side effects. Scores outside the nominal 60-120
//! range are not rejected; the clamps bound the effect.

use serde::{Deserialize, Serialize};

use crate::components::{Mobility, Weapons};
use crate::constants::*;

/// A commander's raw ability scores. Attached to a fleet entity as a
/// component when a commander is assigned; absence means base stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    pub mobility: i32,
    pub attack: i32,
    pub defense: i32,
}

impl Default for AbilityScores {
    /// The neutral fallback used when a commander lookup fails.
    fn default() -> Self {
        Self {
            mobility: DEFAULT_ABILITY,
            attack: DEFAULT_ABILITY,
            defense: DEFAULT_ABILITY,
        }
    }
}

/// Multiplicative stat ratios derived from ability scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatRatios {
    pub speed: f64,
    pub rotation: f64,
    pub attack: f64,
    pub defense: f64,
}

impl StatRatios {
    /// All ratios at 1.0 — base stats unmodified.
    pub const NEUTRAL: StatRatios = StatRatios {
        speed: 1.0,
        rotation: 1.0,
        attack: 1.0,
        defense: 1.0,
    };

    /// Derive ratios from an optional ability set. `None` (no commander
    /// assigned) yields [`StatRatios::NEUTRAL`].
    pub fn from_scores(scores: Option<&AbilityScores>) -> StatRatios {
        match scores {
            None => StatRatios::NEUTRAL,
            Some(s) => StatRatios {
                speed: speed_ratio(s.mobility),
                rotation: rotation_ratio(s.mobility),
                attack: attack_ratio(s.attack),
                defense: defense_ratio(s.defense),
            },
        }
    }
}

/// Mobility -> translation speed ratio.
pub fn speed_ratio(mobility: i32) -> f64 {
    let raw = (mobility - ABILITY_BASELINE) as f64 / 30.0 + SPEED_RATIO_MIN;
    raw.clamp(SPEED_RATIO_MIN, SPEED_RATIO_MAX)
}

/// Mobility -> rotation speed ratio.
pub fn rotation_ratio(mobility: i32) -> f64 {
    let raw = (mobility - ABILITY_BASELINE) as f64 / 40.0 + ROTATION_RATIO_MIN;
    raw.clamp(ROTATION_RATIO_MIN, ROTATION_RATIO_MAX)
}

/// Attack score -> attack power ratio.
pub fn attack_ratio(attack: i32) -> f64 {
    let raw = (attack - ABILITY_BASELINE) as f64 / 30.0 + ATTACK_RATIO_MIN;
    raw.clamp(ATTACK_RATIO_MIN, ATTACK_RATIO_MAX)
}

/// Defense score -> defense power ratio.
pub fn defense_ratio(defense: i32) -> f64 {
    let raw = (defense - ABILITY_BASELINE) as f64 / 30.0 + DEFENSE_RATIO_MIN;
    raw.clamp(DEFENSE_RATIO_MIN, DEFENSE_RATIO_MAX)
}

/// Recompute a fleet's derived stats from its base stats and an optional
/// commander ability set. The contract of the ability modifier: derived =
/// base x ratio, with every ratio clamped.
pub fn derive_stats(mobility: &mut Mobility, weapons: &mut Weapons, scores: Option<&AbilityScores>) {
    let ratios = StatRatios::from_scores(scores);
    mobility.move_speed = mobility.base_move_speed * ratios.speed;
    mobility.rotation_speed = mobility.base_rotation_speed * ratios.rotation;
    weapons.attack_power = weapons.base_attack_power * ratios.attack;
    weapons.defense_power = weapons.base_defense_power * ratios.defense;
}

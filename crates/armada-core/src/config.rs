//! Battle configuration — the JSON roster and commander data consumed at
//! scenario setup.
//!
//! Corrupt configuration is the one fatal error path the core owns; a
//! missing or unknown commander is not an error and falls back to the
//! documented neutral ability scores.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::abilities::AbilityScores;
use crate::constants::*;
use crate::enums::Faction;

/// Errors surfaced to the scenario loader.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read battle config {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed battle config")]
    Parse(#[from] serde_json::Error),
    #[error("battle config contains no fleets")]
    EmptyRoster,
}

/// A named commander and their raw ability scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommanderSpec {
    pub name: String,
    pub mobility: i32,
    pub attack: i32,
    pub defense: i32,
}

/// One fleet in the initial roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSpec {
    pub faction: Faction,
    /// Display ordinal within the faction.
    pub number: u32,
    pub x: f64,
    pub y: f64,
    /// Initial facing in radians (0 = North).
    #[serde(default)]
    pub heading: f64,
    /// Name of the assigned commander, if any.
    #[serde(default)]
    pub commander: Option<String>,
    // Optional per-fleet stat overrides; absent fields use the base values.
    #[serde(default)]
    pub max_hp: Option<f64>,
    #[serde(default)]
    pub attack_power: Option<f64>,
    #[serde(default)]
    pub defense_power: Option<f64>,
    #[serde(default)]
    pub range: Option<f64>,
    #[serde(default)]
    pub move_speed: Option<f64>,
}

impl FleetSpec {
    /// Effective base stats with overrides applied.
    pub fn base_max_hp(&self) -> f64 {
        self.max_hp.unwrap_or(BASE_MAX_HP)
    }
    pub fn base_attack_power(&self) -> f64 {
        self.attack_power.unwrap_or(BASE_ATTACK_POWER)
    }
    pub fn base_defense_power(&self) -> f64 {
        self.defense_power.unwrap_or(BASE_DEFENSE_POWER)
    }
    pub fn base_range(&self) -> f64 {
        self.range.unwrap_or(BASE_WEAPON_RANGE)
    }
    pub fn base_move_speed(&self) -> f64 {
        self.move_speed.unwrap_or(BASE_MOVE_SPEED)
    }
}

/// Complete battle setup: both rosters plus the commander pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleConfig {
    /// The faction the local player commands.
    #[serde(default)]
    pub player_faction: Faction,
    pub fleets: Vec<FleetSpec>,
    #[serde(default)]
    pub commanders: Vec<CommanderSpec>,
}

impl BattleConfig {
    /// Parse a battle config from a JSON string.
    pub fn from_json(json: &str) -> Result<BattleConfig, ConfigError> {
        let config: BattleConfig = serde_json::from_str(json)?;
        if config.fleets.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        Ok(config)
    }

    /// Load a battle config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<BattleConfig, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Resolve a commander name to ability scores. Unknown names fall back
    /// to the neutral default scores with a diagnostic warning.
    pub fn commander_scores(&self, name: &str) -> AbilityScores {
        match self.commanders.iter().find(|c| c.name == name) {
            Some(c) => AbilityScores {
                mobility: c.mobility,
                attack: c.attack,
                defense: c.defense,
            },
            None => {
                log::warn!("unknown commander '{name}', using default abilities");
                AbilityScores::default()
            }
        }
    }
}

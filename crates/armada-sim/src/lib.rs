//! Battle simulation engine for ARMADA.
//!
//! `BattleEngine` owns the hecs ECS world, processes player commands, runs
//! all per-tick systems, and produces `BattleSnapshot`s. Completely
//! headless (no driver or renderer dependency), enabling deterministic
//! testing.

pub mod engine;
pub mod scenario;
pub mod systems;

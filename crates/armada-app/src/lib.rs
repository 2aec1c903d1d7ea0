//! ARMADA headless driver.
//!
//! Wires the battle engine to a fixed-rate game loop thread and exposes
//! the command/snapshot channels a frontend (or the bundled headless
//! runner binary) consumes.

pub mod game_loop;

pub use armada_core as core;

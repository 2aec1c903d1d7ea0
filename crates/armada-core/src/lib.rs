//! Core types and definitions for the ARMADA fleet battle simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, constants, commander
//! ability modifiers, and battle configuration. It has no dependency on
//! the ECS runtime or any driver framework.

pub mod abilities;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;

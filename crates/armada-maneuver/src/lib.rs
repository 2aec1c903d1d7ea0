//! Fleet motion finite state machine.
//!
//! Pure functions that integrate one fleet's rotation and translation for
//! a single tick. No ECS dependency — operates on plain data, which keeps
//! the state machine independently testable.

pub mod fsm;

#[cfg(test)]
mod tests;

//! PATHWARDEN headless runner.
//!
//! This crate drives the simulation engine on a fixed-rate game-loop thread,
//! feeding it player commands over a channel and publishing snapshots.

pub mod game_loop;
pub mod state;

pub use pathwarden_core as core;

//! Simulation engine for PATHWARDEN.
//!
//! Owns the hecs ECS world, runs systems once per tick, and produces
//! GameStateSnapshots for the rendering shell.

pub mod economy;
pub mod engine;
pub mod path;
pub mod placement;
pub mod systems;
pub mod world_setup;

pub use pathwarden_core as core;
pub use engine::{ClickOutcome, SimConfig, SimulationEngine};

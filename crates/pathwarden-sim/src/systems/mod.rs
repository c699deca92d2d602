//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for read-only).
//! They do not own state. Entity state lives in components, and the ledger
//! and wave scheduler are passed in by the engine.

pub mod cleanup;
pub mod enemies;
pub mod fire_control;
pub mod intercept;
pub mod snapshot;
pub mod wave_spawner;

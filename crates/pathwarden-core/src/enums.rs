//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{BASIC_SPEED, SAUCER_SPEED};

/// Enemy archetype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Full wave health, slow.
    #[default]
    Basic,
    /// One less health than the wave base (at least 1), faster.
    Saucer,
}

impl EnemyKind {
    /// Health of this kind for a wave with the given base health.
    pub fn health_for(self, base_health: u32) -> u32 {
        match self {
            EnemyKind::Basic => base_health.max(1),
            EnemyKind::Saucer => base_health.saturating_sub(1).max(1),
        }
    }

    /// Path progress per tick.
    pub fn speed(self) -> f64 {
        match self {
            EnemyKind::Basic => BASIC_SPEED,
            EnemyKind::Saucer => SAUCER_SPEED,
        }
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
    /// Lives reached zero. Terminal.
    GameOver,
}

/// Wave scheduler state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Waiting for the enemy registry to empty.
    #[default]
    Idle,
    /// Staggered spawns of the current wave are still pending.
    Spawning,
}

//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;
use crate::types::{EnemyId, ProjectileId, TowerId};

/// An enemy walking the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyState {
    pub id: EnemyId,
    pub kind: EnemyKind,
    /// Remaining hit points. The enemy is destroyed when this reaches 0.
    pub health: u32,
    /// Path progress gained per tick.
    pub speed: f64,
    /// Fraction of path arc length covered, in [0, 1].
    pub progress: f64,
}

/// A player-built tower. Its Position is fixed at placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerState {
    pub id: TowerId,
    /// Targeting radius.
    pub range: f64,
    /// Ticks between shots.
    pub fire_delay: u32,
    /// Ticks until the tower may fire again.
    pub cooldown_remaining: u32,
    pub level: u32,
}

/// A homing projectile fired by a tower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileState {
    pub id: ProjectileId,
    /// Enemy this projectile is homing on.
    pub target: EnemyId,
}

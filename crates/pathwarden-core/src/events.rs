//! Events emitted by the simulation for HUD and effects feedback.

use serde::{Deserialize, Serialize};

use crate::commands::PlayerCommand;
use crate::enums::EnemyKind;
use crate::error::CommandError;
use crate::types::{EnemyId, Position, ProjectileId, TowerId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave was scheduled.
    WaveStarted {
        wave: u32,
        enemy_count: u32,
        base_health: u32,
    },
    EnemySpawned {
        enemy_id: EnemyId,
        kind: EnemyKind,
        health: u32,
    },
    /// An enemy reached the end of the path and cost a life.
    EnemyLeaked {
        enemy_id: EnemyId,
        lives_remaining: u32,
    },
    /// An enemy was destroyed by a projectile.
    EnemyKilled { enemy_id: EnemyId, bounty: u32 },
    ProjectileFired {
        projectile_id: ProjectileId,
        tower_id: TowerId,
        target: EnemyId,
    },
    TowerPlaced {
        tower_id: TowerId,
        position: Position,
    },
    TowerUpgraded {
        tower_id: TowerId,
        level: u32,
        range: f64,
        fire_delay: u32,
    },
    /// A queued command was refused; state is unchanged.
    CommandRejected {
        command: PlayerCommand,
        reason: CommandError,
    },
    /// Lives reached zero.
    GameOver { wave: u32 },
}

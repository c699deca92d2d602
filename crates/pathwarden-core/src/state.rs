//! Game state snapshot: the complete visible state handed to the shell each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{EnemyId, Position, ProjectileId, SimTime, TowerId};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub money: u32,
    pub lives: u32,
    pub wave: WaveView,
    /// Live enemies in spawn order.
    pub enemies: Vec<EnemyView>,
    /// Towers in placement order.
    pub towers: Vec<TowerView>,
    /// Projectiles in firing order.
    pub projectiles: Vec<ProjectileView>,
    /// Events raised since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// Wave scheduler status for the HUD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveView {
    pub number: u32,
    pub enemies_per_wave: u32,
    pub base_health: u32,
    /// Staggered spawns of the current wave not yet released.
    pub pending_spawns: u32,
    pub phase: WavePhase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub enemy_id: EnemyId,
    pub kind: EnemyKind,
    pub position: Position,
    pub progress: f64,
    pub health: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerView {
    pub tower_id: TowerId,
    pub position: Position,
    pub range: f64,
    pub fire_delay: u32,
    pub cooldown_remaining: u32,
    pub level: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub projectile_id: ProjectileId,
    pub position: Position,
    pub target: EnemyId,
}

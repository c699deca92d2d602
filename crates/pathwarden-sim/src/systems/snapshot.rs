//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use pathwarden_core::components::*;
use pathwarden_core::enums::GamePhase;
use pathwarden_core::events::GameEvent;
use pathwarden_core::state::*;
use pathwarden_core::types::{Position, SimTime};

use crate::economy::EconomyLedger;
use crate::systems::wave_spawner::WaveScheduler;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    ledger: &EconomyLedger,
    waves: &WaveScheduler,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        money: ledger.money(),
        lives: ledger.lives(),
        wave: waves.view(),
        enemies: build_enemies(world),
        towers: build_towers(world),
        projectiles: build_projectiles(world),
        events,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&EnemyState, &Position)>()
        .iter()
        .map(|(_, (enemy, pos))| EnemyView {
            enemy_id: enemy.id,
            kind: enemy.kind,
            position: *pos,
            progress: enemy.progress,
            health: enemy.health,
        })
        .collect();

    enemies.sort_by_key(|e| e.enemy_id);
    enemies
}

fn build_towers(world: &World) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&TowerState, &Position)>()
        .iter()
        .map(|(_, (tower, pos))| TowerView {
            tower_id: tower.id,
            position: *pos,
            range: tower.range,
            fire_delay: tower.fire_delay,
            cooldown_remaining: tower.cooldown_remaining,
            level: tower.level,
        })
        .collect();

    towers.sort_by_key(|t| t.tower_id);
    towers
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&ProjectileState, &Position)>()
        .iter()
        .map(|(_, (projectile, pos))| ProjectileView {
            projectile_id: projectile.id,
            position: *pos,
            target: projectile.target,
        })
        .collect();

    projectiles.sort_by_key(|p| p.projectile_id);
    projectiles
}

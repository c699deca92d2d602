//! Enemy registry: spawning, spawn-order iteration, path motion, and leaks.

use hecs::{Entity, World};
use rand::Rng;

use pathwarden_core::components::EnemyState;
use pathwarden_core::enums::EnemyKind;
use pathwarden_core::events::GameEvent;
use pathwarden_core::types::{EnemyId, Position};

use crate::economy::EconomyLedger;
use crate::path::Path;
use crate::world_setup::{self, IdAllocator};

/// Pick an enemy kind with an even Basic/Saucer split.
pub fn roll_kind<R: Rng + ?Sized>(rng: &mut R) -> EnemyKind {
    if rng.gen_bool(0.5) {
        EnemyKind::Basic
    } else {
        EnemyKind::Saucer
    }
}

/// Spawn one enemy of a randomly chosen kind for a wave with `base_health`.
pub fn spawn_rolled<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    ids: &mut IdAllocator,
    path: &Path,
    base_health: u32,
    events: &mut Vec<GameEvent>,
) -> EnemyId {
    let kind = roll_kind(rng);
    let health = kind.health_for(base_health);
    let (_entity, enemy_id) =
        world_setup::spawn_enemy(world, ids, path, kind, health, kind.speed());
    events.push(GameEvent::EnemySpawned {
        enemy_id,
        kind,
        health,
    });
    enemy_id
}

/// Live enemies as a stable snapshot in spawn order.
/// Passes that may remove enemies iterate this, never a live query.
pub fn in_spawn_order(world: &World) -> Vec<(Entity, EnemyId)> {
    let mut enemies: Vec<(Entity, EnemyId)> = world
        .query::<&EnemyState>()
        .iter()
        .map(|(entity, state)| (entity, state.id))
        .collect();
    enemies.sort_by_key(|&(_, id)| id);
    enemies
}

/// Live enemies with their positions, in spawn order.
pub fn positions_in_spawn_order(world: &World) -> Vec<(Entity, EnemyId, Position)> {
    let mut enemies: Vec<(Entity, EnemyId, Position)> = world
        .query::<(&EnemyState, &Position)>()
        .iter()
        .filter(|(_, (state, _))| state.health > 0)
        .map(|(entity, (state, pos))| (entity, state.id, *pos))
        .collect();
    enemies.sort_by_key(|&(_, id, _)| id);
    enemies
}

pub fn count(world: &World) -> usize {
    world.query::<&EnemyState>().iter().count()
}

/// Remove an enemy. Returns false if it was already gone.
pub fn remove(world: &mut World, entity: Entity) -> bool {
    world.despawn(entity).is_ok()
}

/// Advance every enemy along the path. Enemies reaching the end are removed
/// and cost a life. The pass stops at once if that ends the game.
pub fn advance(
    world: &mut World,
    path: &Path,
    ledger: &mut EconomyLedger,
    events: &mut Vec<GameEvent>,
) {
    for (entity, enemy_id) in in_spawn_order(world) {
        let leaked = {
            let Ok((state, pos)) = world.query_one_mut::<(&mut EnemyState, &mut Position)>(entity)
            else {
                continue;
            };
            state.progress = (state.progress + state.speed).min(1.0);
            *pos = path.point_at(state.progress);
            state.progress >= 1.0
        };

        if !leaked {
            continue;
        }

        remove(world, entity);
        let ended = ledger.lose_life();
        log::info!(
            "Enemy {} leaked, {} lives remaining",
            enemy_id,
            ledger.lives()
        );
        events.push(GameEvent::EnemyLeaked {
            enemy_id,
            lives_remaining: ledger.lives(),
        });
        if ended {
            return;
        }
    }
}

//! Projectile homing and impact resolution.
//!
//! Projectiles chase their target's current position at a fixed speed. One
//! that loses its target is removed without effect. A hit costs the target
//! one health; a kill removes the enemy and pays the bounty.

use hecs::{Entity, World};

use pathwarden_core::components::{EnemyState, ProjectileState};
use pathwarden_core::constants::*;
use pathwarden_core::events::GameEvent;
use pathwarden_core::types::{Position, ProjectileId};

use crate::economy::EconomyLedger;
use crate::systems::enemies;
use crate::world_setup::Homing;

/// Projectiles in firing order, with the entity each one chases.
fn in_firing_order(world: &World) -> Vec<(Entity, Entity)> {
    let mut projectiles: Vec<(Entity, Entity, ProjectileId)> = world
        .query::<(&ProjectileState, &Homing)>()
        .iter()
        .map(|(entity, (state, homing))| (entity, homing.target, state.id))
        .collect();
    projectiles.sort_by_key(|&(_, _, id)| id);
    projectiles
        .into_iter()
        .map(|(entity, target, _)| (entity, target))
        .collect()
}

/// Current position of a target if it is still a live enemy.
fn live_target_position(world: &World, target: Entity) -> Option<Position> {
    let mut query = world.query_one::<(&EnemyState, &Position)>(target).ok()?;
    let (state, pos) = query.get()?;
    (state.health > 0).then_some(*pos)
}

/// Advance every projectile one tick and resolve impacts.
pub fn run(world: &mut World, ledger: &mut EconomyLedger, events: &mut Vec<GameEvent>) {
    for (projectile, target) in in_firing_order(world) {
        let Some(target_pos) = live_target_position(world, target) else {
            let _ = world.despawn(projectile);
            continue;
        };

        let hit = {
            let Ok(mut pos) = world.get::<&mut Position>(projectile) else {
                continue;
            };
            let next = pos.step_toward(&target_pos, PROJECTILE_STEP);
            *pos = next;
            pos.range_to(&target_pos) <= PROJECTILE_HIT_RADIUS
        };

        if hit {
            resolve_hit(world, projectile, target, ledger, events);
        }
    }
}

/// Apply one projectile impact: damage the target, consume the projectile,
/// and on a kill remove the enemy and pay the bounty.
pub fn resolve_hit(
    world: &mut World,
    projectile: Entity,
    target: Entity,
    ledger: &mut EconomyLedger,
    events: &mut Vec<GameEvent>,
) {
    let _ = world.despawn(projectile);

    let killed = {
        let Ok(mut enemy) = world.get::<&mut EnemyState>(target) else {
            return;
        };
        enemy.health = enemy.health.saturating_sub(PROJECTILE_DAMAGE);
        (enemy.health == 0).then_some(enemy.id)
    };

    if let Some(enemy_id) = killed {
        enemies::remove(world, target);
        ledger.earn(KILL_BOUNTY);
        log::debug!("Enemy {} destroyed, money = {}", enemy_id, ledger.money());
        events.push(GameEvent::EnemyKilled {
            enemy_id,
            bounty: KILL_BOUNTY,
        });
    }
}

//! Tower registry and targeting: placement, upgrades, cooldowns, firing.
//!
//! Target acquisition is first-match in enemy spawn order: the earliest
//! spawned live enemy strictly inside range. Not nearest, not weakest.

use hecs::{Entity, World};

use pathwarden_core::components::TowerState;
use pathwarden_core::constants::*;
use pathwarden_core::events::GameEvent;
use pathwarden_core::types::{EnemyId, Position, TowerId};

use crate::systems::enemies;
use crate::world_setup::{self, IdAllocator};

/// Place a tower. Callers gate on funds and placement validity first.
pub fn place(world: &mut World, ids: &mut IdAllocator, position: Position) -> TowerId {
    world_setup::spawn_tower(world, ids, position)
}

/// Towers in placement order.
pub fn in_placement_order(world: &World) -> Vec<(Entity, TowerId, Position)> {
    let mut towers: Vec<(Entity, TowerId, Position)> = world
        .query::<(&TowerState, &Position)>()
        .iter()
        .map(|(entity, (state, pos))| (entity, state.id, *pos))
        .collect();
    towers.sort_by_key(|&(_, id, _)| id);
    towers
}

pub fn find(world: &World, tower_id: TowerId) -> Option<Entity> {
    world
        .query::<&TowerState>()
        .iter()
        .find(|(_, state)| state.id == tower_id)
        .map(|(entity, _)| entity)
}

/// First tower (in placement order) strictly within `radius` of `point`.
pub fn tower_at(world: &World, point: Position, radius: f64) -> Option<TowerId> {
    in_placement_order(world)
        .into_iter()
        .find(|(_, _, pos)| pos.range_to(&point) < radius)
        .map(|(_, id, _)| id)
}

/// One upgrade step: +1 level, +20 range, fire delay -10 down to the floor.
pub fn apply_upgrade(tower: &mut TowerState) {
    tower.level += 1;
    tower.range += UPGRADE_RANGE_BONUS;
    tower.fire_delay = tower
        .fire_delay
        .saturating_sub(UPGRADE_FIRE_DELAY_REDUCTION)
        .max(TOWER_MIN_FIRE_DELAY);
}

/// Upgrade a tower in place. Returns the new stats, or None for an unknown id.
pub fn upgrade(world: &mut World, tower_id: TowerId) -> Option<TowerState> {
    let entity = find(world, tower_id)?;
    let mut tower = world.get::<&mut TowerState>(entity).ok()?;
    apply_upgrade(&mut tower);
    Some(tower.clone())
}

/// First candidate strictly inside `range` of `origin`.
pub fn acquire_target(
    candidates: &[(Entity, EnemyId, Position)],
    origin: &Position,
    range: f64,
) -> Option<(Entity, EnemyId)> {
    candidates
        .iter()
        .find(|(_, _, pos)| origin.range_to(pos) < range)
        .map(|&(entity, id, _)| (entity, id))
}

/// Run tower cooldowns for one tick, firing where a target is available.
///
/// A ready tower without a target keeps its cooldown at 0 and retries next tick;
/// the cooldown only resets on an actual shot.
pub fn run(world: &mut World, ids: &mut IdAllocator, events: &mut Vec<GameEvent>) {
    let candidates = enemies::positions_in_spawn_order(world);

    for (entity, tower_id, tower_pos) in in_placement_order(world) {
        let shot = {
            let Ok(mut tower) = world.get::<&mut TowerState>(entity) else {
                continue;
            };
            if tower.cooldown_remaining > 0 {
                tower.cooldown_remaining -= 1;
                None
            } else {
                let target = acquire_target(&candidates, &tower_pos, tower.range);
                if target.is_some() {
                    tower.cooldown_remaining = tower.fire_delay;
                }
                target
            }
        };

        if let Some((target_entity, target_id)) = shot {
            let projectile_id =
                world_setup::spawn_projectile(world, ids, tower_pos, target_entity, target_id);
            events.push(GameEvent::ProjectileFired {
                projectile_id,
                tower_id,
                target: target_id,
            });
        }
    }
}

//! Entity spawn factories for the simulation world.
//!
//! Creates enemy, tower, and projectile entities with their component
//! bundles, and hands out the identities that fix their iteration order.

use hecs::{Entity, World};

use pathwarden_core::components::*;
use pathwarden_core::constants::*;
use pathwarden_core::enums::EnemyKind;
use pathwarden_core::types::{EnemyId, Position, ProjectileId, TowerId};

use crate::path::Path;

/// Non-owning link from a projectile to the enemy entity it chases.
/// A despawned target makes `World::get` fail, which is how "no longer alive" is observed.
#[derive(Debug, Clone, Copy)]
pub struct Homing {
    pub target: Entity,
}

/// Monotonic id counters. Ids are never reused, so sorting by id gives creation order.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next_enemy: u32,
    next_tower: u32,
    next_projectile: u32,
}

impl IdAllocator {
    pub fn enemy(&mut self) -> EnemyId {
        let id = EnemyId(self.next_enemy);
        self.next_enemy += 1;
        id
    }

    pub fn tower(&mut self) -> TowerId {
        let id = TowerId(self.next_tower);
        self.next_tower += 1;
        id
    }

    pub fn projectile(&mut self) -> ProjectileId {
        let id = ProjectileId(self.next_projectile);
        self.next_projectile += 1;
        id
    }
}

/// Spawn an enemy at the start of the path (progress 0).
pub fn spawn_enemy(
    world: &mut World,
    ids: &mut IdAllocator,
    path: &Path,
    kind: EnemyKind,
    health: u32,
    speed: f64,
) -> (Entity, EnemyId) {
    let id = ids.enemy();
    let state = EnemyState {
        id,
        kind,
        health: health.max(1),
        speed,
        progress: 0.0,
    };
    let entity = world.spawn((state, path.point_at(0.0)));
    (entity, id)
}

/// Spawn a tower with base stats, ready to fire.
pub fn spawn_tower(world: &mut World, ids: &mut IdAllocator, position: Position) -> TowerId {
    let id = ids.tower();
    let state = TowerState {
        id,
        range: TOWER_BASE_RANGE,
        fire_delay: TOWER_BASE_FIRE_DELAY,
        cooldown_remaining: 0,
        level: 1,
    };
    world.spawn((state, position));
    id
}

/// Spawn a projectile at `origin` homing on `target`.
pub fn spawn_projectile(
    world: &mut World,
    ids: &mut IdAllocator,
    origin: Position,
    target: Entity,
    target_id: EnemyId,
) -> ProjectileId {
    let id = ids.projectile();
    let state = ProjectileState {
        id,
        target: target_id,
    };
    world.spawn((state, origin, Homing { target }));
    id
}

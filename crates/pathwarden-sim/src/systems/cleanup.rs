//! Cleanup system: removes projectiles whose target is gone.
//!
//! A projectile processed before its target was killed later in the same
//! pass would otherwise outlive the target until the next tick.

use hecs::{Entity, World};

use pathwarden_core::components::{EnemyState, ProjectileState};

use crate::world_setup::Homing;

/// Despawn every projectile whose target is no longer a live enemy.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_projectile, homing)) in world.query::<(&ProjectileState, &Homing)>().iter() {
        let target_alive = world
            .get::<&EnemyState>(homing.target)
            .map(|enemy| enemy.health > 0)
            .unwrap_or(false);
        if !target_alive {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

//! Cleanup system: expires transient explosion effects.
//!
//! Missiles are never removed here; detonation is their only exit.

use hecs::{Entity, World};

use foxtwo_core::components::Explosion;

/// Age explosion effects and despawn the finished ones.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, dt: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, explosion) in world.query_mut::<&mut Explosion>() {
        explosion.remaining_secs -= dt;
        if explosion.remaining_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

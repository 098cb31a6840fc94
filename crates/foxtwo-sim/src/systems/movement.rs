//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! Bodies without a Velocity are stationary.

use hecs::World;

use foxtwo_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0 * dt;
    }
}

//! Entity spawn factories for setting up the simulation world.
//!
//! Creates shooters, target bodies, obstacles and seeded target fields with
//! the appropriate component bundles.

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use foxtwo_core::components::*;
use foxtwo_core::config::SimConfig;
use foxtwo_core::constants::*;
use foxtwo_core::enums::TargetClass;
use foxtwo_core::types::{Orientation, Position, Velocity};
use foxtwo_seeker::{LockParams, LockSession};

/// Spawn a missile-carrying shooter with a fresh lock session.
pub fn spawn_shooter(
    world: &mut World,
    config: &SimConfig,
    position: DVec3,
    forward: DVec3,
    velocity: DVec3,
) -> Entity {
    let launcher = Launcher {
        magazine: config.launch.magazine,
        hardpoints: config.launch.hardpoints.clone(),
        next_hardpoint: 0,
        missile_type: config.launch.initial_missile_type,
    };
    let session: LockSession<Entity> = LockSession::new(LockParams::from(&config.lock));

    world.spawn((
        Shooter,
        Position(position),
        Velocity(velocity),
        Orientation::looking_along(forward),
        launcher,
        session,
    ))
}

/// Spawn a lockable target. `velocity: None` makes it stationary.
pub fn spawn_target(
    world: &mut World,
    name: impl Into<String>,
    class: TargetClass,
    position: DVec3,
    velocity: Option<DVec3>,
) -> Entity {
    let entity = world.spawn((
        Target {
            name: name.into(),
            class,
        },
        Position(position),
        Health::full(DEFAULT_TARGET_HEALTH),
        Collider {
            radius: DEFAULT_TARGET_RADIUS,
        },
    ));
    if let Some(velocity) = velocity {
        let _ = world.insert_one(entity, Velocity(velocity));
    }
    entity
}

/// Spawn a solid, non-target body (terrain feature, structure).
pub fn spawn_obstacle(world: &mut World, position: DVec3, radius: f64) -> Entity {
    world.spawn((Position(position), Collider { radius }))
}

/// Spawn `count` aircraft scattered ahead of `origin` within the forward
/// hemisphere, flying random level headings at 150–300 m/s.
///
/// Ranges are drawn from `min_range..=max_range`. Inverted or non-finite
/// bounds spawn nothing.
pub fn spawn_target_field(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    origin: DVec3,
    count: usize,
    min_range: f64,
    max_range: f64,
) -> Vec<Entity> {
    if !(min_range.is_finite() && max_range.is_finite() && min_range <= max_range) {
        log::warn!("target field bounds {min_range}..={max_range} are empty; nothing spawned");
        return Vec::new();
    }

    (0..count)
        .map(|i| {
            let bearing: f64 = rng.gen_range(-90.0_f64..90.0).to_radians();
            let elevation: f64 = rng.gen_range(-15.0_f64..15.0).to_radians();
            let range: f64 = rng.gen_range(min_range..=max_range);

            let dir = DVec3::new(
                bearing.sin() * elevation.cos(),
                elevation.sin(),
                bearing.cos() * elevation.cos(),
            );
            let heading: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
            let speed: f64 = rng.gen_range(150.0..300.0);
            let velocity = DVec3::new(heading.sin(), 0.0, heading.cos()) * speed;

            spawn_target(
                world,
                format!("Bandit {}", i + 1),
                TargetClass::Aircraft,
                origin + dir * range,
                Some(velocity),
            )
        })
        .collect()
}

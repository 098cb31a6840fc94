//! Kinematic target directory: read-only queries over live target bodies.
//!
//! Recomputed every tick; nothing is cached because target positions are
//! driven from outside the simulation.

use glam::DVec3;
use hecs::{Entity, World};

use foxtwo_core::components::Target;
use foxtwo_core::enums::TargetClass;
use foxtwo_core::types::{angle_between_deg, Position};
use foxtwo_seeker::Contact;

/// Target bodies of the given classes within `radius` of `center`.
pub fn overlap_sphere(
    world: &World,
    center: DVec3,
    radius: f64,
    classes: &[TargetClass],
) -> Vec<(Entity, DVec3)> {
    let radius_sq = radius * radius;
    world
        .query::<(&Target, &Position)>()
        .iter()
        .filter(|(_, (target, pos))| {
            classes.contains(&target.class) && pos.0.distance_squared(center) <= radius_sq
        })
        .map(|(entity, (_, pos))| (entity, pos.0))
        .collect()
}

/// Every live target within `max_range` of the shooter, annotated with its
/// off-boresight angle. The shooter itself is never reported.
pub fn scan(
    world: &World,
    shooter: Entity,
    origin: DVec3,
    forward: DVec3,
    max_range: f64,
    classes: &[TargetClass],
) -> Vec<Contact<Entity>> {
    overlap_sphere(world, origin, max_range, classes)
        .into_iter()
        .filter(|(entity, _)| *entity != shooter)
        .map(|(entity, pos)| annotate(entity, origin, forward, pos))
        .collect()
}

/// Contact for one specific live target, wherever it is.
pub fn track(
    world: &World,
    origin: DVec3,
    forward: DVec3,
    target: Entity,
) -> Option<Contact<Entity>> {
    if !is_live(world, target) {
        return None;
    }
    let pos = world.get::<&Position>(target).ok()?.0;
    Some(annotate(target, origin, forward, pos))
}

fn annotate(entity: Entity, origin: DVec3, forward: DVec3, pos: DVec3) -> Contact<Entity> {
    Contact {
        handle: entity,
        angle_deg: angle_between_deg(forward, pos - origin),
        range: Position(origin).range_to(&Position(pos)),
    }
}

/// Whether `entity` is still a live target body.
pub fn is_live(world: &World, entity: Entity) -> bool {
    world.get::<&Target>(entity).is_ok()
}

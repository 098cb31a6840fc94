//! Collision system: contact fusing for missiles.
//!
//! Contacts come from two places: a swept-sphere test of each missile's path
//! for this tick against every `Collider`, and contacts reported by an
//! external physics layer. Either way the missile detonates; it counts as a
//! hit only if the body is a target.

use glam::DVec3;
use hecs::{Entity, World};

use foxtwo_core::components::Collider;
use foxtwo_core::enums::DetonationCause;
use foxtwo_core::events::EngagementEvent;
use foxtwo_core::types::{Position, Velocity};

use crate::guidance::segment_distance;
use crate::missile::MissileState;
use crate::systems::detonation::{detonate, Detonation};
use crate::systems::directory;

/// Run contact detection for one tick, consuming `reported` contacts.
pub fn run(
    world: &mut World,
    dt: f64,
    reported: &mut Vec<(Entity, Entity)>,
    events: &mut Vec<EngagementEvent>,
) {
    for (missile, body) in reported.drain(..) {
        if let Some(det) = contact(world, missile, body) {
            detonate(world, det, events);
        }
    }

    let colliders: Vec<(Entity, DVec3, f64)> = world
        .query::<(&Position, &Collider)>()
        .iter()
        .map(|(entity, (pos, collider))| (entity, pos.0, collider.radius))
        .collect();
    if colliders.is_empty() {
        return;
    }

    let sweeps: Vec<(Entity, Entity, DVec3, DVec3)> = world
        .query::<(&MissileState, &Position, &Velocity)>()
        .iter()
        .filter(|(_, (state, _, _))| !state.is_terminal())
        .map(|(entity, (state, pos, vel))| (entity, state.shooter, pos.0, pos.0 + vel.0 * dt))
        .collect();

    for (missile, shooter, start, end) in sweeps {
        let first_contact = colliders
            .iter()
            .filter(|(body, _, _)| *body != shooter && *body != missile)
            .filter(|(_, center, radius)| segment_distance(start, end, *center) <= *radius)
            .min_by(|a, b| start.distance(a.1).total_cmp(&start.distance(b.1)));

        // Bodies destroyed earlier in this pass are no longer there to touch.
        if let Some(&(body, _, _)) = first_contact.filter(|(body, _, _)| world.contains(*body)) {
            if let Some(det) = contact(world, missile, body) {
                detonate(world, det, events);
            }
        }
    }
}

/// Build the detonation for `missile` touching `body`, if the contact counts.
/// Any contact is terminal; a body already gone from the world is not a hit.
fn contact(world: &World, missile: Entity, body: Entity) -> Option<Detonation> {
    let shooter = world.get::<&MissileState>(missile).ok()?.shooter;
    if body == shooter || body == missile {
        return None;
    }
    Some(Detonation {
        missile,
        hit: directory::is_live(world, body),
        struck: world.contains(body).then_some(body),
        cause: DetonationCause::Impact,
    })
}

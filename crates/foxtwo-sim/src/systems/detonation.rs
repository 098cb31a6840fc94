//! Detonation: the single point where a missile is destroyed.
//!
//! Spawns the explosion effect, applies blast falloff damage, removes a
//! directly hit target and despawns the missile. A missile already in its
//! terminal phase (or already gone) cannot detonate again.

use glam::DVec3;
use hecs::{Entity, World};

use foxtwo_core::components::{Explosion, Health};
use foxtwo_core::enums::{DetonationCause, MissilePhase};
use foxtwo_core::events::EngagementEvent;
use foxtwo_core::types::Position;

use crate::guidance::falloff;
use crate::missile::MissileState;

/// A detonation request.
#[derive(Debug, Clone, Copy)]
pub struct Detonation {
    pub missile: Entity,
    /// Whether the missile struck a valid target.
    pub hit: bool,
    /// The body that triggered the fuse, if any.
    pub struck: Option<Entity>,
    pub cause: DetonationCause,
}

/// Detonate a missile. Returns `false` if it had already detonated.
pub fn detonate(world: &mut World, det: Detonation, events: &mut Vec<EngagementEvent>) -> bool {
    let (position, spec, own_target) = {
        let Ok(mut state) = world.get::<&mut MissileState>(det.missile) else {
            return false;
        };
        if state.is_terminal() {
            return false;
        }
        state.phase = MissilePhase::Terminal;
        let position = world
            .get::<&Position>(det.missile)
            .map(|p| p.0)
            .unwrap_or_default();
        (position, state.spec, state.target)
    };

    world.spawn((
        Explosion {
            radius: spec.explosion_radius_m,
            remaining_secs: spec.effect_secs,
            hit: det.hit,
        },
        Position(position),
    ));

    let mut destroyed = apply_blast(world, position, spec.explosion_radius_m, spec.explosion_damage);
    if det.hit {
        if let Some(struck) = det.struck.filter(|s| Some(*s) == own_target) {
            destroyed.push(struck);
        }
    }

    let _ = world.despawn(det.missile);
    log::info!(
        "missile {:?} detonated ({:?}, hit={}) at {:.0?}",
        det.missile,
        det.cause,
        det.hit,
        position
    );
    events.push(EngagementEvent::Detonated {
        missile: det.missile.to_bits().get(),
        position,
        hit: det.hit,
        cause: det.cause,
    });

    destroyed.sort_unstable();
    destroyed.dedup();
    for body in destroyed {
        if world.despawn(body).is_ok() {
            log::info!("target {body:?} destroyed");
            events.push(EngagementEvent::TargetDestroyed {
                target: body.to_bits().get(),
            });
        }
    }

    true
}

/// Damage every body with health inside the blast, scaled by `1 - d/r`.
/// Returns the bodies brought to zero health.
pub fn apply_blast(world: &mut World, center: DVec3, radius: f64, damage: f64) -> Vec<Entity> {
    let mut destroyed = Vec::new();
    for (entity, (pos, health)) in world.query_mut::<(&Position, &mut Health)>() {
        let scale = falloff(pos.0.distance(center), radius);
        if scale <= 0.0 {
            continue;
        }
        health.current = (health.current - damage * scale).max(0.0);
        if health.current <= 0.0 {
            destroyed.push(entity);
        }
    }
    destroyed
}

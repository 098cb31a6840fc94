//! Missile flight system: propulsion, guidance, proximity fuse and lifetime.
//!
//! Each missile advances independently. Target liveness is read from the
//! world every tick, so a target destroyed by one missile is gone for all.

use glam::DVec3;
use hecs::{Entity, World};

use foxtwo_core::enums::{DetonationCause, MissilePhase};
use foxtwo_core::events::EngagementEvent;
use foxtwo_core::types::{Orientation, Position, Velocity};

use crate::guidance::{lead_point, turn_toward};
use crate::missile::MissileState;
use crate::systems::detonation::{detonate, Detonation};
use crate::systems::directory;

/// Run missile flight for one tick.
pub fn run(world: &mut World, dt: f64, events: &mut Vec<EngagementEvent>) {
    let missiles: Vec<Entity> = world
        .query::<&MissileState>()
        .iter()
        .filter(|(_, state)| !state.is_terminal())
        .map(|(entity, _)| entity)
        .collect();

    for missile in missiles {
        if let Some(det) = step(world, missile, dt) {
            detonate(world, det, events);
        }
    }
}

/// Advance one missile. Returns a detonation if a fuse fired this tick.
fn step(world: &mut World, missile: Entity, dt: f64) -> Option<Detonation> {
    let mut state = (*world.get::<&MissileState>(missile).ok()?).clone();
    let position = world.get::<&Position>(missile).ok()?.0;
    let mut orientation = world.get::<&Orientation>(missile).ok()?.0;

    state.advance_age(dt);
    state.update_propulsion(dt);

    let tracked = state
        .target
        .and_then(|t| target_kinematics(world, t).map(|k| (t, k)));
    match tracked {
        Some((_, (target_pos, _))) => state.last_known_target_position = Some(target_pos),
        None => {
            if let Some(lost) = state.target.take() {
                log::debug!("missile {missile:?} lost target {lost:?}");
            }
        }
    }

    let mut fuse = None;
    if state.guidance_active() {
        if state.phase == MissilePhase::PreGuidance {
            state.phase = MissilePhase::Guiding;
            log::debug!("missile {missile:?} guidance active at {:.2}s", state.age);
        }

        match tracked {
            Some((target, (target_pos, target_vel))) => {
                let aim = lead_point(position, state.speed, target_pos, target_vel);
                orientation = turn_toward(orientation, aim - position, state.max_turn_deg(dt));

                if position.distance(target_pos) < state.spec.proximity_fuse_m {
                    fuse = Some(Detonation {
                        missile,
                        hit: true,
                        struck: Some(target),
                        cause: DetonationCause::Proximity,
                    });
                }
            }
            None => {
                // One last correction toward where the target was, then hold.
                if !state.steered_to_last_known {
                    if let Some(last_known) = state.last_known_target_position {
                        orientation =
                            turn_toward(orientation, last_known - position, state.max_turn_deg(dt));
                    }
                    state.steered_to_last_known = true;
                }
            }
        }
    }

    if fuse.is_none() && state.lifetime_expired() {
        fuse = Some(Detonation {
            missile,
            hit: false,
            struck: None,
            cause: DetonationCause::SelfDestruct,
        });
    }

    let velocity = state.velocity(orientation * DVec3::Z);
    if let Ok(mut s) = world.get::<&mut MissileState>(missile) {
        *s = state;
    }
    if let Ok(mut o) = world.get::<&mut Orientation>(missile) {
        o.0 = orientation;
    }
    if let Ok(mut v) = world.get::<&mut Velocity>(missile) {
        v.0 = velocity;
    }

    fuse
}

/// Position and optional velocity of a live target.
fn target_kinematics(world: &World, target: Entity) -> Option<(DVec3, Option<DVec3>)> {
    if !directory::is_live(world, target) {
        return None;
    }
    let pos = world.get::<&Position>(target).ok()?.0;
    let vel = world.get::<&Velocity>(target).ok().map(|v| v.0);
    Some((pos, vel))
}

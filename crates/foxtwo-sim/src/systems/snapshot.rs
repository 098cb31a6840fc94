//! Snapshot system: queries the ECS world and builds the HUD snapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::{Entity, World};

use foxtwo_core::components::{Explosion, Launcher, Target};
use foxtwo_core::events::EngagementEvent;
use foxtwo_core::state::*;
use foxtwo_core::types::{Position, SimTime};
use foxtwo_seeker::LockSession;

use crate::missile::MissileState;

/// Build the HUD snapshot for `shooter`.
pub fn build_snapshot(
    world: &World,
    shooter: Entity,
    time: &SimTime,
    events: Vec<EngagementEvent>,
) -> HudSnapshot {
    let (missile_count, current_missile_type) = world
        .get::<&Launcher>(shooter)
        .map(|l| (l.magazine, l.missile_type))
        .unwrap_or_default();

    let (lock_state, lock_progress, target) = world
        .get::<&LockSession<Entity>>(shooter)
        .map(|s| (s.state(), s.progress(), s.target()))
        .unwrap_or_default();

    HudSnapshot {
        time: *time,
        missile_count,
        current_missile_type,
        lock_state,
        lock_progress,
        current_target: target.and_then(|t| build_target(world, shooter, t)),
        missiles: build_missiles(world),
        explosions: build_explosions(world),
        events,
    }
}

fn build_target(world: &World, shooter: Entity, target: Entity) -> Option<TargetView> {
    let shooter_pos = *world.get::<&Position>(shooter).ok()?;
    let target_pos = *world.get::<&Position>(target).ok()?;
    let name = world.get::<&Target>(target).ok()?.name.clone();
    Some(TargetView {
        name,
        range: shooter_pos.range_to(&target_pos),
    })
}

fn build_missiles(world: &World) -> Vec<MissileView> {
    world
        .query::<(&MissileState, &Position)>()
        .iter()
        .map(|(entity, (state, pos))| MissileView {
            id: entity.to_bits().get(),
            missile_type: state.missile_type,
            phase: state.phase,
            position: pos.0,
            speed: state.speed,
            has_fuel: state.has_fuel(),
            lock_quality: state.lock_quality,
        })
        .collect()
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    world
        .query::<(&Explosion, &Position)>()
        .iter()
        .map(|(_, (explosion, pos))| ExplosionView {
            position: pos.0,
            radius: explosion.radius,
            hit: explosion.hit,
        })
        .collect()
}

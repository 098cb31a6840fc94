//! Fire control: validates fire requests, picks a hardpoint and launches.

use glam::DVec3;
use hecs::{Entity, World};

use foxtwo_core::components::Launcher;
use foxtwo_core::config::{LaunchConfig, MissileProfiles, MissileSpec};
use foxtwo_core::enums::{LockState, MissileType};
use foxtwo_core::error::FireRejection;
use foxtwo_core::events::EngagementEvent;
use foxtwo_core::types::{Orientation, Position, Velocity};
use foxtwo_seeker::LockSession;

use crate::missile::MissileState;

/// Everything needed to put a missile in the air.
#[derive(Debug, Clone)]
pub struct MissileLaunch {
    pub missile_type: MissileType,
    pub spec: MissileSpec,
    pub position: DVec3,
    pub forward: DVec3,
    pub velocity: DVec3,
    pub lock_quality: f64,
    pub target: Option<Entity>,
    pub shooter: Entity,
}

/// Handle a fire request for `shooter`, emitting the launch or rejection event.
pub fn run(
    world: &mut World,
    shooter: Entity,
    launch: &LaunchConfig,
    profiles: &MissileProfiles,
    events: &mut Vec<EngagementEvent>,
) -> Result<Entity, FireRejection> {
    let result = fire(world, shooter, launch, profiles, events);
    if let Err(reason) = result {
        log::debug!("fire rejected: {reason}");
        events.push(if reason.is_lock_related() {
            EngagementEvent::NoLockRejected { reason }
        } else {
            EngagementEvent::FireRejected { reason }
        });
    }
    result
}

/// Validate and launch. Preconditions are checked in order: ammunition,
/// hardpoints, target, lock. A rejection changes no state.
pub fn fire(
    world: &mut World,
    shooter: Entity,
    launch: &LaunchConfig,
    profiles: &MissileProfiles,
    events: &mut Vec<EngagementEvent>,
) -> Result<Entity, FireRejection> {
    let (target, lock_quality) = check_preconditions(world, shooter)?;

    let shooter_pos = world
        .get::<&Position>(shooter)
        .map(|p| p.0)
        .unwrap_or_default();
    let shooter_vel = world
        .get::<&Velocity>(shooter)
        .map(|v| v.0)
        .unwrap_or_default();
    let orientation = world
        .get::<&Orientation>(shooter)
        .map(|o| *o)
        .unwrap_or_default();

    let (hardpoint_index, hardpoint, missile_type) = {
        let mut launcher = world
            .get::<&mut Launcher>(shooter)
            .map_err(|_| FireRejection::NoHardpoints)?;
        let index = launcher.next_hardpoint % launcher.hardpoints.len();
        launcher.next_hardpoint = (index + 1) % launcher.hardpoints.len();
        launcher.magazine -= 1;
        (index, launcher.hardpoints[index], launcher.missile_type)
    };

    let forward = orientation
        .to_world(hardpoint.forward)
        .try_normalize()
        .unwrap_or_else(|| orientation.forward());

    let missile = spawn_missile(
        world,
        MissileLaunch {
            missile_type,
            spec: *profiles.get(missile_type),
            position: shooter_pos + orientation.to_world(hardpoint.offset),
            forward,
            velocity: shooter_vel + forward * launch.separation_boost_mps,
            lock_quality,
            target: Some(target),
            shooter,
        },
    );

    if launch.reset_lock_on_fire {
        if let Ok(mut session) = world.get::<&mut LockSession<Entity>>(shooter) {
            session.reset();
        }
    }

    log::info!(
        "launched {missile_type:?} from hardpoint {hardpoint_index} at {target:?} (quality {lock_quality:.2})"
    );
    events.push(EngagementEvent::Launched {
        missile: missile.to_bits().get(),
        missile_type,
        hardpoint: hardpoint_index,
        lock_quality,
    });

    Ok(missile)
}

/// Returns the locked target and the lock quality to freeze into the missile.
fn check_preconditions(world: &World, shooter: Entity) -> Result<(Entity, f64), FireRejection> {
    {
        let launcher = world
            .get::<&Launcher>(shooter)
            .map_err(|_| FireRejection::NoHardpoints)?;
        if launcher.magazine == 0 {
            return Err(FireRejection::NoAmmo);
        }
        if launcher.hardpoints.is_empty() {
            return Err(FireRejection::NoHardpoints);
        }
    }

    let session = world
        .get::<&LockSession<Entity>>(shooter)
        .map_err(|_| FireRejection::NoTarget)?;
    let target = session.target().ok_or(FireRejection::NoTarget)?;
    if session.state() != LockState::Locked {
        return Err(FireRejection::NotLocked);
    }
    Ok((target, session.progress()))
}

/// Spawn a missile entity. Initial airspeed is the launch velocity's magnitude.
pub fn spawn_missile(world: &mut World, launch: MissileLaunch) -> Entity {
    let state = MissileState::new(
        launch.missile_type,
        launch.spec,
        launch.lock_quality,
        launch.target,
        launch.shooter,
        launch.velocity.length(),
    );
    world.spawn((
        state,
        Position(launch.position),
        Velocity(launch.velocity),
        Orientation::looking_along(launch.forward),
    ))
}

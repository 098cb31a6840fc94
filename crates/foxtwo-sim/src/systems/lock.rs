//! Lock system: advances every shooter's lock session against the directory.

use hecs::{Entity, World};

use foxtwo_core::components::Shooter;
use foxtwo_core::enums::TargetClass;
use foxtwo_core::events::EngagementEvent;
use foxtwo_core::types::{Orientation, Position};
use foxtwo_seeker::{LockEvent, LockSession};

use crate::systems::directory;

/// Run one lock tick for all shooters. `cycle_for` names the shooter (if any)
/// whose pilot asked to cycle targets this tick.
pub fn run(
    world: &mut World,
    classes: &[TargetClass],
    dt: f64,
    cycle_for: Option<Entity>,
    events: &mut Vec<EngagementEvent>,
) {
    let shooters: Vec<(Entity, Position, Orientation)> = world
        .query::<(&Shooter, &Position, &Orientation)>()
        .iter()
        .map(|(entity, (_, pos, orientation))| (entity, *pos, *orientation))
        .collect();

    for (shooter, pos, orientation) in shooters {
        let Ok((max_range, held)) = world
            .get::<&LockSession<Entity>>(shooter)
            .map(|session| (session.params().max_range, session.target()))
        else {
            continue;
        };

        let forward = orientation.forward();
        let mut contacts = directory::scan(world, shooter, pos.0, forward, max_range, classes);
        // A held target stays visible past max range so the session can
        // report why it broke.
        if let Some(target) = held.filter(|t| contacts.iter().all(|c| c.handle != *t)) {
            contacts.extend(directory::track(world, pos.0, forward, target));
        }

        let lock_events = match world.get::<&mut LockSession<Entity>>(shooter) {
            Ok(mut session) => session.update(&contacts, dt, cycle_for == Some(shooter)),
            Err(_) => continue,
        };

        events.extend(lock_events.into_iter().filter_map(to_engagement_event));
    }
}

fn to_engagement_event(event: LockEvent<Entity>) -> Option<EngagementEvent> {
    match event {
        LockEvent::Acquiring { .. } => None,
        LockEvent::LockingTick { progress } => Some(EngagementEvent::LockingTick { progress }),
        LockEvent::LockAchieved { target } => Some(EngagementEvent::LockAchieved {
            target: target.to_bits().get(),
        }),
        LockEvent::LockBroken { target, reason } => Some(EngagementEvent::LockBroken {
            target: target.to_bits().get(),
            reason,
        }),
    }
}

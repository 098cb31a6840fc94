//! Events emitted by the simulation for audio and visual effects.
//!
//! Fire-and-forget: the core never reads them back.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::error::FireRejection;

/// Entity ids in events are `hecs::Entity::to_bits` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngagementEvent {
    /// Periodic tone while acquiring. Tempo rises with `progress`.
    LockingTick { progress: f64 },
    LockAchieved { target: u64 },
    LockBroken { target: u64, reason: BreakReason },
    Launched {
        missile: u64,
        missile_type: MissileType,
        hardpoint: usize,
        lock_quality: f64,
    },
    /// Fire rejected for lack of a target or lock.
    NoLockRejected { reason: FireRejection },
    /// Fire rejected for a launcher reason (ammo, configuration).
    FireRejected { reason: FireRejection },
    Detonated {
        missile: u64,
        position: DVec3,
        hit: bool,
        cause: DetonationCause,
    },
    TargetDestroyed { target: u64 },
    MissileTypeChanged { missile_type: MissileType },
}

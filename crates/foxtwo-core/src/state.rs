//! HUD snapshot: the read-only view handed to the presentation layer each tick.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::EngagementEvent;
use crate::types::SimTime;

/// Complete presentation state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub time: SimTime,
    pub missile_count: u32,
    pub current_missile_type: MissileType,
    pub lock_state: LockState,
    /// Acquisition progress in [0, 1].
    pub lock_progress: f64,
    pub current_target: Option<TargetView>,
    pub missiles: Vec<MissileView>,
    pub explosions: Vec<ExplosionView>,
    pub events: Vec<EngagementEvent>,
}

/// The lock session's current target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub name: String,
    /// Range from the shooter (meters).
    pub range: f64,
}

/// A missile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileView {
    pub id: u64,
    pub missile_type: MissileType,
    pub phase: MissilePhase,
    pub position: DVec3,
    pub speed: f64,
    pub has_fuel: bool,
    pub lock_quality: f64,
}

/// A live explosion effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: DVec3,
    pub radius: f64,
    pub hit: bool,
}

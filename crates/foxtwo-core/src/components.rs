//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior beyond small accessors.
//! Game logic lives in systems, not components.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Marks an entity as a lockable target body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    /// Display name for the HUD.
    pub name: String,
    pub class: TargetClass,
}

/// Hit points. A body at zero health is destroyed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
}

impl Health {
    pub fn full(max: f64) -> Self {
        Self { current: max }
    }
}

/// Spherical collision volume.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f64,
}

/// A launch rail, expressed in the shooter's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hardpoint {
    /// Offset from the shooter's origin (meters).
    pub offset: DVec3,
    /// Launch axis. Normalized on use.
    pub forward: DVec3,
}

/// Launcher state owned by a shooter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Launcher {
    pub magazine: u32,
    pub hardpoints: Vec<Hardpoint>,
    /// Round-robin cursor. Increments on every launch.
    pub next_hardpoint: usize,
    pub missile_type: MissileType,
}

/// Marks an entity as a missile-carrying shooter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shooter;

/// Transient explosion effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    pub radius: f64,
    pub remaining_secs: f64,
    pub hit: bool,
}

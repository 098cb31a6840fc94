//! Fundamental geometric and simulation types.
//!
//! World frame: +Y is up, +Z is the default forward axis, gravity points along -Y.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Position in simulation space (meters).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// Velocity in simulation space (m/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec3);

/// Body orientation. The body's forward axis is `rotation * DVec3::Z`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation(pub DQuat);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    /// Range to another position in meters.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }
}

impl Orientation {
    /// Orientation whose forward axis points along `forward`.
    /// A zero vector yields the identity orientation.
    pub fn looking_along(forward: DVec3) -> Self {
        match forward.try_normalize() {
            Some(dir) => Self(DQuat::from_rotation_arc(DVec3::Z, dir)),
            None => Self(DQuat::IDENTITY),
        }
    }

    /// Unit forward vector.
    pub fn forward(&self) -> DVec3 {
        self.0 * DVec3::Z
    }

    /// Transform a body-local offset into the world frame (rotation only).
    pub fn to_world(&self, local: DVec3) -> DVec3 {
        self.0 * local
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Angle between two directions in degrees. Returns 0 if either is degenerate.
pub fn angle_between_deg(a: DVec3, b: DVec3) -> f64 {
    match (a.try_normalize(), b.try_normalize()) {
        (Some(a), Some(b)) => a.dot(b).clamp(-1.0, 1.0).acos().to_degrees(),
        _ => 0.0,
    }
}

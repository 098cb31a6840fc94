//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Lock session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockState {
    /// No target selected.
    #[default]
    Idle,
    /// Target selected, lock timer running.
    Acquiring,
    /// Lock timer reached the required duration.
    Locked,
}

/// Why a held lock was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakReason {
    /// Drifted past the break angle.
    OffBoresight,
    /// Beyond maximum range.
    OutOfRange,
    /// No longer a live target (destroyed or removed).
    Lost,
}

/// Missile flight phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissilePhase {
    /// Unguided separation from the hardpoint.
    #[default]
    PreGuidance,
    /// Active homing.
    Guiding,
    /// Detonated. No further ticks are processed.
    Terminal,
}

/// Selectable missile type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissileType {
    /// Agile infrared missile with a short motor burn.
    #[default]
    ShortRange,
    /// Faster, longer-burning radar missile with less agility.
    MediumRange,
}

impl MissileType {
    /// All types, in cycling order.
    pub const ALL: [MissileType; 2] = [MissileType::ShortRange, MissileType::MediumRange];

    /// The next type in cycling order (wraps).
    pub fn next(self) -> MissileType {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Target classification, used as the directory's layer filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetClass {
    #[default]
    Aircraft,
    Helicopter,
    Ground,
}

/// Why a missile detonated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetonationCause {
    /// Proximity fuse triggered near the missile's own target.
    Proximity,
    /// Physical contact with a body.
    Impact,
    /// Maximum lifetime reached.
    SelfDestruct,
}

//! Pilot commands sent from the input layer to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

/// Discrete pilot inputs. Each kind is honored at most once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PilotCommand {
    /// Launch a missile at the locked target.
    FireRequested,
    /// Step to the next candidate target.
    CycleTargetRequested,
    /// Step to the next missile type.
    CycleMissileTypeRequested,
}

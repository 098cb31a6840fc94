//! Simulation configuration.
//!
//! Every field has a default drawn from `constants`, so a JSON file only needs
//! to name the values it overrides.

use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::components::Hardpoint;
use crate::constants::*;
use crate::enums::{MissileType, TargetClass};
use crate::error::ConfigError;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Fixed physics timestep (seconds).
    pub dt: f64,
    pub lock: LockConfig,
    pub launch: LaunchConfig,
    pub missiles: MissileProfiles,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            dt: DT,
            lock: LockConfig::default(),
            launch: LaunchConfig::default(),
            missiles: MissileProfiles::default(),
        }
    }
}

impl SimConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check the invariants the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dt <= 0.0 {
            return Err(ConfigError::NonPositive { field: "dt" });
        }
        self.lock.validate()?;
        if self.launch.hardpoints.is_empty() {
            return Err(ConfigError::NoHardpoints);
        }
        Ok(())
    }
}

/// Lock session tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockConfig {
    pub max_range_m: f64,
    /// Half-angle of the acquisition cone.
    pub lock_angle_deg: f64,
    /// Half-angle beyond which a held target breaks. Must be >= `lock_angle_deg`.
    pub break_angle_deg: f64,
    pub lock_time_secs: f64,
    pub tone_interval_slow_secs: f64,
    pub tone_interval_fast_secs: f64,
    /// Classes the target directory will report.
    pub target_classes: Vec<TargetClass>,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            max_range_m: LOCK_MAX_RANGE,
            lock_angle_deg: LOCK_ANGLE_DEG,
            break_angle_deg: LOCK_BREAK_ANGLE_DEG,
            lock_time_secs: LOCK_TIME_SECS,
            tone_interval_slow_secs: LOCK_TONE_INTERVAL_SLOW,
            tone_interval_fast_secs: LOCK_TONE_INTERVAL_FAST,
            target_classes: vec![TargetClass::Aircraft, TargetClass::Helicopter],
        }
    }
}

impl LockConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_range_m <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "lock.max_range_m",
            });
        }
        if self.lock_time_secs <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "lock.lock_time_secs",
            });
        }
        if self.lock_angle_deg > self.break_angle_deg {
            return Err(ConfigError::InvertedHysteresis {
                lock_deg: self.lock_angle_deg,
                break_deg: self.break_angle_deg,
            });
        }
        Ok(())
    }
}

/// Launcher loadout and release behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub magazine: u32,
    pub hardpoints: Vec<Hardpoint>,
    /// Speed added along the hardpoint axis at release (m/s).
    pub separation_boost_mps: f64,
    /// Return the lock session to Idle after each launch.
    /// Off by default so a held lock supports follow-up shots.
    pub reset_lock_on_fire: bool,
    pub initial_missile_type: MissileType,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            magazine: DEFAULT_MAGAZINE,
            hardpoints: default_hardpoints(),
            separation_boost_mps: SEPARATION_BOOST,
            reset_lock_on_fire: false,
            initial_missile_type: MissileType::default(),
        }
    }
}

/// Two pairs of underwing rails, alternating left/right.
fn default_hardpoints() -> Vec<Hardpoint> {
    [(-3.0, -0.6), (3.0, -0.6), (-4.5, -0.5), (4.5, -0.5)]
        .into_iter()
        .map(|(x, y)| Hardpoint {
            offset: DVec3::new(x, y, 0.5),
            forward: DVec3::Z,
        })
        .collect()
}

/// Flight performance for one missile type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissileSpec {
    /// Speed gained per second while the motor burns (m/s²).
    pub acceleration: f64,
    pub max_speed: f64,
    /// Motor burn time (seconds).
    pub fuel_secs: f64,
    /// Speed lost per second after burnout (m/s²).
    pub drag_decel: f64,
    /// Post-burnout speed floor (m/s).
    pub min_glide_speed: f64,
    /// Fraction of gravity applied after burnout.
    pub glide_gravity_factor: f64,
    pub guidance_delay_secs: f64,
    pub max_lifetime_secs: f64,
    /// Multiplier on `max_turn_angle_deg`.
    pub turn_rate: f64,
    /// Degrees per second of heading change at unit turn rate and full lock.
    pub max_turn_angle_deg: f64,
    pub proximity_fuse_m: f64,
    pub explosion_radius_m: f64,
    pub explosion_damage: f64,
    pub effect_secs: f64,
}

impl MissileSpec {
    /// Maximum heading change this tick, in degrees.
    pub fn max_turn_deg(&self, lock_quality: f64, dt: f64) -> f64 {
        self.turn_rate * lock_quality.clamp(0.0, 1.0) * self.max_turn_angle_deg * dt
    }

    fn base() -> Self {
        Self {
            acceleration: SHORT_RANGE_ACCELERATION,
            max_speed: SHORT_RANGE_MAX_SPEED,
            fuel_secs: SHORT_RANGE_FUEL_SECS,
            drag_decel: DRAG_DECELERATION,
            min_glide_speed: MIN_GLIDE_SPEED,
            glide_gravity_factor: GLIDE_GRAVITY_FACTOR,
            guidance_delay_secs: GUIDANCE_DELAY_SECS,
            max_lifetime_secs: SHORT_RANGE_MAX_LIFETIME,
            turn_rate: SHORT_RANGE_TURN_RATE,
            max_turn_angle_deg: MAX_TURN_ANGLE_DEG,
            proximity_fuse_m: PROXIMITY_FUSE_RADIUS,
            explosion_radius_m: EXPLOSION_RADIUS,
            explosion_damage: EXPLOSION_DAMAGE,
            effect_secs: EXPLOSION_EFFECT_SECS,
        }
    }
}

/// One `MissileSpec` per `MissileType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissileProfiles {
    pub short_range: MissileSpec,
    pub medium_range: MissileSpec,
}

impl Default for MissileProfiles {
    fn default() -> Self {
        Self {
            short_range: MissileSpec::base(),
            medium_range: MissileSpec {
                acceleration: MEDIUM_RANGE_ACCELERATION,
                max_speed: MEDIUM_RANGE_MAX_SPEED,
                fuel_secs: MEDIUM_RANGE_FUEL_SECS,
                max_lifetime_secs: MEDIUM_RANGE_MAX_LIFETIME,
                turn_rate: MEDIUM_RANGE_TURN_RATE,
                ..MissileSpec::base()
            },
        }
    }
}

impl MissileProfiles {
    pub fn get(&self, missile_type: MissileType) -> &MissileSpec {
        match missile_type {
            MissileType::ShortRange => &self.short_range,
            MissileType::MediumRange => &self.medium_range,
        }
    }
}

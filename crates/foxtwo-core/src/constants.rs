//! Simulation constants and tuning defaults.
//!
//! These seed `SimConfig::default()`; a loaded config may override any of them.

/// Fixed physics tick rate (Hz).
pub const TICK_RATE: u32 = 50;

/// Seconds per physics tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Slack applied to timer comparisons so accumulated `dt` sums hit their
/// threshold on the expected tick.
pub const TIMER_EPSILON: f64 = 1e-9;

// --- Lock ---

/// Maximum lock range (meters).
pub const LOCK_MAX_RANGE: f64 = 5_000.0;

/// Half-angle of the acquisition cone (degrees).
pub const LOCK_ANGLE_DEG: f64 = 30.0;

/// Half-angle beyond which an existing lock breaks (degrees).
/// Wider than `LOCK_ANGLE_DEG` for hysteresis.
pub const LOCK_BREAK_ANGLE_DEG: f64 = 45.0;

/// Time a target must be held to achieve lock (seconds).
pub const LOCK_TIME_SECS: f64 = 2.0;

/// Locking tone interval at the start of acquisition (seconds).
pub const LOCK_TONE_INTERVAL_SLOW: f64 = 0.5;

/// Locking tone interval just before lock (seconds).
pub const LOCK_TONE_INTERVAL_FAST: f64 = 0.08;

/// Target selection score weight per degree off boresight.
pub const LOCK_SCORE_ANGLE_WEIGHT: f64 = 10.0;

/// Target selection score weight per meter of range.
pub const LOCK_SCORE_RANGE_WEIGHT: f64 = 0.1;

// --- Launch ---

/// Default magazine size.
pub const DEFAULT_MAGAZINE: u32 = 6;

/// Speed added along the hardpoint axis at release (m/s).
pub const SEPARATION_BOOST: f64 = 20.0;

// --- Missile flight ---

/// Gravity acceleration (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Fraction of gravity applied once the motor burns out.
pub const GLIDE_GRAVITY_FACTOR: f64 = 0.3;

/// Short-range (IR) missile: acceleration during burn (m/s²).
pub const SHORT_RANGE_ACCELERATION: f64 = 450.0;

/// Short-range missile top speed (m/s).
pub const SHORT_RANGE_MAX_SPEED: f64 = 850.0;

/// Short-range missile motor burn time (seconds).
pub const SHORT_RANGE_FUEL_SECS: f64 = 3.0;

/// Short-range missile turn rate multiplier.
pub const SHORT_RANGE_TURN_RATE: f64 = 2.0;

/// Short-range missile lifetime before self-destruct (seconds).
pub const SHORT_RANGE_MAX_LIFETIME: f64 = 10.0;

/// Medium-range (radar) missile: acceleration during burn (m/s²).
pub const MEDIUM_RANGE_ACCELERATION: f64 = 300.0;

/// Medium-range missile top speed (m/s).
pub const MEDIUM_RANGE_MAX_SPEED: f64 = 1_100.0;

/// Medium-range missile motor burn time (seconds).
pub const MEDIUM_RANGE_FUEL_SECS: f64 = 6.0;

/// Medium-range missile turn rate multiplier.
pub const MEDIUM_RANGE_TURN_RATE: f64 = 1.2;

/// Medium-range missile lifetime before self-destruct (seconds).
pub const MEDIUM_RANGE_MAX_LIFETIME: f64 = 20.0;

/// Maximum turn angle per second at unit turn rate and full lock (degrees).
pub const MAX_TURN_ANGLE_DEG: f64 = 45.0;

/// Speed lost per second after burnout (m/s²).
pub const DRAG_DECELERATION: f64 = 60.0;

/// Post-burnout speed floor (m/s).
pub const MIN_GLIDE_SPEED: f64 = 150.0;

/// Delay from launch until guidance activates (seconds).
pub const GUIDANCE_DELAY_SECS: f64 = 0.3;

/// Proximity fuse radius (meters).
pub const PROXIMITY_FUSE_RADIUS: f64 = 15.0;

/// Warhead blast radius (meters).
pub const EXPLOSION_RADIUS: f64 = 30.0;

/// Warhead damage at the blast center.
pub const EXPLOSION_DAMAGE: f64 = 100.0;

/// How long an explosion effect stays visible (seconds).
pub const EXPLOSION_EFFECT_SECS: f64 = 2.0;

// --- Bodies ---

/// Default target hit points.
pub const DEFAULT_TARGET_HEALTH: f64 = 100.0;

/// Default collision radius for aircraft-sized bodies (meters).
pub const DEFAULT_TARGET_RADIUS: f64 = 6.0;

//! Missile flight state: the per-missile component and its propulsion model.

use glam::DVec3;
use hecs::Entity;

use foxtwo_core::config::MissileSpec;
use foxtwo_core::constants::{GRAVITY, TIMER_EPSILON};
use foxtwo_core::enums::{MissilePhase, MissileType};

/// In-flight missile state.
///
/// The target handle is non-owning: liveness is checked against the world
/// every tick and the last seen position is kept for when it disappears.
#[derive(Debug, Clone)]
pub struct MissileState {
    pub phase: MissilePhase,
    pub missile_type: MissileType,
    /// Performance profile frozen at launch.
    pub spec: MissileSpec,
    /// Lock quality captured at launch, in [0, 1]. Scales guidance authority.
    pub lock_quality: f64,
    pub target: Option<Entity>,
    pub last_known_target_position: Option<DVec3>,
    /// Set once the final turn toward the last known position has been made.
    pub steered_to_last_known: bool,
    /// Launching body. Never collides with its own missile.
    pub shooter: Entity,
    /// Seconds since launch.
    pub age: f64,
    /// Airspeed along the forward axis (m/s).
    pub speed: f64,
    /// Accumulated post-burnout sink rate (m/s, downward).
    pub sink_rate: f64,
    fuel_exhausted: bool,
}

impl MissileState {
    pub fn new(
        missile_type: MissileType,
        spec: MissileSpec,
        lock_quality: f64,
        target: Option<Entity>,
        shooter: Entity,
        initial_speed: f64,
    ) -> Self {
        Self {
            phase: MissilePhase::PreGuidance,
            missile_type,
            spec,
            lock_quality: lock_quality.clamp(0.0, 1.0),
            target,
            last_known_target_position: None,
            steered_to_last_known: false,
            shooter,
            age: 0.0,
            speed: initial_speed,
            sink_rate: 0.0,
            fuel_exhausted: false,
        }
    }

    /// Whether the motor is still burning. Once false, false forever.
    pub fn has_fuel(&self) -> bool {
        !self.fuel_exhausted && self.age + TIMER_EPSILON < self.spec.fuel_secs
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == MissilePhase::Terminal
    }

    pub fn guidance_active(&self) -> bool {
        self.age + TIMER_EPSILON >= self.spec.guidance_delay_secs
    }

    pub fn lifetime_expired(&self) -> bool {
        self.age + TIMER_EPSILON >= self.spec.max_lifetime_secs
    }

    /// Advance the missile clock and latch burnout.
    pub fn advance_age(&mut self, dt: f64) {
        self.age += dt;
        if !self.fuel_exhausted && !self.has_fuel() {
            self.fuel_exhausted = true;
            log::debug!("motor burnout at {:.2}s, {:.0} m/s", self.age, self.speed);
        }
    }

    /// Thrust while burning (capped at max speed); afterwards drag down to
    /// the glide floor plus a partial-gravity sink.
    pub fn update_propulsion(&mut self, dt: f64) {
        if self.has_fuel() {
            self.speed = (self.speed + self.spec.acceleration * dt).min(self.spec.max_speed);
        } else {
            self.speed = (self.speed - self.spec.drag_decel * dt).max(self.spec.min_glide_speed);
            self.sink_rate += GRAVITY * self.spec.glide_gravity_factor * dt;
        }
    }

    /// Velocity for this tick given the current forward axis.
    pub fn velocity(&self, forward: DVec3) -> DVec3 {
        forward * self.speed + DVec3::NEG_Y * self.sink_rate
    }

    /// Heading change allowed this tick, in degrees.
    pub fn max_turn_deg(&self, dt: f64) -> f64 {
        self.spec.max_turn_deg(self.lock_quality, dt)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use foxtwo_core::config::MissileProfiles;

    use super::*;

    fn missile(speed: f64) -> MissileState {
        let mut world = hecs::World::new();
        let shooter = world.spawn(());
        MissileState::new(
            MissileType::ShortRange,
            MissileProfiles::default().short_range,
            1.0,
            None,
            shooter,
            speed,
        )
    }

    #[test]
    fn test_thrust_accelerates_to_cap() {
        let mut m = missile(20.0);
        let dt = 0.02;
        m.advance_age(dt);
        m.update_propulsion(dt);
        assert_relative_eq!(m.speed, 20.0 + m.spec.acceleration * dt);

        for _ in 0..100 {
            m.advance_age(dt);
            m.update_propulsion(dt);
        }
        assert!(m.has_fuel());
        assert_relative_eq!(m.speed, m.spec.max_speed);
        assert_eq!(m.sink_rate, 0.0);
    }

    #[test]
    fn test_burnout_is_one_way() {
        let mut m = missile(300.0);
        let dt = 0.02;
        let mut burned_out_at = None;
        for tick in 1..=500 {
            m.advance_age(dt);
            m.update_propulsion(dt);
            if burned_out_at.is_none() && !m.has_fuel() {
                burned_out_at = Some(tick);
            }
            if burned_out_at.is_some() {
                assert!(!m.has_fuel(), "fuel returned at tick {tick}");
            }
        }
        let expected = (m.spec.fuel_secs / dt).round() as usize;
        assert_eq!(burned_out_at, Some(expected));
    }

    #[test]
    fn test_glide_decelerates_to_floor_and_sinks() {
        let mut m = missile(800.0);
        m.age = m.spec.fuel_secs;
        m.advance_age(0.1);
        assert!(!m.has_fuel());

        m.update_propulsion(0.1);
        assert_relative_eq!(m.speed, 800.0 - m.spec.drag_decel * 0.1);
        assert!(m.sink_rate > 0.0);

        for _ in 0..1_000 {
            m.update_propulsion(0.1);
        }
        assert_relative_eq!(m.speed, m.spec.min_glide_speed);
        let v = m.velocity(DVec3::Z);
        assert!(v.y < 0.0, "post-burnout velocity should sink");
    }

    #[test]
    fn test_rewinding_age_does_not_refuel() {
        let mut m = missile(300.0);
        m.age = m.spec.fuel_secs;
        m.advance_age(0.02);
        assert!(!m.has_fuel());
        m.age = 0.0;
        assert!(!m.has_fuel());
    }

    #[test]
    fn test_lock_quality_clamped() {
        let mut world = hecs::World::new();
        let shooter = world.spawn(());
        let spec = MissileProfiles::default().short_range;
        let m = MissileState::new(MissileType::ShortRange, spec, 1.7, None, shooter, 0.0);
        assert_eq!(m.lock_quality, 1.0);
        assert_relative_eq!(m.max_turn_deg(1.0), spec.turn_rate * spec.max_turn_angle_deg);
    }
}

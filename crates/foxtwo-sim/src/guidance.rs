//! Guidance and warhead math for missiles.
//!
//! Provides lead-point prediction, turn-rate-limited heading correction,
//! swept-sphere contact tests and blast falloff.

use glam::{DQuat, DVec3};

/// Speed floor used when estimating time to intercept (m/s).
const MIN_CLOSING_SPEED: f64 = 1.0;

/// Predict where the target will be when the missile arrives.
///
/// Zero-order linear prediction: `tti = distance / missile_speed`, then
/// `target + target_velocity * tti`. A target with no velocity is stationary.
pub fn lead_point(
    missile_pos: DVec3,
    missile_speed: f64,
    target_pos: DVec3,
    target_vel: Option<DVec3>,
) -> DVec3 {
    let Some(target_vel) = target_vel else {
        return target_pos;
    };
    let tti = missile_pos.distance(target_pos) / missile_speed.max(MIN_CLOSING_SPEED);
    target_pos + target_vel * tti
}

/// Rotate `orientation` so its forward axis moves toward `desired` by at most
/// `max_turn_deg`. Overshoot is impossible: a smaller error is closed exactly.
pub fn turn_toward(orientation: DQuat, desired: DVec3, max_turn_deg: f64) -> DQuat {
    let Some(desired) = desired.try_normalize() else {
        return orientation;
    };
    if max_turn_deg <= 0.0 {
        return orientation;
    }

    let forward = orientation * DVec3::Z;
    let error = forward.angle_between(desired);
    if error < 1e-9 {
        return orientation;
    }

    let arc = DQuat::from_rotation_arc(forward, desired);
    let fraction = (max_turn_deg.to_radians() / error).min(1.0);
    (DQuat::IDENTITY.slerp(arc, fraction) * orientation).normalize()
}

/// Shortest distance from `point` to the segment `start..end`.
pub fn segment_distance(start: DVec3, end: DVec3, point: DVec3) -> f64 {
    let seg = end - start;
    let len_sq = seg.length_squared();
    if len_sq < 1e-12 {
        return start.distance(point);
    }
    let t = ((point - start).dot(seg) / len_sq).clamp(0.0, 1.0);
    (start + seg * t).distance(point)
}

/// Blast falloff: 1 at the center, 0 at and beyond `radius`.
pub fn falloff(distance: f64, radius: f64) -> f64 {
    if radius <= 0.0 || distance >= radius {
        0.0
    } else {
        1.0 - distance / radius
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_lead_point_ahead_of_target() {
        let missile = DVec3::ZERO;
        let target = DVec3::new(0.0, 0.0, 1_000.0);
        let vel = DVec3::new(100.0, 0.0, 0.0);

        let lead = lead_point(missile, 500.0, target, Some(vel));
        // tti = 1000 / 500 = 2s
        assert_relative_eq!(lead.x, 200.0);
        assert_relative_eq!(lead.z, 1_000.0);
    }

    #[test]
    fn test_lead_point_without_velocity_is_target() {
        let target = DVec3::new(10.0, 20.0, 30.0);
        assert_eq!(lead_point(DVec3::ZERO, 500.0, target, None), target);
    }

    #[test]
    fn test_lead_point_zero_speed_is_finite() {
        let lead = lead_point(DVec3::ZERO, 0.0, DVec3::Z * 10.0, Some(DVec3::X));
        assert!(lead.is_finite());
    }

    #[test]
    fn test_turn_is_rate_limited() {
        let turned = turn_toward(DQuat::IDENTITY, DVec3::X, 10.0);
        let forward = turned * DVec3::Z;
        assert_relative_eq!(forward.angle_between(DVec3::Z).to_degrees(), 10.0, epsilon = 1e-9);
        // Turned toward +X, not some other axis.
        assert!(forward.x > 0.0);
        assert_relative_eq!(forward.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_small_error_closed_exactly() {
        let desired = DVec3::new(0.01, 0.0, 1.0);
        let turned = turn_toward(DQuat::IDENTITY, desired, 45.0);
        let forward = turned * DVec3::Z;
        assert!(forward.angle_between(desired) < 1e-6);
    }

    #[test]
    fn test_zero_authority_holds_heading() {
        let turned = turn_toward(DQuat::IDENTITY, DVec3::X, 0.0);
        assert_eq!(turned, DQuat::IDENTITY);
        let held = turn_toward(DQuat::IDENTITY, DVec3::ZERO, 30.0);
        assert_eq!(held, DQuat::IDENTITY);
    }

    #[test]
    fn test_turn_away_from_reverse_direction() {
        // Target directly behind: still turns by the limit.
        let turned = turn_toward(DQuat::IDENTITY, -DVec3::Z, 20.0);
        let forward = turned * DVec3::Z;
        assert_relative_eq!(forward.angle_between(DVec3::Z).to_degrees(), 20.0, epsilon = 1e-6);
    }

    #[test]
    fn test_segment_distance() {
        let a = DVec3::ZERO;
        let b = DVec3::new(0.0, 0.0, 10.0);
        assert_relative_eq!(segment_distance(a, b, DVec3::new(3.0, 0.0, 5.0)), 3.0);
        assert_relative_eq!(segment_distance(a, b, DVec3::new(0.0, 0.0, 14.0)), 4.0);
        assert_relative_eq!(segment_distance(a, a, DVec3::new(0.0, 2.0, 0.0)), 2.0);
    }

    #[test]
    fn test_falloff_linear() {
        assert_relative_eq!(falloff(0.0, 30.0), 1.0);
        assert_relative_eq!(falloff(15.0, 30.0), 0.5);
        assert_eq!(falloff(30.0, 30.0), 0.0);
        assert_eq!(falloff(45.0, 30.0), 0.0);
        assert_eq!(falloff(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_lead_pursuit_intercepts_crossing_target() {
        let dt = 0.02;
        let speed = 800.0;
        let max_turn_deg_per_sec = 90.0;
        let mut m_pos = DVec3::ZERO;
        let mut m_rot = DQuat::IDENTITY;
        let mut t_pos = DVec3::new(2_000.0, 0.0, 6_000.0);
        let t_vel = DVec3::new(-250.0, 0.0, 0.0);

        let mut min_range = f64::MAX;
        for _ in 0..1_000 {
            let lead = lead_point(m_pos, speed, t_pos, Some(t_vel));
            m_rot = turn_toward(m_rot, lead - m_pos, max_turn_deg_per_sec * dt);

            let next = m_pos + (m_rot * DVec3::Z) * speed * dt;
            let t_next = t_pos + t_vel * dt;
            // Measure in the target's frame so the sweep is exact.
            let rel_end = next - (t_next - t_pos);
            min_range = min_range.min(segment_distance(m_pos, rel_end, t_pos));
            m_pos = next;
            t_pos = t_next;
            if min_range < 5.0 {
                break;
            }
        }

        assert!(
            min_range < 15.0,
            "lead pursuit should converge on a crossing target, min range: {min_range:.1}m"
        );
    }
}
